//! Group 4: character conditions
//!
//! Death and health checks, AI and targeting state, and the class and
//! covenant lookups. Class and covenant accept either the enum, the raw
//! number, or the in-game name; an unknown name is the one thing in this
//! crate that can fail.

use super::EventWriter;
use crate::error::WriteError;
use crate::types::{AiState, Arg, ClassId, ComparisonType, Condition, CovenantId};

impl EventWriter {
    /// 4[00]: 0 = alive, 1 = dead.
    pub fn if_entity_death_state(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        required_state: bool,
    ) {
        self.raw(
            4,
            0,
            &[
                output_condition.into(),
                entity_id.into(),
                required_state.into(),
            ],
        );
    }

    pub fn if_entity_dead(&mut self, output_condition: Condition, entity_id: i32) {
        self.if_entity_death_state(output_condition, entity_id, true);
    }

    pub fn if_entity_alive(&mut self, output_condition: Condition, entity_id: i32) {
        self.if_entity_death_state(output_condition, entity_id, false);
    }

    /// 4[01]: hostility runs from the first entity toward the second.
    pub fn if_entity_hostile(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        attacking_entity_id: i32,
    ) {
        self.raw(
            4,
            1,
            &[
                output_condition.into(),
                entity_id.into(),
                attacking_entity_id.into(),
            ],
        );
    }

    /// 4[02]: compares the health ratio, a value between 0 and 1.
    pub fn if_entity_health_comparison(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        comparison: ComparisonType,
        health_comparison: f32,
    ) {
        self.raw(
            4,
            2,
            &[
                output_condition.into(),
                entity_id.into(),
                Arg::I8(comparison as i8),
                health_comparison.into(),
            ],
        );
    }

    pub fn if_entity_health_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        health_comparison: f32,
    ) {
        self.if_entity_health_comparison(
            output_condition,
            entity_id,
            ComparisonType::Equal,
            health_comparison,
        );
    }

    pub fn if_entity_health_not_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        health_comparison: f32,
    ) {
        self.if_entity_health_comparison(
            output_condition,
            entity_id,
            ComparisonType::NotEqual,
            health_comparison,
        );
    }

    pub fn if_entity_health_greater_than(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        health_comparison: f32,
    ) {
        self.if_entity_health_comparison(
            output_condition,
            entity_id,
            ComparisonType::GreaterThan,
            health_comparison,
        );
    }

    pub fn if_entity_health_less_than(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        health_comparison: f32,
    ) {
        self.if_entity_health_comparison(
            output_condition,
            entity_id,
            ComparisonType::LessThan,
            health_comparison,
        );
    }

    pub fn if_entity_health_greater_than_or_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        health_comparison: f32,
    ) {
        self.if_entity_health_comparison(
            output_condition,
            entity_id,
            ComparisonType::GreaterThanOrEqual,
            health_comparison,
        );
    }

    pub fn if_entity_health_less_than_or_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        health_comparison: f32,
    ) {
        self.if_entity_health_comparison(
            output_condition,
            entity_id,
            ComparisonType::LessThanOrEqual,
            health_comparison,
        );
    }

    /// 4[03]: 0 = human, 1 = white ghost, 2 = black ghost, 8 = hollow,
    /// 12 = intruder.
    pub fn if_character_type(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        character_type: i8,
    ) {
        self.raw(
            4,
            3,
            &[
                output_condition.into(),
                entity_id.into(),
                character_type.into(),
            ],
        );
    }

    pub fn if_character_human(&mut self, output_condition: Condition, entity_id: i32) {
        self.if_character_type(output_condition, entity_id, 0);
    }

    pub fn if_character_hollow(&mut self, output_condition: Condition, entity_id: i32) {
        self.if_character_type(output_condition, entity_id, 8);
    }

    /// 4[04]
    pub fn if_entity_target_state(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        targeted_entity_id: i32,
        required_target_state: bool,
    ) {
        self.raw(
            4,
            4,
            &[
                output_condition.into(),
                entity_id.into(),
                targeted_entity_id.into(),
                required_target_state.into(),
            ],
        );
    }

    pub fn if_entity_targeting(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        targeted_entity_id: i32,
    ) {
        self.if_entity_target_state(output_condition, entity_id, targeted_entity_id, true);
    }

    pub fn if_entity_not_targeting(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        targeted_entity_id: i32,
    ) {
        self.if_entity_target_state(output_condition, entity_id, targeted_entity_id, false);
    }

    /// 4[05]
    pub fn if_entity_special_effect_state(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        special_effect_id: i32,
        required_state: bool,
    ) {
        self.raw(
            4,
            5,
            &[
                output_condition.into(),
                entity_id.into(),
                special_effect_id.into(),
                required_state.into(),
            ],
        );
    }

    pub fn if_entity_has_special_effect(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        special_effect_id: i32,
    ) {
        self.if_entity_special_effect_state(output_condition, entity_id, special_effect_id, true);
    }

    pub fn if_entity_does_not_have_special_effect(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        special_effect_id: i32,
    ) {
        self.if_entity_special_effect_state(output_condition, entity_id, special_effect_id, false);
    }

    /// 4[06]
    pub fn if_npc_part_health_comparison(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        part_npc_type: i32,
        health_threshold: i32,
        comparison: ComparisonType,
    ) {
        self.raw(
            4,
            6,
            &[
                output_condition.into(),
                entity_id.into(),
                part_npc_type.into(),
                health_threshold.into(),
                Arg::I8(comparison as i8),
            ],
        );
    }

    pub fn if_npc_part_health_less_than_or_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        part_npc_type: i32,
        health_threshold: i32,
    ) {
        self.if_npc_part_health_comparison(
            output_condition,
            entity_id,
            part_npc_type,
            health_threshold,
            ComparisonType::LessThanOrEqual,
        );
    }

    /// 4[07]
    pub fn if_entity_backread_state(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        loaded: bool,
    ) {
        self.raw(
            4,
            7,
            &[output_condition.into(), entity_id.into(), loaded.into()],
        );
    }

    pub fn if_entity_backread_enabled(&mut self, output_condition: Condition, entity_id: i32) {
        self.if_entity_backread_state(output_condition, entity_id, true);
    }

    pub fn if_entity_backread_disabled(&mut self, output_condition: Condition, entity_id: i32) {
        self.if_entity_backread_state(output_condition, entity_id, false);
    }

    /// 4[08]
    pub fn if_event_message_id_match_state(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        event_message_id: i32,
        match_state: bool,
    ) {
        self.raw(
            4,
            8,
            &[
                output_condition.into(),
                entity_id.into(),
                event_message_id.into(),
                match_state.into(),
            ],
        );
    }

    pub fn if_event_message_id_match(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        event_message_id: i32,
    ) {
        self.if_event_message_id_match_state(output_condition, entity_id, event_message_id, true);
    }

    pub fn if_event_message_id_does_not_match(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        event_message_id: i32,
    ) {
        self.if_event_message_id_match_state(output_condition, entity_id, event_message_id, false);
    }

    /// 4[09]
    pub fn if_ai_state(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        required_ai_state: AiState,
    ) {
        self.raw(
            4,
            9,
            &[
                output_condition.into(),
                entity_id.into(),
                required_ai_state.into(),
            ],
        );
    }

    /// 4[10]: whether the player is holding out the Skull Lantern.
    pub fn if_skull_lantern_activated(&mut self, output_condition: Condition) {
        self.raw(4, 10, &[output_condition.into(), Arg::U8(1)]);
    }

    pub fn if_skull_lantern_not_activated(&mut self, output_condition: Condition) {
        self.raw(4, 10, &[output_condition.into(), Arg::U8(0)]);
    }

    /// 4[11]: accepts a [`Class`](crate::types::Class), a raw number, or a
    /// name such as `"pyromancer"`.
    pub fn if_player_class<C>(
        &mut self,
        output_condition: Condition,
        class: C,
    ) -> Result<(), WriteError>
    where
        C: TryInto<ClassId>,
        WriteError: From<C::Error>,
    {
        let ClassId(class) = class.try_into()?;
        self.raw(4, 11, &[output_condition.into(), class.into()]);
        Ok(())
    }

    /// 4[12]: accepts a [`Covenant`](crate::types::Covenant), a raw number,
    /// or a name such as `"chaos servant"`. Pass `"none"` or 0 for no
    /// covenant.
    pub fn if_player_covenant<C>(
        &mut self,
        output_condition: Condition,
        covenant: C,
    ) -> Result<(), WriteError>
    where
        C: TryInto<CovenantId>,
        WriteError: From<C::Error>,
    {
        let CovenantId(covenant) = covenant.try_into()?;
        self.raw(4, 12, &[output_condition.into(), covenant.into()]);
        Ok(())
    }

    /// 4[13]
    pub fn if_player_soul_level_comparison(
        &mut self,
        output_condition: Condition,
        comparison: ComparisonType,
        comparison_value: u32,
    ) {
        self.raw(
            4,
            13,
            &[
                output_condition.into(),
                Arg::U8(comparison as u8),
                comparison_value.into(),
            ],
        );
    }

    pub fn if_player_soul_level_greater_than_or_equal(
        &mut self,
        output_condition: Condition,
        comparison_value: u32,
    ) {
        self.if_player_soul_level_comparison(
            output_condition,
            ComparisonType::GreaterThanOrEqual,
            comparison_value,
        );
    }

    pub fn if_player_soul_level_less_than_or_equal(
        &mut self,
        output_condition: Condition,
        comparison_value: u32,
    ) {
        self.if_player_soul_level_comparison(
            output_condition,
            ComparisonType::LessThanOrEqual,
            comparison_value,
        );
    }

    /// 4[14]: absolute health points rather than the ratio.
    pub fn if_entity_health_value_comparison(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        comparison: ComparisonType,
        comparison_value: i32,
    ) {
        self.raw(
            4,
            14,
            &[
                output_condition.into(),
                entity_id.into(),
                Arg::U8(comparison as u8),
                comparison_value.into(),
            ],
        );
    }

    pub fn if_entity_health_value_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        comparison_value: i32,
    ) {
        self.if_entity_health_value_comparison(
            output_condition,
            entity_id,
            ComparisonType::Equal,
            comparison_value,
        );
    }

    pub fn if_entity_health_value_not_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        comparison_value: i32,
    ) {
        self.if_entity_health_value_comparison(
            output_condition,
            entity_id,
            ComparisonType::NotEqual,
            comparison_value,
        );
    }

    pub fn if_entity_health_value_greater_than(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        comparison_value: i32,
    ) {
        self.if_entity_health_value_comparison(
            output_condition,
            entity_id,
            ComparisonType::GreaterThan,
            comparison_value,
        );
    }

    pub fn if_entity_health_value_less_than(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        comparison_value: i32,
    ) {
        self.if_entity_health_value_comparison(
            output_condition,
            entity_id,
            ComparisonType::LessThan,
            comparison_value,
        );
    }

    pub fn if_entity_health_value_greater_than_or_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        comparison_value: i32,
    ) {
        self.if_entity_health_value_comparison(
            output_condition,
            entity_id,
            ComparisonType::GreaterThanOrEqual,
            comparison_value,
        );
    }

    pub fn if_entity_health_value_less_than_or_equal(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        comparison_value: i32,
    ) {
        self.if_entity_health_value_comparison(
            output_condition,
            entity_id,
            ComparisonType::LessThanOrEqual,
            comparison_value,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AND1, CONT, Class, Covenant, RestartType};

    #[test]
    fn death_check_renders_the_required_state_as_a_bit() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_entity_dead(CONT, 1810800);
        assert_eq!(w.lines()[1], "    4[00] (0, 1810800, 1)");
    }

    #[test]
    fn health_comparison_wrappers_pick_the_comparison_number() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_entity_health_less_than_or_equal(CONT, 1810800, 0.0);
        assert_eq!(w.lines()[1], "    4[02] (0, 1810800, 5, 0.0)");
    }

    #[test]
    fn class_check_accepts_enum_number_and_name() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_player_class(CONT, Class::Pyromancer).unwrap();
        w.if_player_class(CONT, 7u8).unwrap();
        w.if_player_class(CONT, "Pyromancer").unwrap();
        assert_eq!(w.lines()[1], "    4[11] (0, 7)");
        assert_eq!(w.lines()[2], "    4[11] (0, 7)");
        assert_eq!(w.lines()[3], "    4[11] (0, 7)");
    }

    #[test]
    fn unknown_class_name_is_an_error_and_writes_nothing() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        let err = w.if_player_class(CONT, "paladin").unwrap_err();
        assert!(matches!(err, WriteError::UnrecognizedClass(name) if name == "paladin"));
        assert_eq!(w.instruction_count(), 0);
    }

    #[test]
    fn covenant_check_uses_its_own_opcode() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_player_covenant(AND1, Covenant::ChaosServant).unwrap();
        w.if_player_covenant(AND1, "way of white").unwrap();
        assert_eq!(w.lines()[1], "    4[12] (1, 9)");
        assert_eq!(w.lines()[2], "    4[12] (1, 1)");
    }

    #[test]
    fn ai_state_check_renders_the_state_number() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_ai_state(CONT, 1810800, AiState::Battle);
        assert_eq!(w.lines()[1], "    4[09] (0, 1810800, 3)");
    }
}
