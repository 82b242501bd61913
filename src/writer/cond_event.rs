//! Group 3: event conditions
//!
//! Flag checks, area and distance tests, item ownership, action button
//! prompts and session state. The player character is entity 10000, which
//! the player-flavoured wrappers bake in.

use super::EventWriter;
use crate::types::{Arg, ComparisonType, Condition, FlagType};

/// The player's fixed entity id.
const PLAYER: i32 = 10000;

impl EventWriter {
    /// 3[00]
    pub fn if_event_flag_state(
        &mut self,
        output_condition: Condition,
        required_flag_state: bool,
        event_flag_type: FlagType,
        event_flag_id: i32,
    ) {
        self.raw(
            3,
            0,
            &[
                output_condition.into(),
                required_flag_state.into(),
                event_flag_type.into(),
                event_flag_id.into(),
            ],
        );
    }

    pub fn if_event_flag_on(
        &mut self,
        output_condition: Condition,
        event_flag_type: FlagType,
        event_flag_id: i32,
    ) {
        self.if_event_flag_state(output_condition, true, event_flag_type, event_flag_id);
    }

    pub fn if_event_flag_off(
        &mut self,
        output_condition: Condition,
        event_flag_type: FlagType,
        event_flag_id: i32,
    ) {
        self.if_event_flag_state(output_condition, false, event_flag_type, event_flag_id);
    }

    /// 3[01]
    pub fn if_event_flag_range_state(
        &mut self,
        output_condition: Condition,
        required_flag_state: bool,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.raw(
            3,
            1,
            &[
                output_condition.into(),
                required_flag_state.into(),
                event_flag_type.into(),
                start_event_flag_id.into(),
                end_event_flag_id.into(),
            ],
        );
    }

    pub fn if_event_flag_range_on(
        &mut self,
        output_condition: Condition,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.if_event_flag_range_state(
            output_condition,
            true,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
        );
    }

    pub fn if_event_flag_range_off(
        &mut self,
        output_condition: Condition,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.if_event_flag_range_state(
            output_condition,
            false,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
        );
    }

    /// 3[02]: note the inside flag precedes the entity pair on the wire.
    pub fn if_entity_inside_or_outside_area(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        area_entity_id: i32,
        is_inside: bool,
    ) {
        self.raw(
            3,
            2,
            &[
                output_condition.into(),
                is_inside.into(),
                entity_id.into(),
                area_entity_id.into(),
            ],
        );
    }

    pub fn if_entity_inside_area(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        area_entity_id: i32,
    ) {
        self.if_entity_inside_or_outside_area(output_condition, entity_id, area_entity_id, true);
    }

    pub fn if_entity_outside_area(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        area_entity_id: i32,
    ) {
        self.if_entity_inside_or_outside_area(output_condition, entity_id, area_entity_id, false);
    }

    pub fn if_player_inside_area(&mut self, output_condition: Condition, area_entity_id: i32) {
        self.if_entity_inside_or_outside_area(output_condition, PLAYER, area_entity_id, true);
    }

    pub fn if_player_outside_area(&mut self, output_condition: Condition, area_entity_id: i32) {
        self.if_entity_inside_or_outside_area(output_condition, PLAYER, area_entity_id, false);
    }

    /// 3[03]
    pub fn if_entity_within_or_beyond_distance(
        &mut self,
        output_condition: Condition,
        first_entity_id: i32,
        second_entity_id: i32,
        required_distance: f32,
        is_within: bool,
    ) {
        self.raw(
            3,
            3,
            &[
                output_condition.into(),
                is_within.into(),
                first_entity_id.into(),
                second_entity_id.into(),
                required_distance.into(),
            ],
        );
    }

    pub fn if_entity_within_distance(
        &mut self,
        output_condition: Condition,
        first_entity_id: i32,
        second_entity_id: i32,
        required_distance: f32,
    ) {
        self.if_entity_within_or_beyond_distance(
            output_condition,
            first_entity_id,
            second_entity_id,
            required_distance,
            true,
        );
    }

    pub fn if_entity_beyond_distance(
        &mut self,
        output_condition: Condition,
        first_entity_id: i32,
        second_entity_id: i32,
        required_distance: f32,
    ) {
        self.if_entity_within_or_beyond_distance(
            output_condition,
            first_entity_id,
            second_entity_id,
            required_distance,
            false,
        );
    }

    pub fn if_player_within_distance(
        &mut self,
        output_condition: Condition,
        target_entity_id: i32,
        required_distance: f32,
    ) {
        self.if_entity_within_or_beyond_distance(
            output_condition,
            PLAYER,
            target_entity_id,
            required_distance,
            true,
        );
    }

    pub fn if_player_beyond_distance(
        &mut self,
        output_condition: Condition,
        target_entity_id: i32,
        required_distance: f32,
    ) {
        self.if_entity_within_or_beyond_distance(
            output_condition,
            PLAYER,
            target_entity_id,
            required_distance,
            false,
        );
    }

    /// 3[04]: inventory only, Bottomless Box excluded.
    pub fn if_player_item_state(
        &mut self,
        output_condition: Condition,
        item_type: u8,
        item_id: i32,
        required_state: bool,
    ) {
        self.raw(
            3,
            4,
            &[
                output_condition.into(),
                item_type.into(),
                item_id.into(),
                required_state.into(),
            ],
        );
    }

    pub fn if_player_has_item(&mut self, output_condition: Condition, item_type: u8, item_id: i32) {
        self.if_player_item_state(output_condition, item_type, item_id, true);
    }

    pub fn if_player_does_not_have_item(
        &mut self,
        output_condition: Condition,
        item_type: u8,
        item_id: i32,
    ) {
        self.if_player_item_state(output_condition, item_type, item_id, false);
    }

    /// 3[05]: the "A: Pull lever" style prompt. Category: 0 = object,
    /// 1 = area, 2 = character. Pad id 0 is the confirm button.
    #[allow(clippy::too_many_arguments)]
    pub fn if_action_button_state(
        &mut self,
        output_condition: Condition,
        category: i32,
        target_entity_id: i32,
        reaction_angle: f32,
        damipoly_id: i16,
        reaction_distance: f32,
        help_id: i32,
        reaction_attribute: u8,
        pad_id: i32,
    ) {
        self.raw(
            3,
            5,
            &[
                output_condition.into(),
                category.into(),
                target_entity_id.into(),
                reaction_angle.into(),
                damipoly_id.into(),
                reaction_distance.into(),
                help_id.into(),
                reaction_attribute.into(),
                pad_id.into(),
            ],
        );
    }

    /// 3[06]: this opcode numbers the states differently from group 1003:
    /// 0 = host, 1 = client, 2 = singleplayer, 3 = multiplayer.
    pub fn if_multiplayer_state(&mut self, output_condition: Condition, required_state: i8) {
        self.raw(3, 6, &[output_condition.into(), required_state.into()]);
    }

    pub fn if_host(&mut self, output_condition: Condition) {
        self.if_multiplayer_state(output_condition, 0);
    }

    pub fn if_client(&mut self, output_condition: Condition) {
        self.if_multiplayer_state(output_condition, 1);
    }

    pub fn if_singleplayer(&mut self, output_condition: Condition) {
        self.if_multiplayer_state(output_condition, 2);
    }

    pub fn if_multiplayer(&mut self, output_condition: Condition) {
        self.if_multiplayer_state(output_condition, 3);
    }

    /// 3[07]
    pub fn if_all_players_inside_or_outside_area(
        &mut self,
        output_condition: Condition,
        area_entity_id: i32,
        is_inside: bool,
    ) {
        self.raw(
            3,
            7,
            &[
                output_condition.into(),
                is_inside.into(),
                area_entity_id.into(),
            ],
        );
    }

    pub fn if_all_players_inside_area(&mut self, output_condition: Condition, area_entity_id: i32) {
        self.if_all_players_inside_or_outside_area(output_condition, area_entity_id, true);
    }

    pub fn if_all_players_outside_area(
        &mut self,
        output_condition: Condition,
        area_entity_id: i32,
    ) {
        self.if_all_players_inside_or_outside_area(output_condition, area_entity_id, false);
    }

    /// 3[08]
    pub fn if_world_area_state(
        &mut self,
        output_condition: Condition,
        area_id: u8,
        block_id: u8,
        is_inside: bool,
    ) {
        self.raw(
            3,
            8,
            &[
                output_condition.into(),
                is_inside.into(),
                area_id.into(),
                block_id.into(),
            ],
        );
    }

    pub fn if_in_world_area(&mut self, output_condition: Condition, area_id: u8, block_id: u8) {
        self.if_world_area_state(output_condition, area_id, block_id, true);
    }

    pub fn if_not_in_world_area(&mut self, output_condition: Condition, area_id: u8, block_id: u8) {
        self.if_world_area_state(output_condition, area_id, block_id, false);
    }

    /// 3[09]
    pub fn if_multiplayer_event(&mut self, output_condition: Condition, multiplayer_event_id: u32) {
        self.raw(
            3,
            9,
            &[output_condition.into(), multiplayer_event_id.into()],
        );
    }

    /// 3[10]: compares the count of true flags in the inclusive range.
    pub fn if_count_true_event_flags_in_range(
        &mut self,
        output_condition: Condition,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
        comparison: ComparisonType,
        count_comparison: i32,
    ) {
        self.raw(
            3,
            10,
            &[
                output_condition.into(),
                event_flag_type.into(),
                start_event_flag_id.into(),
                end_event_flag_id.into(),
                Arg::I8(comparison as i8),
                count_comparison.into(),
            ],
        );
    }

    pub fn if_at_least_one_true_flag_in_range(
        &mut self,
        output_condition: Condition,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.if_count_true_event_flags_in_range(
            output_condition,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
            ComparisonType::GreaterThanOrEqual,
            1,
        );
    }

    /// 3[11]: tendency type: 0 = white, 1 = black.
    pub fn if_world_tendency_comparison(
        &mut self,
        output_condition: Condition,
        tendency_type: u8,
        comparison: ComparisonType,
        tendency_comparison: u8,
    ) {
        self.raw(
            3,
            11,
            &[
                output_condition.into(),
                tendency_type.into(),
                Arg::U8(comparison as u8),
                tendency_comparison.into(),
            ],
        );
    }

    pub fn if_world_tendency_greater_than_or_equal(
        &mut self,
        output_condition: Condition,
        tendency_type: u8,
        min_tendency: u8,
    ) {
        self.if_world_tendency_comparison(
            output_condition,
            tendency_type,
            ComparisonType::GreaterThanOrEqual,
            min_tendency,
        );
    }

    /// 3[12]
    pub fn if_event_value_comparison(
        &mut self,
        output_condition: Condition,
        event_flag_id: i32,
        number_bits: u8,
        comparison: ComparisonType,
        comparison_value: u32,
    ) {
        self.raw(
            3,
            12,
            &[
                output_condition.into(),
                event_flag_id.into(),
                number_bits.into(),
                Arg::U8(comparison as u8),
                comparison_value.into(),
            ],
        );
    }

    /// 3[13]: boss room variant of the action button prompt.
    #[allow(clippy::too_many_arguments)]
    pub fn if_action_button_state_in_boss(
        &mut self,
        output_condition: Condition,
        category: i32,
        target_entity_id: i32,
        reaction_angle: f32,
        damipoly_id: i16,
        reaction_distance: f32,
        help_id: i32,
        reaction_attribute: u8,
        pad_id: i32,
    ) {
        self.raw(
            3,
            13,
            &[
                output_condition.into(),
                category.into(),
                target_entity_id.into(),
                reaction_angle.into(),
                damipoly_id.into(),
                reaction_distance.into(),
                help_id.into(),
                reaction_attribute.into(),
                pad_id.into(),
            ],
        );
    }

    /// 3[14]
    pub fn if_any_item_dropped_in_area(&mut self, output_condition: Condition, area_entity_id: i32) {
        self.raw(3, 14, &[output_condition.into(), area_entity_id.into()]);
    }

    /// 3[15]
    pub fn if_item_dropped(&mut self, output_condition: Condition, item_type: i32, item_id: i32) {
        self.raw(
            3,
            15,
            &[output_condition.into(), item_type.into(), item_id.into()],
        );
    }

    /// 3[16]: ownership includes the Bottomless Box.
    pub fn if_player_owns_item(&mut self, output_condition: Condition, item_type: u8, item_id: i32) {
        self.raw(
            3,
            16,
            &[
                output_condition.into(),
                item_type.into(),
                item_id.into(),
                Arg::U8(1),
            ],
        );
    }

    pub fn if_player_does_not_own_item(
        &mut self,
        output_condition: Condition,
        item_type: u8,
        item_id: i32,
    ) {
        self.raw(
            3,
            16,
            &[
                output_condition.into(),
                item_type.into(),
                item_id.into(),
                Arg::U8(0),
            ],
        );
    }

    /// 3[17]
    pub fn if_new_game_count_comparison(
        &mut self,
        output_condition: Condition,
        comparison: ComparisonType,
        completion_count_comparison: u8,
    ) {
        self.raw(
            3,
            17,
            &[
                output_condition.into(),
                Arg::U8(comparison as u8),
                completion_count_comparison.into(),
            ],
        );
    }

    pub fn if_new_game_count_equal(
        &mut self,
        output_condition: Condition,
        completion_count_comparison: u8,
    ) {
        self.if_new_game_count_comparison(
            output_condition,
            ComparisonType::Equal,
            completion_count_comparison,
        );
    }

    pub fn if_new_game_count_greater_than_or_equal(
        &mut self,
        output_condition: Condition,
        min_completion_count: u8,
    ) {
        self.if_new_game_count_comparison(
            output_condition,
            ComparisonType::GreaterThanOrEqual,
            min_completion_count,
        );
    }

    /// 3[18]: action button plus a line segment intersection test against
    /// the endpoint entity.
    #[allow(clippy::too_many_arguments)]
    pub fn if_action_button_state_and_line_segment(
        &mut self,
        output_condition: Condition,
        category: i32,
        target_entity_id: i32,
        reaction_angle: f32,
        damipoly_id: i16,
        reaction_distance: f32,
        help_id: i32,
        reaction_attribute: u8,
        pad_id: i32,
        line_segment_endpoint_id: i32,
    ) {
        self.raw(
            3,
            18,
            &[
                output_condition.into(),
                category.into(),
                target_entity_id.into(),
                reaction_angle.into(),
                damipoly_id.into(),
                reaction_distance.into(),
                help_id.into(),
                reaction_attribute.into(),
                pad_id.into(),
                line_segment_endpoint_id.into(),
            ],
        );
    }

    /// 3[19]: boss room version of 3[18].
    #[allow(clippy::too_many_arguments)]
    pub fn if_action_button_state_and_line_segment_in_boss(
        &mut self,
        output_condition: Condition,
        category: i32,
        target_entity_id: i32,
        reaction_angle: f32,
        damipoly_id: i16,
        reaction_distance: f32,
        help_id: i32,
        reaction_attribute: u8,
        pad_id: i32,
        line_segment_endpoint_id: i32,
    ) {
        self.raw(
            3,
            19,
            &[
                output_condition.into(),
                category.into(),
                target_entity_id.into(),
                reaction_angle.into(),
                damipoly_id.into(),
                reaction_distance.into(),
                help_id.into(),
                reaction_attribute.into(),
                pad_id.into(),
                line_segment_endpoint_id.into(),
            ],
        );
    }

    /// 3[20]: compares two event flag values bit for bit.
    pub fn if_event_flag_value_comparison(
        &mut self,
        output_condition: Condition,
        left_event_flag_id: i32,
        left_number_bits: u8,
        comparison: ComparisonType,
        right_event_flag_id: i32,
        right_number_bits: u8,
    ) {
        self.raw(
            3,
            20,
            &[
                output_condition.into(),
                left_event_flag_id.into(),
                left_number_bits.into(),
                Arg::U8(comparison as u8),
                right_event_flag_id.into(),
                right_number_bits.into(),
            ],
        );
    }

    /// 3[21]: Artorias of the Abyss ownership.
    pub fn if_owns_dlc(&mut self, output_condition: Condition) {
        self.raw(3, 21, &[output_condition.into(), Arg::U8(1)]);
    }

    pub fn if_does_not_own_dlc(&mut self, output_condition: Condition) {
        self.raw(3, 21, &[output_condition.into(), Arg::U8(0)]);
    }

    /// 3[22]
    pub fn if_online_state(&mut self, output_condition: Condition, online_state: bool) {
        self.raw(3, 22, &[output_condition.into(), online_state.into()]);
    }

    pub fn if_online(&mut self, output_condition: Condition) {
        self.if_online_state(output_condition, true);
    }

    pub fn if_offline(&mut self, output_condition: Condition) {
        self.if_online_state(output_condition, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AND2, CONT, RestartType};

    #[test]
    fn flag_conditions_render_the_flag_type_number() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_event_flag_on(CONT, FlagType::EventFlag, 11810312);
        assert_eq!(w.lines()[1], "    3[00] (0, 1, 0, 11810312)");
    }

    #[test]
    fn area_check_places_the_inside_flag_before_the_entities() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_player_inside_area(AND2, 1812997);
        assert_eq!(w.lines()[1], "    3[02] (2, 1, 10000, 1812997)");
    }

    #[test]
    fn distance_check_renders_the_threshold_as_a_float() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_player_within_distance(CONT, 1810800, 5.0);
        assert_eq!(w.lines()[1], "    3[03] (0, 1, 10000, 1810800, 5.0)");
    }

    #[test]
    fn line_segment_prompt_carries_ten_arguments() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_action_button_state_and_line_segment(
            CONT, 0, 1811111, 90.0, 180, 2.0, 10010400, 48, 0, 1811110,
        );
        assert_eq!(
            w.lines()[1],
            "    3[18] (0, 0, 1811111, 90.0, 180, 2.0, 10010400, 48, 0, 1811110)"
        );
    }

    #[test]
    fn dlc_and_online_checks_bake_in_their_literal() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_owns_dlc(CONT);
        w.if_offline(CONT);
        assert_eq!(w.lines()[1], "    3[21] (0, 1)");
        assert_eq!(w.lines()[2], "    3[22] (0, 0)");
    }
}
