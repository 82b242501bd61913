//! Groups 5 and 11: object and hitbox conditions

use super::EventWriter;
use crate::types::Condition;

impl EventWriter {
    /// 5[00]: 1 = destroyed.
    pub fn if_object_destruction_state(
        &mut self,
        output_condition: Condition,
        required_state: bool,
        entity_id: i32,
    ) {
        self.raw(
            5,
            0,
            &[
                output_condition.into(),
                required_state.into(),
                entity_id.into(),
            ],
        );
    }

    pub fn if_object_destroyed(&mut self, output_condition: Condition, entity_id: i32) {
        self.if_object_destruction_state(output_condition, true, entity_id);
    }

    pub fn if_object_not_destroyed(&mut self, output_condition: Condition, entity_id: i32) {
        self.if_object_destruction_state(output_condition, false, entity_id);
    }

    /// 5[01]
    pub fn if_entity_damaged_object(
        &mut self,
        output_condition: Condition,
        entity_id: i32,
        attacker_entity_id: i32,
    ) {
        self.raw(
            5,
            1,
            &[
                output_condition.into(),
                entity_id.into(),
                attacker_entity_id.into(),
            ],
        );
    }

    /// 5[02]: fires when an ObjAct execution event completes.
    pub fn if_object_activated(&mut self, output_condition: Condition, execution_event_id: i32) {
        self.raw(5, 2, &[output_condition.into(), execution_event_id.into()]);
    }

    /// 11[00]
    pub fn if_player_moving_on_hitbox(
        &mut self,
        output_condition: Condition,
        hitbox_entity_id: i32,
    ) {
        self.raw(11, 0, &[output_condition.into(), hitbox_entity_id.into()]);
    }

    /// 11[01]
    pub fn if_player_running_on_hitbox(
        &mut self,
        output_condition: Condition,
        hitbox_entity_id: i32,
    ) {
        self.raw(11, 1, &[output_condition.into(), hitbox_entity_id.into()]);
    }

    /// 11[02]
    pub fn if_player_standing_on_hitbox(
        &mut self,
        output_condition: Condition,
        hitbox_entity_id: i32,
    ) {
        self.raw(11, 2, &[output_condition.into(), hitbox_entity_id.into()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CONT, OR1, RestartType};

    #[test]
    fn object_destruction_condition_renders_state_before_entity() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_object_destroyed(OR1, 1811111);
        assert_eq!(w.lines()[1], "    5[00] (-1, 1, 1811111)");
    }

    #[test]
    fn hitbox_conditions_live_in_group_11() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_player_standing_on_hitbox(CONT, 1813300);
        assert_eq!(w.lines()[1], "   11[02] (0, 1813300)");
    }
}
