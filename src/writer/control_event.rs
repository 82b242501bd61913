//! Groups 1003 and 1005: execution control reading event and object state
//!
//! These branch on flags, multiplayer state, area occupancy and object
//! destruction without going through a condition register first.

use super::EventWriter;
use crate::types::{Arg, FlagType, MultiplayerState, TerminationType};

impl EventWriter {
    /// 1003[01]: skip `number_lines` instructions if the flag holds the
    /// required state.
    pub fn skip_if_event_flag_state(
        &mut self,
        number_lines: u8,
        required_flag_state: bool,
        event_flag_type: FlagType,
        event_flag_id: i32,
    ) {
        self.raw(
            1003,
            1,
            &[
                number_lines.into(),
                required_flag_state.into(),
                event_flag_type.into(),
                event_flag_id.into(),
            ],
        );
    }

    pub fn skip_if_event_flag_on(
        &mut self,
        number_lines: u8,
        event_flag_type: FlagType,
        event_flag_id: i32,
    ) {
        self.skip_if_event_flag_state(number_lines, true, event_flag_type, event_flag_id);
    }

    pub fn skip_if_event_flag_off(
        &mut self,
        number_lines: u8,
        event_flag_type: FlagType,
        event_flag_id: i32,
    ) {
        self.skip_if_event_flag_state(number_lines, false, event_flag_type, event_flag_id);
    }

    /// Flag id 0 refers back to the running event's own id.
    pub fn skip_if_this_event_on(&mut self, number_lines: u8) {
        self.skip_if_event_flag_state(number_lines, true, FlagType::Event, 0);
    }

    pub fn skip_if_this_event_off(&mut self, number_lines: u8) {
        self.skip_if_event_flag_state(number_lines, false, FlagType::Event, 0);
    }

    pub fn skip_if_this_event_slot_on(&mut self, number_lines: u8) {
        self.skip_if_event_flag_state(number_lines, true, FlagType::EventWithSlot, 0);
    }

    pub fn skip_if_this_event_slot_off(&mut self, number_lines: u8) {
        self.skip_if_event_flag_state(number_lines, false, FlagType::EventWithSlot, 0);
    }

    /// 1003[02]
    pub fn terminate_if_event_flag_state(
        &mut self,
        termination: TerminationType,
        required_flag_state: bool,
        event_flag_type: FlagType,
        event_flag_id: i32,
    ) {
        self.raw(
            1003,
            2,
            &[
                Arg::U8(termination as u8),
                required_flag_state.into(),
                event_flag_type.into(),
                event_flag_id.into(),
            ],
        );
    }

    pub fn end_if_event_flag_on(&mut self, event_flag_type: FlagType, event_flag_id: i32) {
        self.terminate_if_event_flag_state(TerminationType::End, true, event_flag_type, event_flag_id);
    }

    pub fn end_if_event_flag_off(&mut self, event_flag_type: FlagType, event_flag_id: i32) {
        self.terminate_if_event_flag_state(
            TerminationType::End,
            false,
            event_flag_type,
            event_flag_id,
        );
    }

    pub fn restart_if_event_flag_on(&mut self, event_flag_type: FlagType, event_flag_id: i32) {
        self.terminate_if_event_flag_state(
            TerminationType::Restart,
            true,
            event_flag_type,
            event_flag_id,
        );
    }

    pub fn restart_if_event_flag_off(&mut self, event_flag_type: FlagType, event_flag_id: i32) {
        self.terminate_if_event_flag_state(
            TerminationType::Restart,
            false,
            event_flag_type,
            event_flag_id,
        );
    }

    pub fn end_if_this_event_on(&mut self) {
        self.terminate_if_event_flag_state(TerminationType::End, true, FlagType::Event, 0);
    }

    pub fn end_if_this_event_off(&mut self) {
        self.terminate_if_event_flag_state(TerminationType::End, false, FlagType::Event, 0);
    }

    /// 1003[03]: all flags in the inclusive range must hold the state.
    pub fn skip_if_event_flag_range_state(
        &mut self,
        number_lines: u8,
        required_flag_state: bool,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.raw(
            1003,
            3,
            &[
                number_lines.into(),
                required_flag_state.into(),
                event_flag_type.into(),
                start_event_flag_id.into(),
                end_event_flag_id.into(),
            ],
        );
    }

    pub fn skip_if_event_flag_range_on(
        &mut self,
        number_lines: u8,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.skip_if_event_flag_range_state(
            number_lines,
            true,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
        );
    }

    pub fn skip_if_event_flag_range_off(
        &mut self,
        number_lines: u8,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.skip_if_event_flag_range_state(
            number_lines,
            false,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
        );
    }

    /// 1003[04]
    pub fn terminate_if_event_flag_range_state(
        &mut self,
        termination: TerminationType,
        required_flag_state: bool,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.raw(
            1003,
            4,
            &[
                Arg::U8(termination as u8),
                required_flag_state.into(),
                event_flag_type.into(),
                start_event_flag_id.into(),
                end_event_flag_id.into(),
            ],
        );
    }

    pub fn end_if_event_flag_range_on(
        &mut self,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.terminate_if_event_flag_range_state(
            TerminationType::End,
            true,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
        );
    }

    pub fn end_if_event_flag_range_off(
        &mut self,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.terminate_if_event_flag_range_state(
            TerminationType::End,
            false,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
        );
    }

    pub fn restart_if_event_flag_range_on(
        &mut self,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.terminate_if_event_flag_range_state(
            TerminationType::Restart,
            true,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
        );
    }

    pub fn restart_if_event_flag_range_off(
        &mut self,
        event_flag_type: FlagType,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.terminate_if_event_flag_range_state(
            TerminationType::Restart,
            false,
            event_flag_type,
            start_event_flag_id,
            end_event_flag_id,
        );
    }

    /// 1003[05]
    pub fn skip_if_multiplayer_state(
        &mut self,
        number_lines: u8,
        required_multiplayer_state: MultiplayerState,
    ) {
        self.raw(
            1003,
            5,
            &[
                number_lines.into(),
                Arg::I8(required_multiplayer_state as i8),
            ],
        );
    }

    pub fn skip_if_host(&mut self, number_lines: u8) {
        self.skip_if_multiplayer_state(number_lines, MultiplayerState::Host);
    }

    pub fn skip_if_client(&mut self, number_lines: u8) {
        self.skip_if_multiplayer_state(number_lines, MultiplayerState::Client);
    }

    pub fn skip_if_multiplayer(&mut self, number_lines: u8) {
        self.skip_if_multiplayer_state(number_lines, MultiplayerState::Multiplayer);
    }

    pub fn skip_if_singleplayer(&mut self, number_lines: u8) {
        self.skip_if_multiplayer_state(number_lines, MultiplayerState::Singleplayer);
    }

    /// 1003[06]
    pub fn terminate_if_multiplayer_state(
        &mut self,
        termination: TerminationType,
        required_multiplayer_state: MultiplayerState,
    ) {
        self.raw(
            1003,
            6,
            &[
                Arg::U8(termination as u8),
                Arg::I8(required_multiplayer_state as i8),
            ],
        );
    }

    pub fn end_if_host(&mut self) {
        self.terminate_if_multiplayer_state(TerminationType::End, MultiplayerState::Host);
    }

    pub fn end_if_client(&mut self) {
        self.terminate_if_multiplayer_state(TerminationType::End, MultiplayerState::Client);
    }

    pub fn end_if_multiplayer(&mut self) {
        self.terminate_if_multiplayer_state(TerminationType::End, MultiplayerState::Multiplayer);
    }

    pub fn end_if_singleplayer(&mut self) {
        self.terminate_if_multiplayer_state(TerminationType::End, MultiplayerState::Singleplayer);
    }

    pub fn restart_if_host(&mut self) {
        self.terminate_if_multiplayer_state(TerminationType::Restart, MultiplayerState::Host);
    }

    pub fn restart_if_client(&mut self) {
        self.terminate_if_multiplayer_state(TerminationType::Restart, MultiplayerState::Client);
    }

    pub fn restart_if_multiplayer(&mut self) {
        self.terminate_if_multiplayer_state(TerminationType::Restart, MultiplayerState::Multiplayer);
    }

    pub fn restart_if_singleplayer(&mut self) {
        self.terminate_if_multiplayer_state(
            TerminationType::Restart,
            MultiplayerState::Singleplayer,
        );
    }

    /// 1003[07]: 0 = outside, 1 = inside.
    pub fn skip_if_area_state(
        &mut self,
        number_lines: u8,
        required_area_state: bool,
        area_id: u8,
        block_id: u8,
    ) {
        self.raw(
            1003,
            7,
            &[
                number_lines.into(),
                required_area_state.into(),
                area_id.into(),
                block_id.into(),
            ],
        );
    }

    pub fn skip_if_inside_area(&mut self, number_lines: u8, area_id: u8, block_id: u8) {
        self.skip_if_area_state(number_lines, true, area_id, block_id);
    }

    pub fn skip_if_outside_area(&mut self, number_lines: u8, area_id: u8, block_id: u8) {
        self.skip_if_area_state(number_lines, false, area_id, block_id);
    }

    /// 1005[01]: 1 = destroyed.
    pub fn skip_if_object_destruction_state(
        &mut self,
        number_lines: u8,
        required_destruction_state: bool,
        entity_id: i32,
    ) {
        self.raw(
            1005,
            1,
            &[
                number_lines.into(),
                required_destruction_state.into(),
                entity_id.into(),
            ],
        );
    }

    pub fn skip_if_object_destroyed(&mut self, number_lines: u8, entity_id: i32) {
        self.skip_if_object_destruction_state(number_lines, true, entity_id);
    }

    pub fn skip_if_object_not_destroyed(&mut self, number_lines: u8, entity_id: i32) {
        self.skip_if_object_destruction_state(number_lines, false, entity_id);
    }

    /// 1005[02]
    pub fn terminate_if_object_destruction_state(
        &mut self,
        termination: TerminationType,
        required_destruction_state: bool,
        entity_id: i32,
    ) {
        self.raw(
            1005,
            2,
            &[
                Arg::U8(termination as u8),
                required_destruction_state.into(),
                entity_id.into(),
            ],
        );
    }

    pub fn end_if_object_destroyed(&mut self, entity_id: i32) {
        self.terminate_if_object_destruction_state(TerminationType::End, true, entity_id);
    }

    pub fn end_if_object_not_destroyed(&mut self, entity_id: i32) {
        self.terminate_if_object_destruction_state(TerminationType::End, false, entity_id);
    }

    pub fn restart_if_object_destroyed(&mut self, entity_id: i32) {
        self.terminate_if_object_destruction_state(TerminationType::Restart, true, entity_id);
    }

    pub fn restart_if_object_not_destroyed(&mut self, entity_id: i32) {
        self.terminate_if_object_destruction_state(TerminationType::Restart, false, entity_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RestartType;

    #[test]
    fn this_event_wrappers_use_flag_id_zero() {
        let mut w = EventWriter::new(11810000, RestartType::RunOnce);
        w.skip_if_this_event_on(2);
        w.end_if_this_event_off();
        assert_eq!(w.lines()[1], " 1003[01] (2, 1, 1, 0)");
        assert_eq!(w.lines()[2], " 1003[02] (0, 0, 1, 0)");
    }

    #[test]
    fn multiplayer_branches_match_the_documented_numbering() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.skip_if_singleplayer(1);
        w.end_if_client();
        assert_eq!(w.lines()[1], " 1003[05] (1, 3)");
        assert_eq!(w.lines()[2], " 1003[06] (0, 1)");
    }

    #[test]
    fn object_destruction_branches_live_in_group_1005() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.skip_if_object_destroyed(4, 1811111);
        w.restart_if_object_not_destroyed(1811111);
        assert_eq!(w.lines()[1], " 1005[01] (4, 1, 1811111)");
        assert_eq!(w.lines()[2], " 1005[02] (1, 0, 1811111)");
    }
}
