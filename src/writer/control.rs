//! Groups 1000 and 1001: execution control (system and timer)
//!
//! Skip counts, termination selectors and condition registers are rendered
//! verbatim; the engine interprets them when it runs the packed event.

use super::EventWriter;
use crate::types::{Arg, ComparisonType, Condition, TerminationType};

impl EventWriter {
    /// 1000[01]: skip `number_lines` instructions if the register holds the
    /// required state.
    pub fn skip_if_condition_state(
        &mut self,
        number_lines: u8,
        required_state: bool,
        condition: Condition,
    ) {
        self.raw(
            1000,
            1,
            &[number_lines.into(), required_state.into(), condition.into()],
        );
    }

    pub fn skip_if_condition_true(&mut self, number_lines: u8, condition: Condition) {
        self.skip_if_condition_state(number_lines, true, condition);
    }

    pub fn skip_if_condition_false(&mut self, number_lines: u8, condition: Condition) {
        self.skip_if_condition_state(number_lines, false, condition);
    }

    /// 1000[02]
    pub fn terminate_if_condition_state(
        &mut self,
        termination: TerminationType,
        required_state: bool,
        condition: Condition,
    ) {
        self.raw(
            1000,
            2,
            &[
                Arg::U8(termination as u8),
                required_state.into(),
                condition.into(),
            ],
        );
    }

    pub fn restart_if_condition_true(&mut self, condition: Condition) {
        self.terminate_if_condition_state(TerminationType::Restart, true, condition);
    }

    pub fn restart_if_condition_false(&mut self, condition: Condition) {
        self.terminate_if_condition_state(TerminationType::Restart, false, condition);
    }

    pub fn end_if_condition_true(&mut self, condition: Condition) {
        self.terminate_if_condition_state(TerminationType::End, true, condition);
    }

    pub fn end_if_condition_false(&mut self, condition: Condition) {
        self.terminate_if_condition_state(TerminationType::End, false, condition);
    }

    /// 1000[03]: unconditional line skip.
    pub fn skip(&mut self, number_lines: u8) {
        self.raw(1000, 3, &[number_lines.into()]);
    }

    /// 1000[04]: unconditional event termination.
    pub fn terminate(&mut self, termination: TerminationType) {
        self.raw(1000, 4, &[Arg::U8(termination as u8)]);
    }

    pub fn restart(&mut self) {
        self.terminate(TerminationType::Restart);
    }

    pub fn end(&mut self) {
        self.terminate(TerminationType::End);
    }

    /// 1000[05]: skip if the ordered comparison of the two values is true.
    pub fn skip_if_value_comparison(
        &mut self,
        number_lines: u8,
        comparison: ComparisonType,
        left: i32,
        right: i32,
    ) {
        self.raw(
            1000,
            5,
            &[
                number_lines.into(),
                Arg::I8(comparison as i8),
                left.into(),
                right.into(),
            ],
        );
    }

    pub fn skip_if_equal(&mut self, number_lines: u8, left: i32, right: i32) {
        self.skip_if_value_comparison(number_lines, ComparisonType::Equal, left, right);
    }

    pub fn skip_if_not_equal(&mut self, number_lines: u8, left: i32, right: i32) {
        self.skip_if_value_comparison(number_lines, ComparisonType::NotEqual, left, right);
    }

    pub fn skip_if_greater_than(&mut self, number_lines: u8, left: i32, right: i32) {
        self.skip_if_value_comparison(number_lines, ComparisonType::GreaterThan, left, right);
    }

    pub fn skip_if_less_than(&mut self, number_lines: u8, left: i32, right: i32) {
        self.skip_if_value_comparison(number_lines, ComparisonType::LessThan, left, right);
    }

    pub fn skip_if_greater_than_or_equal(&mut self, number_lines: u8, left: i32, right: i32) {
        self.skip_if_value_comparison(number_lines, ComparisonType::GreaterThanOrEqual, left, right);
    }

    pub fn skip_if_less_than_or_equal(&mut self, number_lines: u8, left: i32, right: i32) {
        self.skip_if_value_comparison(number_lines, ComparisonType::LessThanOrEqual, left, right);
    }

    /// 1000[06]
    pub fn terminate_if_value_comparison(
        &mut self,
        termination: TerminationType,
        comparison: ComparisonType,
        left: i32,
        right: i32,
    ) {
        self.raw(
            1000,
            6,
            &[
                Arg::U8(termination as u8),
                Arg::I8(comparison as i8),
                left.into(),
                right.into(),
            ],
        );
    }

    pub fn end_if_equal(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(TerminationType::End, ComparisonType::Equal, left, right);
    }

    pub fn end_if_not_equal(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::End,
            ComparisonType::NotEqual,
            left,
            right,
        );
    }

    pub fn end_if_greater_than(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::End,
            ComparisonType::GreaterThan,
            left,
            right,
        );
    }

    pub fn end_if_less_than(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::End,
            ComparisonType::LessThan,
            left,
            right,
        );
    }

    pub fn end_if_greater_than_or_equal(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::End,
            ComparisonType::GreaterThanOrEqual,
            left,
            right,
        );
    }

    pub fn end_if_less_than_or_equal(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::End,
            ComparisonType::LessThanOrEqual,
            left,
            right,
        );
    }

    pub fn restart_if_equal(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::Restart,
            ComparisonType::Equal,
            left,
            right,
        );
    }

    pub fn restart_if_not_equal(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::Restart,
            ComparisonType::NotEqual,
            left,
            right,
        );
    }

    pub fn restart_if_greater_than(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::Restart,
            ComparisonType::GreaterThan,
            left,
            right,
        );
    }

    pub fn restart_if_less_than(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::Restart,
            ComparisonType::LessThan,
            left,
            right,
        );
    }

    pub fn restart_if_greater_than_or_equal(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::Restart,
            ComparisonType::GreaterThanOrEqual,
            left,
            right,
        );
    }

    pub fn restart_if_less_than_or_equal(&mut self, left: i32, right: i32) {
        self.terminate_if_value_comparison(
            TerminationType::Restart,
            ComparisonType::LessThanOrEqual,
            left,
            right,
        );
    }

    /// 1000[07]: like 1000[01] but reads a finished condition group.
    pub fn skip_if_condition_state_finished(
        &mut self,
        number_lines: u8,
        required_state: bool,
        condition: Condition,
    ) {
        self.raw(
            1000,
            7,
            &[number_lines.into(), required_state.into(), condition.into()],
        );
    }

    pub fn skip_if_condition_true_finished(&mut self, number_lines: u8, condition: Condition) {
        self.skip_if_condition_state_finished(number_lines, true, condition);
    }

    pub fn skip_if_condition_false_finished(&mut self, number_lines: u8, condition: Condition) {
        self.skip_if_condition_state_finished(number_lines, false, condition);
    }

    /// 1000[08]: like 1000[02] but reads a finished condition group.
    pub fn terminate_if_condition_state_finished(
        &mut self,
        termination: TerminationType,
        required_state: bool,
        condition: Condition,
    ) {
        self.raw(
            1000,
            8,
            &[
                Arg::U8(termination as u8),
                required_state.into(),
                condition.into(),
            ],
        );
    }

    pub fn restart_if_condition_true_finished(&mut self, condition: Condition) {
        self.terminate_if_condition_state_finished(TerminationType::Restart, true, condition);
    }

    pub fn restart_if_condition_false_finished(&mut self, condition: Condition) {
        self.terminate_if_condition_state_finished(TerminationType::Restart, false, condition);
    }

    pub fn end_if_condition_true_finished(&mut self, condition: Condition) {
        self.terminate_if_condition_state_finished(TerminationType::End, true, condition);
    }

    pub fn end_if_condition_false_finished(&mut self, condition: Condition) {
        self.terminate_if_condition_state_finished(TerminationType::End, false, condition);
    }

    /// 1000[09]: wait for the network to approve the event, up to `timeout`
    /// seconds.
    pub fn wait_for_network_approval(&mut self, timeout: f32) {
        self.raw(1000, 9, &[timeout.into()]);
    }

    /// 1001[00]
    pub fn wait(&mut self, number_seconds: f32) {
        self.raw(1001, 0, &[number_seconds.into()]);
    }

    /// 1001[01]
    pub fn wait_frames(&mut self, number_frames: i32) {
        self.raw(1001, 1, &[number_frames.into()]);
    }

    /// 1001[02]: uniform over the inclusive range, as far as anyone knows.
    pub fn wait_random_range(&mut self, min_number_seconds: f32, max_number_seconds: f32) {
        self.raw(
            1001,
            2,
            &[min_number_seconds.into(), max_number_seconds.into()],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AND1, CONT, RestartType};

    #[test]
    fn terminate_wrappers_select_end_or_restart() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.end();
        w.restart();
        assert_eq!(w.lines()[1], " 1000[04] (0)");
        assert_eq!(w.lines()[2], " 1000[04] (1)");
    }

    #[test]
    fn condition_skips_render_register_and_state() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.skip_if_condition_true(3, AND1);
        w.end_if_condition_false(CONT);
        assert_eq!(w.lines()[1], " 1000[01] (3, 1, 1)");
        assert_eq!(w.lines()[2], " 1000[02] (0, 0, 0)");
    }

    #[test]
    fn value_comparison_families_share_one_opcode() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.skip_if_less_than(1, 10, 20);
        w.restart_if_greater_than_or_equal(10, 20);
        assert_eq!(w.lines()[1], " 1000[05] (1, 3, 10, 20)");
        assert_eq!(w.lines()[2], " 1000[06] (1, 4, 10, 20)");
    }

    #[test]
    fn waits_render_seconds_with_decimal_point() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.wait(5.0);
        w.wait_random_range(1.5, 2.5);
        assert_eq!(w.lines()[1], " 1001[00] (5.0)");
        assert_eq!(w.lines()[2], " 1001[02] (1.5, 2.5)");
    }
}
