//! Groups 0 and 1: system and timer conditions
//!
//! Group 0 is the one instruction that reads other condition registers, so
//! compound AND/OR trees are built by chaining it.

use super::EventWriter;
use crate::types::Condition;

impl EventWriter {
    /// 0[00]: evaluates the input register, compares it to the required
    /// result and stores the outcome in the output register.
    pub fn if_condition_state(
        &mut self,
        output_condition: Condition,
        required_result: bool,
        input_condition: Condition,
    ) {
        self.raw(
            0,
            0,
            &[
                output_condition.into(),
                required_result.into(),
                input_condition.into(),
            ],
        );
    }

    pub fn if_condition_true(&mut self, output_condition: Condition, input_condition: Condition) {
        self.if_condition_state(output_condition, true, input_condition);
    }

    pub fn if_condition_false(&mut self, output_condition: Condition, input_condition: Condition) {
        self.if_condition_state(output_condition, false, input_condition);
    }

    /// 1[00]: seconds since the event started.
    pub fn if_time_elapsed(&mut self, output_condition: Condition, number_seconds: f32) {
        self.raw(1, 0, &[output_condition.into(), number_seconds.into()]);
    }

    /// 1[01]
    pub fn if_frames_elapsed(&mut self, output_condition: Condition, number_frames: i32) {
        self.raw(1, 1, &[output_condition.into(), number_frames.into()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AND1, CONT, OR2, RestartType};

    #[test]
    fn register_chaining_renders_signed_register_numbers() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_condition_true(CONT, OR2);
        w.if_condition_false(AND1, OR2);
        assert_eq!(w.lines()[1], "    0[00] (0, 1, -2)");
        assert_eq!(w.lines()[2], "    0[00] (1, 0, -2)");
    }

    #[test]
    fn timer_conditions_use_group_one() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.if_time_elapsed(CONT, 10.0);
        w.if_frames_elapsed(CONT, 30);
        assert_eq!(w.lines()[1], "    1[00] (0, 10.0)");
        assert_eq!(w.lines()[2], "    1[01] (0, 30)");
    }
}
