//! Event script builder
//!
//! [`EventWriter`] accumulates one rendered line per call into an owned
//! buffer: the header line exactly once, first (the constructor emits it),
//! then one instruction line per wrapper call, in call order. Nothing is
//! reordered, deduplicated or validated across lines; a skip count is
//! rendered, never checked against the lines below it.
//!
//! The catalogue of known instructions lives in the submodules, grouped the
//! way the engine groups its opcode tables. Every wrapper is a thin forward
//! to [`EventWriter::raw`] with a hard-coded `(group, index)` pair and the
//! slot kinds of that opcode.

mod character;
mod cond_character;
mod cond_event;
mod cond_object;
mod cond_system;
mod control;
mod control_event;
mod cutscene;
mod event;
mod message;
mod object;
mod sfx;
mod system;
mod world;

use crate::format;
use crate::types::{Arg, RestartType};

/// Builder for one event script in the unpacked intermediate format.
#[derive(Debug, Clone, PartialEq)]
pub struct EventWriter {
    lines: Vec<String>,
}

impl EventWriter {
    /// Start a new script. The header line is emitted here so it cannot be
    /// skipped, duplicated or preceded by an instruction.
    pub fn new(event_id: u32, restart: RestartType) -> Self {
        Self {
            lines: vec![format::header(event_id, restart)],
        }
    }

    /// Append one instruction line for an arbitrary opcode.
    ///
    /// The catalogue wrappers all come through here; calling it directly is
    /// the escape hatch for opcodes the catalogue does not know.
    pub fn raw(&mut self, group: u16, index: u8, args: &[Arg]) {
        self.lines.push(format::instruction(group, index, args));
    }

    /// Append a parameter-substitution directive beneath the instruction
    /// emitted last: at pack time, `length` bytes are copied from
    /// event-initialization-argument offset `read_offset` into that
    /// instruction's encoded arguments at offset `write_offset`.
    pub fn load_arg(&mut self, write_offset: u32, read_offset: u32, length: u32) {
        self.lines.push(format::load_arg(write_offset, read_offset, length));
    }

    /// All emitted lines, header first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines emitted after the header.
    pub fn instruction_count(&self) -> usize {
        self.lines.len() - 1
    }

    /// The full script as text, one line per entry, newline-terminated.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Awards the Pendant item to the player. Handy as a visible marker
    /// when checking whether an event fired at all.
    pub fn debug_pendant(&mut self) {
        self.award_item_lot(2070);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RestartType;

    #[test]
    fn header_is_first_and_only_emitted_once() {
        let w = EventWriter::new(11810001, RestartType::RunOnce);
        assert_eq!(w.lines(), ["11810001, 0"]);
        assert_eq!(w.instruction_count(), 0);
    }

    #[test]
    fn lines_follow_call_order() {
        let mut w = EventWriter::new(100, RestartType::RerunOnRest);
        w.kill_boss(1810800);
        w.skip(2);
        w.kill_boss(1810801);
        assert_eq!(w.instruction_count(), 3);
        assert_eq!(w.lines()[1], " 2003[12] (1810800)");
        assert_eq!(w.lines()[2], " 1000[03] (2)");
        assert_eq!(w.lines()[3], " 2003[12] (1810801)");
    }

    #[test]
    fn render_terminates_every_line() {
        let mut w = EventWriter::new(100, RestartType::RunOnce);
        w.end();
        assert_eq!(w.render(), "100, 0\n 1000[04] (0)\n");
    }

    #[test]
    fn load_arg_attaches_below_previous_instruction() {
        let mut w = EventWriter::new(100, RestartType::RunOnce);
        w.set_event_flag(0, true);
        w.load_arg(0, 0, 4);
        assert_eq!(w.lines()[2], "    ^(0 <- 0, 4)");
    }

    #[test]
    fn raw_is_the_escape_hatch_for_unknown_opcodes() {
        let mut w = EventWriter::new(100, RestartType::RunOnce);
        w.raw(2003, 37, &[Arg::I32(1), Arg::I32(2)]);
        assert_eq!(w.lines()[1], " 2003[37] (1, 2)");
    }

    #[test]
    fn debug_pendant_awards_the_fixed_item_lot() {
        let mut w = EventWriter::new(100, RestartType::RunOnce);
        w.debug_pendant();
        assert_eq!(w.lines()[1], " 2003[04] (2070)");
    }
}
