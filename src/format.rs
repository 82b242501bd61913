//! Line rendering for the unpacked intermediate format
//!
//! The external rebuilder parses these shapes literally, down to the
//! padding and separators, so every function here is deterministic and
//! performs no validation: whatever values the caller supplies are
//! rendered as-is.

use crate::types::{Arg, RestartType};

/// Render one instruction line: `" GGGG[II] (v1, v2, ..., vn)"`.
///
/// The group id is right-aligned in a four-character space-padded field and
/// the index id is zero-padded to two characters. Arguments are joined with
/// `", "` in their normalized literal form (see [`Arg`]).
pub fn instruction(group: u16, index: u8, args: &[Arg]) -> String {
    let rendered = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(" {group:>4}[{index:02}] ({rendered})")
}

/// Render the script header line: `"{event_id}, {restart_type}"`.
pub fn header(event_id: u32, restart: RestartType) -> String {
    format!("{}, {}", event_id, restart as u8)
}

/// Render a parameter-substitution directive: `"    ^({w} <- {r}, {l})"`.
///
/// Placed directly beneath an instruction line, it tells the packer to copy
/// `length` bytes from event-initialization-argument offset `read_offset`
/// into the instruction's encoded arguments at offset `write_offset`.
pub fn load_arg(write_offset: u32, read_offset: u32, length: u32) -> String {
    format!("    ^({write_offset} <- {read_offset}, {length})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CONT;

    #[test]
    fn four_digit_groups_fill_the_field() {
        let line = instruction(2004, 5, &[Arg::I32(1810800), Arg::Bool(false)]);
        assert_eq!(line, " 2004[05] (1810800, 0)");
    }

    #[test]
    fn short_groups_are_right_aligned_with_spaces() {
        let line = instruction(4, 0, &[CONT.into(), Arg::I32(1810800), Arg::U8(1)]);
        assert_eq!(line, "    4[00] (0, 1810800, 1)");
    }

    #[test]
    fn empty_argument_lists_render_as_bare_parens() {
        assert_eq!(instruction(2004, 47, &[]), " 2004[47] ()");
    }

    #[test]
    fn identical_inputs_render_identically() {
        let args = [Arg::I32(42), Arg::F32(0.5)];
        let first = instruction(1000, 9, &args);
        let second = instruction(1000, 9, &args);
        assert_eq!(first, second);
    }

    #[test]
    fn header_renders_both_fields_as_integers() {
        assert_eq!(header(11810001, RestartType::RunOnce), "11810001, 0");
        assert_eq!(header(11810002, RestartType::RerunOnRest), "11810002, 1");
    }

    #[test]
    fn load_arg_marker_shape() {
        assert_eq!(load_arg(4, 0, 4), "    ^(4 <- 0, 4)");
    }
}
