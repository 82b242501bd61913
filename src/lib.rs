//! evscribe - a typed writer for unpacked EMEVD event scripts
//!
//! Dark Souls drives its world scripting through packed EMEVD files. The
//! community toolchain unpacks those into a line-oriented text form, and this
//! crate generates that text from ordinary method calls: one method per
//! engine instruction, named for what it does rather than its opcode.
//!
//! # Quick start
//!
//! ```
//! use evscribe::{EventWriter, RestartType, CONT};
//!
//! let mut e = EventWriter::new(11810001, RestartType::RunOnce);
//! e.if_entity_dead(CONT, 1810800);
//! e.award_item_lot(2070);
//!
//! assert_eq!(
//!     e.render(),
//!     "11810001, 0\n    4[00] (0, 1810800, 1)\n 2003[04] (2070)\n"
//! );
//! ```
//!
//! # Layout
//!
//! - [`writer`]: the [`EventWriter`] buffer and the instruction catalogue,
//!   one module per opcode family.
//! - [`types`]: argument rendering and the enums the engine numbers.
//! - [`format`]: the line shapes themselves.
//! - [`convert`]: the adapter that shells out to the external rebuilder.
//!
//! Nothing here validates game data. Entity ids, flag ids and item lots are
//! rendered exactly as given; the external tool and the engine are the
//! arbiters of what they mean.

pub mod convert;
pub mod error;
pub mod format;
pub mod types;
pub mod writer;

pub use convert::{Convert, Rebuilder, ToolConfig, verbose};
pub use error::WriteError;
pub use types::{
    AND1, AND2, AND3, AND4, AND5, AND6, AND7, AiState, Arg, CONT, Class, ClassId, ComparisonType,
    Condition, Covenant, CovenantId, FlagType, MultiplayerState, OR1, OR2, OR3, OR4, OR5, OR6, OR7,
    RestartType, SoundType, TerminationType,
};
pub use writer::EventWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_small_event_renders_end_to_end() {
        let mut e = EventWriter::new(11810001, RestartType::RunOnce);
        e.if_entity_dead(CONT, 1810800);
        e.award_item_lot(2070);
        let text = e.render();
        assert!(text.starts_with("11810001, 0\n"));
        assert!(text.ends_with(" 2003[04] (2070)\n"));
        assert_eq!(e.instruction_count(), 2);
    }

    #[test]
    fn public_surface_reexports_the_register_constants() {
        assert_eq!(CONT.register(), 0);
        assert_eq!(AND7.register(), 7);
        assert_eq!(OR7.register(), -7);
    }
}
