//! Core types for the evscribe library
//!
//! This module contains the types the rest of the crate builds on:
//! - Arg: a typed instruction argument value
//! - Condition: the 15 condition registers used to chain check results
//! - the plain enum tables mirrored from the engine's data (flag types,
//!   sound types, classes, covenants, ...)

pub mod args;
pub mod condition;
pub mod enums;

pub use args::Arg;
pub use condition::{
    AND1, AND2, AND3, AND4, AND5, AND6, AND7, CONT, Condition, OR1, OR2, OR3, OR4, OR5, OR6, OR7,
};
pub use enums::{
    AiState, Class, ClassId, ComparisonType, Covenant, CovenantId, FlagType, MultiplayerState,
    RestartType, SoundType, TerminationType,
};
