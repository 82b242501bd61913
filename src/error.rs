//! Writer errors
//!
//! The formatter layer defines no failure modes of its own; wrong arity or
//! a wrong slot kind is a caller programming error and renders as given.
//! The only recoverable error the authoring layer reports is a name lookup
//! that matches no known table entry.

use std::convert::Infallible;
use thiserror::Error;

/// Errors raised by the authoring layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WriteError {
    #[error("unrecognized class name '{0}'")]
    UnrecognizedClass(String),

    #[error("unrecognized covenant name '{0}'")]
    UnrecognizedCovenant(String),
}

// Lets wrapper methods stay generic over name-or-number inputs: the numeric
// conversions are infallible and fold into WriteError for free.
impl From<Infallible> for WriteError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
