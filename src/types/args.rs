//! Typed instruction argument values

use std::fmt;

/// A single instruction argument, tagged with the primitive kind of the
/// slot it fills.
///
/// `Display` renders the normalized form the rebuilder expects: booleans as
/// `1`/`0`, integers as plain literals, floats always with a decimal point
/// and strings single-quoted. Enum table members convert into their stored
/// numeric value before they reach an `Arg`, so a symbolic name never leaks
/// into the output.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    F32(f32),
    Str(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Bool(b) => write!(f, "{}", u8::from(*b)),
            Arg::I8(v) => write!(f, "{v}"),
            Arg::U8(v) => write!(f, "{v}"),
            Arg::I16(v) => write!(f, "{v}"),
            Arg::U16(v) => write!(f, "{v}"),
            Arg::I32(v) => write!(f, "{v}"),
            Arg::U32(v) => write!(f, "{v}"),
            // Debug formatting keeps the trailing `.0` on whole floats,
            // which the rebuilder requires.
            Arg::F32(v) => write!(f, "{v:?}"),
            Arg::Str(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl From<i8> for Arg {
    fn from(v: i8) -> Self {
        Arg::I8(v)
    }
}

impl From<u8> for Arg {
    fn from(v: u8) -> Self {
        Arg::U8(v)
    }
}

impl From<i16> for Arg {
    fn from(v: i16) -> Self {
        Arg::I16(v)
    }
}

impl From<u16> for Arg {
    fn from(v: u16) -> Self {
        Arg::U16(v)
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Arg::I32(v)
    }
}

impl From<u32> for Arg {
    fn from(v: u32) -> Self {
        Arg::U32(v)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::F32(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_render_as_bits() {
        assert_eq!(Arg::Bool(true).to_string(), "1");
        assert_eq!(Arg::Bool(false).to_string(), "0");
    }

    #[test]
    fn whole_floats_keep_decimal_point() {
        assert_eq!(Arg::F32(0.0).to_string(), "0.0");
        assert_eq!(Arg::F32(-1.0).to_string(), "-1.0");
        assert_eq!(Arg::F32(2.5).to_string(), "2.5");
    }

    #[test]
    fn strings_render_single_quoted() {
        assert_eq!(Arg::from("temp").to_string(), "'temp'");
    }

    #[test]
    fn negative_integers_pass_through() {
        assert_eq!(Arg::I8(-7).to_string(), "-7");
        assert_eq!(Arg::I32(-1).to_string(), "-1");
    }
}
