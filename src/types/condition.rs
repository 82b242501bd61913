//! Condition registers

use crate::types::Arg;

/// One of the fifteen condition registers a check instruction writes to and
/// a control instruction reads from: the continue register (0), seven AND
/// registers (1..=7) and seven OR registers (-1..=-7).
///
/// The engine owns the runtime semantics of these registers; this crate
/// only accepts and renders their identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Continue,
    And1,
    And2,
    And3,
    And4,
    And5,
    And6,
    And7,
    Or1,
    Or2,
    Or3,
    Or4,
    Or5,
    Or6,
    Or7,
}

impl Condition {
    /// The signed register identifier as it appears in an instruction line.
    pub fn register(self) -> i8 {
        match self {
            Condition::Continue => 0,
            Condition::And1 => 1,
            Condition::And2 => 2,
            Condition::And3 => 3,
            Condition::And4 => 4,
            Condition::And5 => 5,
            Condition::And6 => 6,
            Condition::And7 => 7,
            Condition::Or1 => -1,
            Condition::Or2 => -2,
            Condition::Or3 => -3,
            Condition::Or4 => -4,
            Condition::Or5 => -5,
            Condition::Or6 => -6,
            Condition::Or7 => -7,
        }
    }
}

impl From<Condition> for Arg {
    fn from(c: Condition) -> Self {
        Arg::I8(c.register())
    }
}

/// Shorthand constants matching the names event authors write.
pub const CONT: Condition = Condition::Continue;
pub const AND1: Condition = Condition::And1;
pub const AND2: Condition = Condition::And2;
pub const AND3: Condition = Condition::And3;
pub const AND4: Condition = Condition::And4;
pub const AND5: Condition = Condition::And5;
pub const AND6: Condition = Condition::And6;
pub const AND7: Condition = Condition::And7;
pub const OR1: Condition = Condition::Or1;
pub const OR2: Condition = Condition::Or2;
pub const OR3: Condition = Condition::Or3;
pub const OR4: Condition = Condition::Or4;
pub const OR5: Condition = Condition::Or5;
pub const OR6: Condition = Condition::Or6;
pub const OR7: Condition = Condition::Or7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_identifiers_cover_all_fifteen_slots() {
        assert_eq!(CONT.register(), 0);
        assert_eq!(AND1.register(), 1);
        assert_eq!(AND7.register(), 7);
        assert_eq!(OR1.register(), -1);
        assert_eq!(OR7.register(), -7);
    }

    #[test]
    fn condition_converts_to_signed_byte_arg() {
        assert_eq!(Arg::from(OR3), Arg::I8(-3));
        assert_eq!(Arg::from(CONT), Arg::I8(0));
    }
}
