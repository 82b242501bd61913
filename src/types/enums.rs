//! Enum tables mirrored from the engine's data
//!
//! These are lookups only: closed sets of named integers with no behavior
//! beyond conversion into their stored value. Where a table is commonly
//! addressed by name in authored scripts (classes, covenants), a
//! case-insensitive string lookup is provided as well.

use std::str::FromStr;

use crate::error::WriteError;
use crate::types::Arg;

/// How the engine re-runs an event script after its first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RestartType {
    /// Runs once on map load.
    RunOnce = 0,
    /// Runs again after resting at a bonfire.
    RerunOnRest = 1,
    /// Unknown; only seen on skeleton reassembly events.
    Reserved = 2,
}

/// How a flag id argument is interpreted by flag-state checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FlagType {
    EventFlag = 0,
    Event = 1,
    EventWithSlot = 2,
}

impl From<FlagType> for Arg {
    fn from(v: FlagType) -> Self {
        Arg::U8(v as u8)
    }
}

/// AI activity level reported by `if_ai_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AiState {
    Normal = 0,
    Recognition = 1,
    Alert = 2,
    Battle = 3,
}

impl From<AiState> for Arg {
    fn from(v: AiState) -> Self {
        Arg::U8(v as u8)
    }
}

/// Sound bank selector for `play_sound_effect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SoundType {
    Environmental = 0,
    CharacterMotion = 1,
    MenuSe = 2,
    Object = 3,
    PolyDrama = 4,
    Sfx = 5,
    Bgm = 6,
    Voice = 7,
    FloorMaterial = 8,
    ArmorMaterial = 9,
    Ghost = 10,
}

impl From<SoundType> for Arg {
    fn from(v: SoundType) -> Self {
        Arg::I32(v as i32)
    }
}

/// Ordered comparison selector shared by the value/health check families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ComparisonType {
    Equal = 0,
    NotEqual = 1,
    GreaterThan = 2,
    LessThan = 3,
    GreaterThanOrEqual = 4,
    LessThanOrEqual = 5,
}

/// Multiplayer role of the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum MultiplayerState {
    Host = 0,
    Client = 1,
    Multiplayer = 2,
    Singleplayer = 3,
}

/// What a terminate instruction does to the running event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TerminationType {
    End = 0,
    Restart = 1,
}

/// Starting class, as checked by `if_player_class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Class {
    Warrior = 0,
    Knight = 1,
    Wanderer = 2,
    Thief = 3,
    Bandit = 4,
    Hunter = 5,
    Sorcerer = 6,
    Pyromancer = 7,
    Cleric = 8,
    Deprived = 9,
}

impl FromStr for Class {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warrior" => Ok(Class::Warrior),
            "knight" => Ok(Class::Knight),
            "wanderer" => Ok(Class::Wanderer),
            "thief" => Ok(Class::Thief),
            "bandit" => Ok(Class::Bandit),
            "hunter" => Ok(Class::Hunter),
            "sorcerer" => Ok(Class::Sorcerer),
            "pyromancer" => Ok(Class::Pyromancer),
            "cleric" => Ok(Class::Cleric),
            "deprived" => Ok(Class::Deprived),
            _ => Err(WriteError::UnrecognizedClass(s.to_string())),
        }
    }
}

/// A class id as rendered into a check instruction.
///
/// Ids 10..=27 are unused temporary classes, so the set is kept open: a raw
/// number is accepted as-is, while a name must match the known table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassId(pub u8);

impl From<Class> for ClassId {
    fn from(c: Class) -> Self {
        ClassId(c as u8)
    }
}

impl From<u8> for ClassId {
    fn from(id: u8) -> Self {
        ClassId(id)
    }
}

impl TryFrom<&str> for ClassId {
    type Error = WriteError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Class::from_str(name).map(Into::into)
    }
}

/// Covenant, as checked by `if_player_covenant`. `None` means no covenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Covenant {
    None = 0,
    WayOfWhite = 1,
    PrincessGuard = 2,
    WarriorOfSunlight = 3,
    Darkwraith = 4,
    PathOfTheDragon = 5,
    GravelordServant = 6,
    ForestHunter = 7,
    DarkmoonBlade = 8,
    ChaosServant = 9,
}

impl FromStr for Covenant {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Covenant::None),
            "way of white" => Ok(Covenant::WayOfWhite),
            "princess's guard" => Ok(Covenant::PrincessGuard),
            "warrior of sunlight" => Ok(Covenant::WarriorOfSunlight),
            "darkwraith" => Ok(Covenant::Darkwraith),
            "path of the dragon" => Ok(Covenant::PathOfTheDragon),
            "gravelord servant" => Ok(Covenant::GravelordServant),
            "forest hunter" => Ok(Covenant::ForestHunter),
            "darkmoon blade" => Ok(Covenant::DarkmoonBlade),
            "chaos servant" => Ok(Covenant::ChaosServant),
            _ => Err(WriteError::UnrecognizedCovenant(s.to_string())),
        }
    }
}

/// A covenant id as rendered into a check instruction; open for the same
/// reason as [`ClassId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CovenantId(pub u8);

impl From<Covenant> for CovenantId {
    fn from(c: Covenant) -> Self {
        CovenantId(c as u8)
    }
}

impl From<u8> for CovenantId {
    fn from(id: u8) -> Self {
        CovenantId(id)
    }
}

impl TryFrom<&str> for CovenantId {
    type Error = WriteError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Covenant::from_str(name).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_lookup_is_case_insensitive() {
        assert_eq!("Warrior".parse::<Class>().unwrap(), Class::Warrior);
        assert_eq!("warrior".parse::<Class>().unwrap(), Class::Warrior);
        assert_eq!("DEPRIVED".parse::<Class>().unwrap(), Class::Deprived);
    }

    #[test]
    fn unknown_class_name_is_an_error() {
        let err = "not-a-class".parse::<Class>().unwrap_err();
        assert_eq!(err, WriteError::UnrecognizedClass("not-a-class".into()));
    }

    #[test]
    fn covenant_lookup_accepts_multi_word_names() {
        assert_eq!(
            "Princess's Guard".parse::<Covenant>().unwrap(),
            Covenant::PrincessGuard
        );
        assert_eq!("none".parse::<Covenant>().unwrap(), Covenant::None);
    }

    #[test]
    fn ids_accept_names_enums_and_raw_numbers() {
        assert_eq!(ClassId::try_from("warrior").unwrap(), ClassId(0));
        assert_eq!(ClassId::from(Class::Warrior), ClassId(0));
        assert_eq!(ClassId::from(0u8), ClassId(0));
        // Unused temporary class ids pass through unvalidated.
        assert_eq!(ClassId::from(27u8), ClassId(27));
    }

    #[test]
    fn sound_type_renders_as_plain_integer_slot() {
        assert_eq!(Arg::from(SoundType::Sfx), Arg::I32(5));
    }
}
