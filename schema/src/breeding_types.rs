use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Species-level breeding tag. Two species can breed when they share one.
///
/// `Ditto` marks the universal partner and `Undiscovered` marks species that
/// can never breed. The serde aliases accept the spaced spellings stored by
/// the inventory layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum EggGroup {
    Monster,
    #[serde(alias = "Water 1")]
    #[strum(to_string = "Water 1", serialize = "Water1")]
    Water1,
    Bug,
    Flying,
    Field,
    Fairy,
    Grass,
    #[serde(alias = "Human-Like", alias = "Human Like")]
    #[strum(to_string = "Human-Like", serialize = "HumanLike", serialize = "Human Like")]
    HumanLike,
    #[serde(alias = "Water 3")]
    #[strum(to_string = "Water 3", serialize = "Water3")]
    Water3,
    Mineral,
    Amorphous,
    #[serde(alias = "Water 2")]
    #[strum(to_string = "Water 2", serialize = "Water2")]
    Water2,
    Ditto,
    Dragon,
    Undiscovered,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    #[serde(alias = "male", alias = "M")]
    #[strum(to_string = "Male", serialize = "m", serialize = "♂")]
    Male,
    #[serde(alias = "female", alias = "F")]
    #[strum(to_string = "Female", serialize = "f", serialize = "♀")]
    Female,
    #[serde(alias = "unknown", alias = "Genderless")]
    #[strum(to_string = "Unknown", serialize = "genderless", serialize = "none")]
    Unknown,
}

/// Which genders a species can appear as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum GenderLock {
    #[default]
    Mixed,
    MaleOnly,
    FemaleOnly,
    Genderless,
}

impl GenderLock {
    /// Whether an individual of this species can be the father of an egg.
    pub fn can_be_male(self) -> bool {
        matches!(self, GenderLock::Mixed | GenderLock::MaleOnly)
    }

    /// Whether an individual of this species can bear offspring.
    pub fn can_be_female(self) -> bool {
        matches!(self, GenderLock::Mixed | GenderLock::FemaleOnly)
    }

    pub fn permits(self, gender: Gender) -> bool {
        match gender {
            Gender::Male => self.can_be_male(),
            Gender::Female => self.can_be_female(),
            Gender::Unknown => self == GenderLock::Genderless,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn egg_group_parses_spaced_and_compact_names() {
        assert_eq!(EggGroup::from_str("Water 1").unwrap(), EggGroup::Water1);
        assert_eq!(EggGroup::from_str("water1").unwrap(), EggGroup::Water1);
        assert_eq!(EggGroup::from_str("human-like").unwrap(), EggGroup::HumanLike);
        assert_eq!(EggGroup::from_str("FIELD").unwrap(), EggGroup::Field);
        assert!(EggGroup::from_str("Plant").is_err());
        assert_eq!(EggGroup::Water2.to_string(), "Water 2");
    }

    #[test]
    fn gender_lock_roles() {
        assert!(GenderLock::Mixed.can_be_male() && GenderLock::Mixed.can_be_female());
        assert!(!GenderLock::FemaleOnly.can_be_male());
        assert!(!GenderLock::MaleOnly.can_be_female());
        assert!(!GenderLock::Genderless.can_be_female());
        assert!(GenderLock::Genderless.permits(Gender::Unknown));
        assert!(!GenderLock::Mixed.permits(Gender::Unknown));
    }

    #[test]
    fn gender_parses_symbols() {
        assert_eq!(Gender::from_str("♂").unwrap(), Gender::Male);
        assert_eq!(Gender::from_str("F").unwrap(), Gender::Female);
        assert_eq!(Gender::from_str("genderless").unwrap(), Gender::Unknown);
    }
}
