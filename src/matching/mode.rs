use crate::creature::CreatureRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy used to build the candidate lists for one matching run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum MatchMode {
    /// Every available creature, best fitness first.
    #[default]
    General,
    /// Pair the highest-fitness creatures with each other.
    ExtremumHigh,
    /// Pair the lowest-fitness creatures with each other.
    ExtremumLow,
    /// Gigantamax females with plain males, Gigantamax males with Ditto.
    Gigantamax,
    /// Regional females with plain males, regional males with Ditto.
    Regional,
    /// Two user-selected species (or Ditto) only.
    MyChoice {
        #[serde(default)]
        female: Option<SpeciesChoice>,
        #[serde(default)]
        male: Option<SpeciesChoice>,
    },
    /// Only creatures whose name matches an entry of the list.
    SpeciesList { species: Vec<String> },
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::General => write!(f, "general"),
            MatchMode::ExtremumHigh => write!(f, "highest fitness"),
            MatchMode::ExtremumLow => write!(f, "lowest fitness"),
            MatchMode::Gigantamax => write!(f, "gigantamax"),
            MatchMode::Regional => write!(f, "regional"),
            MatchMode::MyChoice { female, male } => {
                let show = |choice: &Option<SpeciesChoice>| {
                    choice
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "unset".to_string())
                };
                write!(f, "my choice ({} x {})", show(female), show(male))
            }
            MatchMode::SpeciesList { species } => write!(f, "species list [{}]", species.join(", ")),
        }
    }
}

/// One side of a "my choice" configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpeciesChoice {
    Ditto,
    Species(String),
}

impl SpeciesChoice {
    /// Exact, case-insensitive species match. Ditto matches only Ditto records.
    pub fn selects(&self, record: &CreatureRecord) -> bool {
        match self {
            SpeciesChoice::Ditto => record.is_ditto(),
            SpeciesChoice::Species(name) => {
                !record.is_ditto() && record.species.trim().eq_ignore_ascii_case(name.trim())
            }
        }
    }
}

impl From<String> for SpeciesChoice {
    fn from(name: String) -> Self {
        if name.trim().eq_ignore_ascii_case("ditto") {
            SpeciesChoice::Ditto
        } else {
            SpeciesChoice::Species(name.trim().to_string())
        }
    }
}

impl From<&str> for SpeciesChoice {
    fn from(name: &str) -> Self {
        SpeciesChoice::from(name.to_string())
    }
}

impl From<SpeciesChoice> for String {
    fn from(choice: SpeciesChoice) -> Self {
        choice.to_string()
    }
}

impl fmt::Display for SpeciesChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesChoice::Ditto => write!(f, "Ditto"),
            SpeciesChoice::Species(name) => write!(f, "{}", name),
        }
    }
}
