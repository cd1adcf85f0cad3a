use schema::{EggGroup, Gender};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Special-form markers carried by an individual creature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFlags {
    pub gigantamax: bool,
    pub regional: bool,
    pub ditto: bool,
}

/// One creature from a player's inventory, as supplied to the matcher.
///
/// Records are read-only snapshots. Matching selects and pairs them without
/// ever changing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: u64,
    pub species: String,
    pub gender: Gender,
    pub fitness: f64, // IV percentage, 0-100
    #[serde(default)]
    pub dex_number: u16, // 0 when unknown
    #[serde(default)]
    pub egg_groups: Vec<EggGroup>,
    #[serde(default)]
    pub flags: FormFlags,
}

impl CreatureRecord {
    pub fn new(id: u64, species: impl Into<String>, gender: Gender, fitness: f64) -> Self {
        Self {
            id,
            species: species.into(),
            gender,
            fitness,
            dex_number: 0,
            egg_groups: Vec::new(),
            flags: FormFlags::default(),
        }
    }

    /// Ditto by flag or by egg group.
    pub fn is_ditto(&self) -> bool {
        self.flags.ditto || self.egg_groups.contains(&EggGroup::Ditto)
    }

    pub fn is_undiscovered(&self) -> bool {
        self.egg_groups.contains(&EggGroup::Undiscovered)
    }

    /// An Undiscovered creature without the Ditto flag can never be paired.
    pub fn can_ever_breed(&self) -> bool {
        self.is_ditto() || !self.is_undiscovered()
    }

    pub fn shares_egg_group(&self, other: &CreatureRecord) -> bool {
        self.egg_groups.iter().any(|group| other.egg_groups.contains(group))
    }

    pub fn same_dex(&self, other: &CreatureRecord) -> bool {
        self.dex_number != 0 && self.dex_number == other.dex_number
    }
}

impl fmt::Display for CreatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gender = match self.gender {
            Gender::Male => "♂",
            Gender::Female => "♀",
            Gender::Unknown => "⚲",
        };
        write!(
            f,
            "#{} {} {} ({:.2}%)",
            self.id, self.species, gender, self.fitness
        )
    }
}

/// Which partner tier produced a pair, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    SameDex,
    EggGroup,
    Ditto,
}

impl MatchTier {
    pub const SEARCH_ORDER: [MatchTier; 3] =
        [MatchTier::SameDex, MatchTier::EggGroup, MatchTier::Ditto];
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchTier::SameDex => "same species",
            MatchTier::EggGroup => "shared egg group",
            MatchTier::Ditto => "Ditto",
        };
        write!(f, "{}", label)
    }
}

/// User-facing quality hint for a legal pair. Never affects legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityTier {
    High,
    Medium,
    LowMedium,
}

impl fmt::Display for CompatibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompatibilityTier::High => "High",
            CompatibilityTier::Medium => "Medium",
            CompatibilityTier::LowMedium => "Low/Medium",
        };
        write!(f, "{}", label)
    }
}

/// A committed (female, male) pair. Ditto may stand in for either side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreedingPair<'a> {
    pub female: &'a CreatureRecord,
    pub male: &'a CreatureRecord,
    pub tier: MatchTier,
    pub compatibility: CompatibilityTier,
}

impl BreedingPair<'_> {
    pub fn ids(&self) -> [u64; 2] {
        [self.female.id, self.male.id]
    }
}

/// Id-derived age category used by the selective heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdCategory {
    #[serde(alias = "early")]
    Old,
    #[serde(alias = "late")]
    New,
    Unclassified,
}

impl fmt::Display for IdCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IdCategory::Old => "old",
            IdCategory::New => "new",
            IdCategory::Unclassified => "unclassified",
        };
        write!(f, "{}", label)
    }
}

/// Per-user forced id categories. Consulted before the numeric thresholds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdOverrideMap(HashMap<u64, IdCategory>);

impl IdOverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u64, category: IdCategory) -> Option<IdCategory> {
        self.0.insert(id, category)
    }

    pub fn get(&self, id: u64) -> Option<IdCategory> {
        self.0.get(&id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u64, IdCategory)> for IdOverrideMap {
    fn from_iter<I: IntoIterator<Item = (u64, IdCategory)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
