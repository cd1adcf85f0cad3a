use crate::{EggGroup, GenderLock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Static breeding knowledge for one species, as stored in `data/species/*.ron`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub name: String,
    pub dex_number: u16,
    pub egg_groups: Vec<EggGroup>,
    #[serde(default)]
    pub gender_lock: GenderLock,
    #[serde(default)]
    pub natural_moves: BTreeSet<String>, // level-up moves, usable only as a donor
    #[serde(default)]
    pub egg_moves: BTreeSet<String>, // obtainable only through breeding
    #[serde(default)]
    pub spawn_rarity: Option<u32>, // spawn-rate denominator, lower is easier to catch
}

impl SpeciesEntry {
    pub fn is_ditto(&self) -> bool {
        self.egg_groups.contains(&EggGroup::Ditto)
    }

    pub fn is_undiscovered(&self) -> bool {
        self.egg_groups.contains(&EggGroup::Undiscovered)
    }

    /// Whether this species can take part in breeding at all.
    pub fn can_breed(&self) -> bool {
        self.is_ditto() || (!self.is_undiscovered() && !self.egg_groups.is_empty())
    }
}
