//! Breeding legality and pair quality.
//!
//! `can_breed` is the base rule set shared by the pair matcher and the chain
//! solver. The form overlay and the id heuristics only matter to the matcher.

use crate::creature::{CompatibilityTier, CreatureRecord, FormFlags, IdCategory, IdOverrideMap};
use crate::knowledge::SpeciesKnowledgeBase;
use schema::{EggGroup, Gender, SpeciesEntry};
use serde::{Deserialize, Serialize};

/// What the base rules need to know about one side of a pairing.
#[derive(Debug, Clone, Copy)]
pub struct BreedingProfile<'a> {
    pub egg_groups: &'a [EggGroup],
    pub gender: Gender,
    pub ditto: bool,
}

impl<'a> BreedingProfile<'a> {
    pub fn of_record(record: &'a CreatureRecord) -> Self {
        Self {
            egg_groups: &record.egg_groups,
            gender: record.gender,
            ditto: record.is_ditto(),
        }
    }

    pub fn of_species(entry: &'a SpeciesEntry, gender: Gender) -> Self {
        Self {
            egg_groups: &entry.egg_groups,
            gender,
            ditto: entry.is_ditto(),
        }
    }

    fn undiscovered_locked(&self) -> bool {
        !self.ditto && self.egg_groups.contains(&EggGroup::Undiscovered)
    }
}

/// Base breeding legality. Symmetric in its arguments.
pub fn can_breed(a: &BreedingProfile<'_>, b: &BreedingProfile<'_>) -> bool {
    if a.undiscovered_locked() || b.undiscovered_locked() {
        return false;
    }
    if a.ditto || b.ditto {
        return !(a.ditto && b.ditto);
    }
    let opposite_genders = matches!(
        (a.gender, b.gender),
        (Gender::Male, Gender::Female) | (Gender::Female, Gender::Male)
    );
    if !opposite_genders {
        return false;
    }
    a.egg_groups.iter().any(|group| b.egg_groups.contains(group))
}

/// Species-level legality with fixed roles: can `father` sire an egg on `mother`?
pub fn can_father(father: &SpeciesEntry, mother: &SpeciesEntry) -> bool {
    father.gender_lock.can_be_male()
        && mother.gender_lock.can_be_female()
        && can_breed(
            &BreedingProfile::of_species(father, Gender::Male),
            &BreedingProfile::of_species(mother, Gender::Female),
        )
}

/// Form-exclusivity rules layered over `can_breed` by the pair matcher.
pub fn form_overlay_allows(female: &CreatureRecord, male: &CreatureRecord) -> bool {
    if female.flags.gigantamax && male.flags.gigantamax {
        return false;
    }
    if female.flags.regional && male.flags.regional {
        return false;
    }
    if (male.flags.gigantamax || male.flags.regional) && !female.is_ditto() {
        return false;
    }
    true
}

/// One side of a species-level legality query.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesSide<'n> {
    pub species: &'n str,
    pub gender: Gender,
    pub flags: FormFlags,
}

/// Answers legality questions for species names using the knowledge base.
pub struct CompatibilityOracle<'kb> {
    kb: &'kb SpeciesKnowledgeBase,
}

impl<'kb> CompatibilityOracle<'kb> {
    pub fn new(kb: &'kb SpeciesKnowledgeBase) -> Self {
        Self { kb }
    }

    /// Unknown species, or a gender the species can never have, never breed.
    pub fn can_breed(&self, a: SpeciesSide<'_>, b: SpeciesSide<'_>) -> bool {
        let (Some(entry_a), Some(entry_b)) = (self.kb.get(a.species), self.kb.get(b.species))
        else {
            return false;
        };
        match (side_profile(entry_a, &a), side_profile(entry_b, &b)) {
            (Some(pa), Some(pb)) => can_breed(&pa, &pb),
            _ => false,
        }
    }
}

fn side_profile<'e>(entry: &'e SpeciesEntry, side: &SpeciesSide<'_>) -> Option<BreedingProfile<'e>> {
    let ditto = side.flags.ditto || entry.is_ditto();
    let gender_ok = ditto || entry.gender_lock.permits(side.gender);
    gender_ok.then_some(BreedingProfile {
        egg_groups: &entry.egg_groups,
        gender: side.gender,
        ditto,
    })
}

/// Numeric id ranges separating older individuals from newer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdThresholds {
    pub old_id_max: u64,
    pub new_id_min: u64,
}

impl Default for IdThresholds {
    fn default() -> Self {
        Self {
            old_id_max: 271_800,
            new_id_min: 271_900,
        }
    }
}

/// Override map first, then the numeric ranges. Ids between the two
/// thresholds are unclassified.
pub fn categorize_id(id: u64, overrides: &IdOverrideMap, thresholds: IdThresholds) -> IdCategory {
    if let Some(category) = overrides.get(id) {
        return category;
    }
    if id <= thresholds.old_id_max {
        IdCategory::Old
    } else if id >= thresholds.new_id_min {
        IdCategory::New
    } else {
        IdCategory::Unclassified
    }
}

/// True when one id is old and the other new.
pub fn ids_cross_categories(
    a: &CreatureRecord,
    b: &CreatureRecord,
    overrides: &IdOverrideMap,
    thresholds: IdThresholds,
) -> bool {
    matches!(
        (
            categorize_id(a.id, overrides, thresholds),
            categorize_id(b.id, overrides, thresholds)
        ),
        (IdCategory::Old, IdCategory::New) | (IdCategory::New, IdCategory::Old)
    )
}

/// Quality hint for a legal pair.
pub fn compatibility_tier(
    a: &CreatureRecord,
    b: &CreatureRecord,
    selective: bool,
    overrides: &IdOverrideMap,
    thresholds: IdThresholds,
) -> CompatibilityTier {
    if a.is_ditto() || b.is_ditto() {
        return CompatibilityTier::Medium;
    }
    if a.same_dex(b) {
        if selective && ids_cross_categories(a, b, overrides, thresholds) {
            CompatibilityTier::High
        } else {
            CompatibilityTier::Medium
        }
    } else {
        CompatibilityTier::LowMedium
    }
}
