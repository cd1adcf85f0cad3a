//! Greedy pair matching.
//!
//! Each mode only decides which creatures are candidates and in what order.
//! The search itself is shared: walk the primary list, try partners tier by
//! tier (same dex, shared egg group, Ditto), commit the first legal one, then
//! give leftover creatures a pass against the Ditto pool.

use super::mode::{MatchMode, SpeciesChoice};
use super::pool::{sort_refs, FitnessOrder, MatchPool};
use crate::compatibility::{
    can_breed, compatibility_tier, form_overlay_allows, ids_cross_categories, BreedingProfile,
    IdThresholds,
};
use crate::creature::{BreedingPair, CreatureRecord, FormFlags, IdOverrideMap, MatchTier};
use crate::names::matches_species_filter;
use schema::Gender;
use std::collections::HashSet;

/// Pair matcher configured for one request.
#[derive(Debug, Clone, Copy)]
pub struct PairMatcher<'o> {
    max_pairs: usize,
    selective: bool,
    overrides: &'o IdOverrideMap,
    thresholds: IdThresholds,
}

impl<'o> PairMatcher<'o> {
    pub fn new(max_pairs: usize, overrides: &'o IdOverrideMap) -> Self {
        Self {
            max_pairs,
            selective: false,
            overrides,
            thresholds: IdThresholds::default(),
        }
    }

    /// Require same-dex and egg-group pairs to join an old id with a new one.
    pub fn selective(mut self, selective: bool) -> Self {
        self.selective = selective;
        self
    }

    pub fn thresholds(mut self, thresholds: IdThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Produce at most `max_pairs` pairs. An empty result means nothing fit.
    pub fn run<'a>(&self, pool: &'a MatchPool, mode: &MatchMode) -> Vec<BreedingPair<'a>> {
        let mut pairs = Vec::new();
        if self.max_pairs == 0 {
            return pairs;
        }
        let Some(plan) = MatchPlan::build(pool, mode) else {
            return pairs;
        };

        let mut used: HashSet<u64> = HashSet::new();
        let passes: [(&[&'a CreatureRecord], &[&'a CreatureRecord]); 2] = [
            (&plan.primary, &plan.partners),
            (&plan.leftovers, &[]),
        ];

        for (candidates, partners) in passes {
            for &candidate in candidates {
                if pairs.len() >= self.max_pairs {
                    return pairs;
                }
                if used.contains(&candidate.id) {
                    continue;
                }
                if let Some(pair) = self.find_partner(candidate, partners, &plan.dittos, &used) {
                    used.insert(pair.female.id);
                    used.insert(pair.male.id);
                    tracing::debug!(
                        female = pair.female.id,
                        male = pair.male.id,
                        tier = %pair.tier,
                        compatibility = %pair.compatibility,
                        "committed pair"
                    );
                    pairs.push(pair);
                }
            }
        }
        pairs
    }

    fn find_partner<'a>(
        &self,
        candidate: &'a CreatureRecord,
        partners: &[&'a CreatureRecord],
        dittos: &[&'a CreatureRecord],
        used: &HashSet<u64>,
    ) -> Option<BreedingPair<'a>> {
        for tier in MatchTier::SEARCH_ORDER {
            for &partner in partners.iter().chain(dittos) {
                if partner.id == candidate.id || used.contains(&partner.id) {
                    continue;
                }
                if classify(candidate, partner) != Some(tier) {
                    continue;
                }
                if let Some(pair) = self.try_pair(candidate, partner, tier) {
                    return Some(pair);
                }
            }
        }
        None
    }

    fn try_pair<'a>(
        &self,
        a: &'a CreatureRecord,
        b: &'a CreatureRecord,
        tier: MatchTier,
    ) -> Option<BreedingPair<'a>> {
        if !can_breed(&BreedingProfile::of_record(a), &BreedingProfile::of_record(b)) {
            return None;
        }
        let (female, male) = assign_roles(a, b);
        if !form_overlay_allows(female, male) {
            return None;
        }
        if self.selective
            && tier != MatchTier::Ditto
            && !ids_cross_categories(a, b, self.overrides, self.thresholds)
        {
            return None;
        }
        Some(BreedingPair {
            female,
            male,
            tier,
            compatibility: compatibility_tier(a, b, self.selective, self.overrides, self.thresholds),
        })
    }
}

/// Match with the default id thresholds.
pub fn match_breeding_pairs<'a>(
    pool: &'a MatchPool,
    mode: &MatchMode,
    max_pairs: usize,
    selective: bool,
    overrides: &IdOverrideMap,
) -> Vec<BreedingPair<'a>> {
    PairMatcher::new(max_pairs, overrides)
        .selective(selective)
        .run(pool, mode)
}

fn classify(a: &CreatureRecord, b: &CreatureRecord) -> Option<MatchTier> {
    if a.is_ditto() || b.is_ditto() {
        Some(MatchTier::Ditto)
    } else if a.same_dex(b) {
        Some(MatchTier::SameDex)
    } else if a.shares_egg_group(b) {
        Some(MatchTier::EggGroup)
    } else {
        None
    }
}

/// Order a legal pair as (female, male). Ditto takes whichever role the
/// other side leaves open, and the female role when the other is genderless.
fn assign_roles<'a>(
    a: &'a CreatureRecord,
    b: &'a CreatureRecord,
) -> (&'a CreatureRecord, &'a CreatureRecord) {
    match (a.is_ditto(), b.is_ditto()) {
        (true, _) if b.gender == Gender::Female => (b, a),
        (true, _) => (a, b),
        (_, true) if a.gender == Gender::Female => (a, b),
        (_, true) => (b, a),
        _ if a.gender == Gender::Female => (a, b),
        _ => (b, a),
    }
}

/// Candidate lists for one run.
#[derive(Debug, Default)]
struct MatchPlan<'a> {
    primary: Vec<&'a CreatureRecord>,
    partners: Vec<&'a CreatureRecord>,
    dittos: Vec<&'a CreatureRecord>,
    leftovers: Vec<&'a CreatureRecord>,
}

impl<'a> MatchPlan<'a> {
    fn build(pool: &'a MatchPool, mode: &MatchMode) -> Option<Self> {
        match mode {
            MatchMode::General => Some(Self::general(pool, |_| true)),
            MatchMode::ExtremumHigh => Some(Self::extremum(pool, FitnessOrder::Descending)),
            MatchMode::ExtremumLow => Some(Self::extremum(pool, FitnessOrder::Ascending)),
            MatchMode::Gigantamax => Some(Self::form_restricted(pool, |flags| flags.gigantamax)),
            MatchMode::Regional => Some(Self::form_restricted(pool, |flags| flags.regional)),
            MatchMode::MyChoice { female, male } => {
                Self::my_choice(pool, female.as_ref(), male.as_ref())
            }
            MatchMode::SpeciesList { species } => Some(Self::general(pool, |record| {
                species
                    .iter()
                    .any(|target| matches_species_filter(&record.species, target))
            })),
        }
    }

    fn general<F>(pool: &'a MatchPool, keep: F) -> Self
    where
        F: Fn(&CreatureRecord) -> bool,
    {
        let pick = |list: &'a [CreatureRecord]| -> Vec<&'a CreatureRecord> {
            list.iter().filter(|record| keep(*record)).collect()
        };
        let males = pick(&pool.males);
        let mut leftovers = males.clone();
        leftovers.extend(pick(&pool.genderless));

        Self {
            primary: pick(&pool.females),
            partners: males,
            dittos: pick(&pool.dittos),
            leftovers,
        }
    }

    fn extremum(pool: &'a MatchPool, order: FitnessOrder) -> Self {
        let mut ranked: Vec<&CreatureRecord> = pool.females.iter().chain(&pool.males).collect();
        sort_refs(&mut ranked, order);
        let mut dittos: Vec<&CreatureRecord> = pool.dittos.iter().collect();
        sort_refs(&mut dittos, order);
        let mut genderless: Vec<&CreatureRecord> = pool.genderless.iter().collect();
        sort_refs(&mut genderless, order);

        Self {
            partners: ranked.clone(),
            primary: ranked,
            dittos,
            leftovers: genderless,
        }
    }

    fn form_restricted(pool: &'a MatchPool, flagged: fn(&FormFlags) -> bool) -> Self {
        let is_flagged = |record: &&CreatureRecord| flagged(&record.flags);

        Self {
            primary: pool.females.iter().filter(is_flagged).collect(),
            partners: pool.males.iter().filter(|r| !is_flagged(r)).collect(),
            dittos: pool.dittos.iter().collect(),
            leftovers: pool
                .males
                .iter()
                .chain(&pool.genderless)
                .filter(is_flagged)
                .collect(),
        }
    }

    fn my_choice(
        pool: &'a MatchPool,
        female: Option<&SpeciesChoice>,
        male: Option<&SpeciesChoice>,
    ) -> Option<Self> {
        let (Some(female), Some(male)) = (female, male) else {
            tracing::debug!("my choice needs both species set");
            return None;
        };
        if *female == SpeciesChoice::Ditto && *male == SpeciesChoice::Ditto {
            tracing::debug!("my choice cannot pair Ditto with Ditto");
            return None;
        }

        let side = |choice: &SpeciesChoice, gendered: &'a [CreatureRecord]| -> Vec<&'a CreatureRecord> {
            match choice {
                SpeciesChoice::Ditto => pool.dittos.iter().collect(),
                SpeciesChoice::Species(_) => gendered
                    .iter()
                    .chain(&pool.genderless)
                    .filter(|record| choice.selects(record))
                    .collect(),
            }
        };
        let females = side(female, &pool.females);
        let males = side(male, &pool.males);

        if let (Some(first_female), Some(first_male)) = (females.first(), males.first()) {
            let neither_ditto = !first_female.is_ditto() && !first_male.is_ditto();
            let incompatible = first_female.is_undiscovered()
                || first_male.is_undiscovered()
                || !first_female.shares_egg_group(first_male);
            if neither_ditto && incompatible {
                tracing::debug!(%female, %male, "my choice species share no egg group");
                return None;
            }
        }

        Some(Self {
            primary: females,
            partners: males,
            ..Self::default()
        })
    }
}
