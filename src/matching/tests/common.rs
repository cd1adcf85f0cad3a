use crate::compatibility::{can_breed, form_overlay_allows, BreedingProfile};
use crate::creature::{BreedingPair, CreatureRecord, FormFlags};
use schema::{EggGroup, Gender};
use std::collections::HashSet;

/// A builder for creature records with common defaults.
///
/// # Example
/// ```
/// let pidgey = TestCreatureBuilder::new(1, "Pidgey", Gender::Female)
///     .dex(16)
///     .groups(&[EggGroup::Flying])
///     .fitness(90.0)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    record: CreatureRecord,
}

impl TestCreatureBuilder {
    pub fn new(id: u64, species: &str, gender: Gender) -> Self {
        Self {
            record: CreatureRecord::new(id, species, gender, 50.0),
        }
    }

    /// A Ditto record: genderless, Ditto egg group, Ditto flag.
    pub fn ditto(id: u64) -> Self {
        Self::new(id, "Ditto", Gender::Unknown)
            .dex(132)
            .groups(&[EggGroup::Ditto])
            .flags(FormFlags {
                ditto: true,
                ..FormFlags::default()
            })
    }

    pub fn dex(mut self, dex_number: u16) -> Self {
        self.record.dex_number = dex_number;
        self
    }

    pub fn groups(mut self, groups: &[EggGroup]) -> Self {
        self.record.egg_groups = groups.to_vec();
        self
    }

    pub fn fitness(mut self, fitness: f64) -> Self {
        self.record.fitness = fitness;
        self
    }

    pub fn flags(mut self, flags: FormFlags) -> Self {
        self.record.flags = flags;
        self
    }

    pub fn gigantamax(mut self) -> Self {
        self.record.flags.gigantamax = true;
        self
    }

    pub fn regional(mut self) -> Self {
        self.record.flags.regional = true;
        self
    }

    pub fn build(self) -> CreatureRecord {
        self.record
    }
}

/// Shorthand for a Field-group creature with a given fitness.
pub fn field(id: u64, species: &str, gender: Gender, fitness: f64) -> CreatureRecord {
    TestCreatureBuilder::new(id, species, gender)
        .groups(&[EggGroup::Field])
        .fitness(fitness)
        .build()
}

/// Pair ids as (female, male) tuples, for compact assertions.
pub fn pair_ids(pairs: &[BreedingPair<'_>]) -> Vec<(u64, u64)> {
    pairs.iter().map(|p| (p.female.id, p.male.id)).collect()
}

/// Panics if any produced pair breaks a matching invariant.
pub fn assert_pairs_valid(pairs: &[BreedingPair<'_>], max_pairs: usize) {
    assert!(
        pairs.len() <= max_pairs,
        "{} pairs exceed the bound of {}",
        pairs.len(),
        max_pairs
    );

    let mut seen = HashSet::new();
    for pair in pairs {
        assert_ne!(pair.female.id, pair.male.id, "creature paired with itself");
        assert!(seen.insert(pair.female.id), "id {} reused", pair.female.id);
        assert!(seen.insert(pair.male.id), "id {} reused", pair.male.id);
        assert!(
            can_breed(
                &BreedingProfile::of_record(pair.female),
                &BreedingProfile::of_record(pair.male)
            ),
            "illegal pair {} x {}",
            pair.female,
            pair.male
        );
        assert!(
            form_overlay_allows(pair.female, pair.male),
            "form overlay violated by {} x {}",
            pair.female,
            pair.male
        );
    }
}
