use crate::chain::{BreedingChain, Parent};
use crate::compatibility::can_father;
use crate::knowledge::SpeciesKnowledgeBase;
use schema::{EggGroup, GenderLock, SpeciesEntry};

/// A builder for species entries used in fixture knowledge bases.
///
/// # Example
/// ```
/// let clefairy = TestSpeciesBuilder::new("Clefairy", &[EggGroup::Fairy, EggGroup::Field])
///     .natural(&["Wish"])
///     .rarity(250)
///     .build();
/// ```
pub struct TestSpeciesBuilder {
    entry: SpeciesEntry,
}

impl TestSpeciesBuilder {
    pub fn new(name: &str, groups: &[EggGroup]) -> Self {
        Self {
            entry: SpeciesEntry {
                name: name.to_string(),
                dex_number: 0,
                egg_groups: groups.to_vec(),
                gender_lock: GenderLock::Mixed,
                natural_moves: Default::default(),
                egg_moves: Default::default(),
                spawn_rarity: Some(100),
            },
        }
    }

    pub fn natural(mut self, moves: &[&str]) -> Self {
        self.entry
            .natural_moves
            .extend(moves.iter().map(|m| m.to_string()));
        self
    }

    pub fn egg(mut self, moves: &[&str]) -> Self {
        self.entry.egg_moves.extend(moves.iter().map(|m| m.to_string()));
        self
    }

    pub fn lock(mut self, lock: GenderLock) -> Self {
        self.entry.gender_lock = lock;
        self
    }

    pub fn rarity(mut self, rarity: u32) -> Self {
        self.entry.spawn_rarity = Some(rarity);
        self
    }

    pub fn unlisted(mut self) -> Self {
        self.entry.spawn_rarity = None;
        self
    }

    pub fn build(self) -> SpeciesEntry {
        self.entry
    }
}

/// Builds a knowledge base from fixture entries, panicking on invalid data.
pub fn fixture_kb(entries: Vec<TestSpeciesBuilder>) -> SpeciesKnowledgeBase {
    match SpeciesKnowledgeBase::new(entries.into_iter().map(TestSpeciesBuilder::build).collect()) {
        Ok(kb) => kb,
        Err(err) => panic!("Invalid fixture species data: {}", err),
    }
}

/// Resolve a parent to its species name, panicking on dangling offspring links.
pub fn parent_species<'c>(parent: &'c Parent, chain: &'c BreedingChain) -> &'c str {
    match parent.species(chain) {
        Some(name) => name,
        None => panic!("{} does not refer to an earlier step", parent),
    }
}

/// Panics if a chain is not processable in order or breaks a breeding rule.
pub fn assert_chain_valid(kb: &SpeciesKnowledgeBase, chain: &BreedingChain) {
    for (index, step) in chain.steps.iter().enumerate() {
        for parent in [&step.donor, &step.receiver] {
            if let Parent::OffspringOf(earlier) = parent {
                assert!(
                    *earlier < index,
                    "step {} uses offspring of later step {}",
                    index + 1,
                    earlier + 1
                );
            }
        }
        let donor = parent_species(&step.donor, chain);
        let receiver = parent_species(&step.receiver, chain);
        assert_eq!(step.offspring, receiver, "offspring takes the receiver's species");

        let (Some(father), Some(mother)) = (kb.get(donor), kb.get(receiver)) else {
            panic!("step {} names unknown species", index + 1);
        };
        assert!(
            can_father(father, mother),
            "{} cannot father onto {}",
            donor,
            receiver
        );
        for move_name in &step.moves {
            let carried = match &step.donor {
                Parent::Wild(_) => father.natural_moves.contains(move_name),
                Parent::OffspringOf(_) => father.egg_moves.contains(move_name),
            };
            assert!(carried, "{} cannot pass {}", step.donor, move_name);
            assert!(
                mother.egg_moves.contains(move_name),
                "{} cannot inherit {}",
                receiver,
                move_name
            );
        }
    }
    if let Some(last) = chain.final_step() {
        assert_eq!(last.offspring, chain.target);
    }
}
