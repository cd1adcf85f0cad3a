//! Species Knowledge Base: egg groups, gender locks, move tables and
//! acquisition costs, built once and shared by reference.

use crate::errors::{KnowledgeError, KnowledgeResult};
use crate::names::{normalize_move_name, normalize_species_name, resolve_base_species};
use schema::{EggGroup, GenderLock, SpeciesEntry};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Cost assigned to species with no known spawn rate.
pub const UNLISTED_ACQUISITION_COST: u64 = 100_000;

// Compiled from data/species by build.rs
static BUNDLED_SPECIES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/species.postcard"));

#[derive(Debug, Clone)]
pub struct SpeciesKnowledgeBase {
    species: Vec<SpeciesEntry>,
    by_name: HashMap<String, usize>,
    natural_learners: HashMap<String, Vec<usize>>, // move key -> species
    egg_learners: HashMap<String, Vec<usize>>,
    move_names: HashMap<String, String>, // move key -> display name
}

impl SpeciesKnowledgeBase {
    /// Index a set of entries, rejecting duplicate names and moves listed as
    /// both natural and egg moves for the same species.
    pub fn new(entries: Vec<SpeciesEntry>) -> KnowledgeResult<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut natural_learners: HashMap<String, Vec<usize>> = HashMap::new();
        let mut egg_learners: HashMap<String, Vec<usize>> = HashMap::new();
        let mut move_names = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(KnowledgeError::MalformedData(format!(
                    "species #{} has an empty name",
                    entry.dex_number
                )));
            }
            if by_name
                .insert(normalize_species_name(&entry.name), index)
                .is_some()
            {
                return Err(KnowledgeError::DuplicateSpecies(entry.name.clone()));
            }

            let natural: BTreeMap<String, &String> = entry
                .natural_moves
                .iter()
                .map(|m| (normalize_move_name(m), m))
                .collect();
            let overlapping: Vec<String> = entry
                .egg_moves
                .iter()
                .filter(|m| natural.contains_key(&normalize_move_name(m)))
                .cloned()
                .collect();
            if !overlapping.is_empty() {
                return Err(KnowledgeError::OverlappingMoveSets {
                    species: entry.name.clone(),
                    moves: overlapping,
                });
            }

            for (key, name) in natural {
                move_names.entry(key.clone()).or_insert_with(|| name.clone());
                natural_learners.entry(key).or_default().push(index);
            }
            for name in &entry.egg_moves {
                let key = normalize_move_name(name);
                move_names.entry(key.clone()).or_insert_with(|| name.clone());
                egg_learners.entry(key).or_default().push(index);
            }
        }

        tracing::debug!(species = entries.len(), moves = move_names.len(), "indexed species data");

        Ok(Self {
            species: entries,
            by_name,
            natural_learners,
            egg_learners,
            move_names,
        })
    }

    /// The species set compiled into the binary.
    pub fn bundled() -> KnowledgeResult<Self> {
        let entries: Vec<SpeciesEntry> = postcard::from_bytes(BUNDLED_SPECIES)?;
        Self::new(entries)
    }

    /// Load every `*.ron` species file in a directory.
    pub fn load_dir(dir: &Path) -> KnowledgeResult<Self> {
        if !dir.exists() {
            return Err(KnowledgeError::DirectoryNotFound(dir.to_path_buf()));
        }

        let io_err = |source| KnowledgeError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let content = fs::read_to_string(&path).map_err(|source| KnowledgeError::Io {
                path: path.clone(),
                source,
            })?;
            let entry: SpeciesEntry =
                ron::from_str(&content).map_err(|source| KnowledgeError::Parse {
                    path: path.clone(),
                    source,
                })?;
            entries.push(entry);
        }

        tracing::info!(dir = %dir.display(), species = entries.len(), "loaded species files");
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesEntry> {
        self.species.iter()
    }

    /// Look up a species by name. Falls back to the base species when the name
    /// carries a form prefix that has no entry of its own.
    pub fn get(&self, name: &str) -> Option<&SpeciesEntry> {
        self.index_of(name).map(move |index| &self.species[index])
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        if let Some(&index) = self.by_name.get(&normalize_species_name(name)) {
            return Some(index);
        }
        let form = resolve_base_species(name);
        if form.form.is_none() {
            return None;
        }
        self.by_name.get(&normalize_species_name(&form.base)).copied()
    }

    pub(crate) fn entry(&self, index: usize) -> &SpeciesEntry {
        &self.species[index]
    }

    pub fn egg_groups(&self, name: &str) -> Option<&[EggGroup]> {
        self.get(name).map(|entry| entry.egg_groups.as_slice())
    }

    pub fn gender_lock(&self, name: &str) -> Option<GenderLock> {
        self.get(name).map(|entry| entry.gender_lock)
    }

    pub fn learns_naturally(&self, species: &str, move_name: &str) -> bool {
        self.learns(&self.natural_learners, species, move_name)
    }

    pub fn has_egg_move(&self, species: &str, move_name: &str) -> bool {
        self.learns(&self.egg_learners, species, move_name)
    }

    fn learns(&self, table: &HashMap<String, Vec<usize>>, species: &str, move_name: &str) -> bool {
        match (self.index_of(species), table.get(&normalize_move_name(move_name))) {
            (Some(index), Some(learners)) => learners.contains(&index),
            _ => false,
        }
    }

    /// Species that learn the move by leveling up.
    pub fn natural_learners(&self, move_name: &str) -> impl Iterator<Item = &SpeciesEntry> {
        self.learners(&self.natural_learners, move_name)
            .map(move |index| &self.species[index])
    }

    /// Species that can only obtain the move through breeding.
    pub fn egg_move_learners(&self, move_name: &str) -> impl Iterator<Item = &SpeciesEntry> {
        self.learners(&self.egg_learners, move_name)
            .map(move |index| &self.species[index])
    }

    pub(crate) fn natural_learner_indices(&self, move_key: &str) -> &[usize] {
        self.natural_learners
            .get(move_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn egg_learner_indices(&self, move_key: &str) -> &[usize] {
        self.egg_learners
            .get(move_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn learners<'s>(
        &'s self,
        table: &'s HashMap<String, Vec<usize>>,
        move_name: &str,
    ) -> impl Iterator<Item = usize> + 's {
        table
            .get(&normalize_move_name(move_name))
            .into_iter()
            .flatten()
            .copied()
    }

    /// Display spelling of a move, e.g. "double edge" -> "Double-Edge".
    pub fn canonical_move_name(&self, move_name: &str) -> Option<&str> {
        self.move_names
            .get(&normalize_move_name(move_name))
            .map(String::as_str)
    }

    /// Rarity-derived cost of catching a species; lower is easier.
    pub fn acquisition_cost(&self, name: &str) -> u64 {
        self.get(name)
            .map(species_cost)
            .unwrap_or(UNLISTED_ACQUISITION_COST)
    }
}

pub(crate) fn species_cost(entry: &SpeciesEntry) -> u64 {
    entry
        .spawn_rarity
        .map(u64::from)
        .unwrap_or(UNLISTED_ACQUISITION_COST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn moves(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|m| m.to_string()).collect()
    }

    fn entry(name: &str, natural: &[&str], egg: &[&str]) -> SpeciesEntry {
        SpeciesEntry {
            name: name.to_string(),
            dex_number: 1,
            egg_groups: vec![EggGroup::Field],
            gender_lock: GenderLock::Mixed,
            natural_moves: moves(natural),
            egg_moves: moves(egg),
            spawn_rarity: Some(50),
        }
    }

    #[test]
    fn test_rejects_duplicate_species() {
        let result = SpeciesKnowledgeBase::new(vec![entry("Eevee", &[], &[]), entry("eevee", &[], &[])]);
        assert!(matches!(result, Err(KnowledgeError::DuplicateSpecies(_))));
    }

    #[test]
    fn test_rejects_overlapping_move_sets() {
        let result = SpeciesKnowledgeBase::new(vec![entry("Eevee", &["Wish"], &["wish"])]);
        match result {
            Err(KnowledgeError::OverlappingMoveSets { species, moves }) => {
                assert_eq!(species, "Eevee");
                assert_eq!(moves, vec!["wish".to_string()]);
            }
            other => panic!("expected overlap error, got {:?}", other),
        }
    }

    #[test]
    fn test_move_lookups_ignore_spelling() {
        let kb = SpeciesKnowledgeBase::new(vec![
            entry("Eevee", &["Double-Edge"], &["Wish"]),
            entry("Clefairy", &["Wish"], &[]),
        ])
        .unwrap();
        assert!(kb.learns_naturally("eevee", "double edge"));
        assert!(kb.has_egg_move("EEVEE", "wish"));
        assert!(!kb.has_egg_move("Clefairy", "Wish"));
        assert_eq!(kb.canonical_move_name("DOUBLE_EDGE"), Some("Double-Edge"));
        let learners: Vec<&str> = kb.natural_learners("Wish").map(|e| e.name.as_str()).collect();
        assert_eq!(learners, vec!["Clefairy"]);
        assert_eq!(kb.egg_move_learners("Teleport").count(), 0);
    }

    #[test]
    fn test_form_prefix_falls_back_to_base_species() {
        let mut galarian = entry("Galarian Meowth", &[], &["Curse"]);
        galarian.spawn_rarity = Some(900);
        let kb = SpeciesKnowledgeBase::new(vec![entry("Meowth", &[], &[]), galarian]).unwrap();

        assert_eq!(kb.get("Galarian Meowth").unwrap().spawn_rarity, Some(900));
        assert_eq!(kb.get("Gigantamax Meowth").unwrap().name, "Meowth");
        assert!(kb.get("Galarian Ponyta").is_none());
    }

    #[test]
    fn test_acquisition_cost_sentinel() {
        let mut rare = entry("Mewtwo", &[], &[]);
        rare.spawn_rarity = None;
        let kb = SpeciesKnowledgeBase::new(vec![entry("Eevee", &[], &[]), rare]).unwrap();
        assert_eq!(kb.acquisition_cost("Eevee"), 50);
        assert_eq!(kb.acquisition_cost("Mewtwo"), UNLISTED_ACQUISITION_COST);
        assert_eq!(kb.acquisition_cost("Missingno"), UNLISTED_ACQUISITION_COST);
    }

    #[test]
    fn test_bundled_data_loads() {
        let kb = SpeciesKnowledgeBase::bundled().expect("bundled species data should decode");
        assert!(kb.len() >= 20);
        assert!(kb.get("Ditto").unwrap().is_ditto());
        assert!(kb.has_egg_move("Eevee", "Wish"));
        assert!(kb.learns_naturally("Clefairy", "Wish"));
        assert_eq!(kb.gender_lock("Tauros"), Some(GenderLock::MaleOnly));
        assert_eq!(kb.get("Galarian Meowth").unwrap().spawn_rarity, Some(900));
    }

    #[test]
    fn test_load_dir_matches_bundled() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/species");
        let from_dir = SpeciesKnowledgeBase::load_dir(&dir).unwrap();
        let bundled = SpeciesKnowledgeBase::bundled().unwrap();
        assert_eq!(from_dir.len(), bundled.len());
    }

    #[test]
    fn test_load_dir_missing() {
        let result = SpeciesKnowledgeBase::load_dir(Path::new("/nonexistent/species"));
        assert!(matches!(result, Err(KnowledgeError::DirectoryNotFound(_))));
    }
}
