//! Breeding Assistant
//!
//! Pair matching and egg-move chain solving for a creature-breeding game.
//! Species knowledge is compiled into the binary at build time and shared
//! immutably; both engines are pure functions over it.

// --- MODULE DECLARATIONS ---
pub mod chain;
pub mod compatibility;
pub mod config;
pub mod cooldown;
pub mod creature;
pub mod errors;
pub mod interface;
pub mod knowledge;
pub mod matching;
pub mod names;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{EggGroup, Gender, GenderLock, SpeciesEntry};

// --- From this crate's modules (`src/`) ---

// Core engines.
pub use chain::{solve_egg_move_chain, BreedingChain, ChainFailure, ChainStep, EggMoveSolver, Parent};
pub use matching::{match_breeding_pairs, MatchMode, MatchPool, PairMatcher, SpeciesChoice};

// Knowledge and compatibility rules.
pub use compatibility::{can_breed, categorize_id, compatibility_tier, CompatibilityOracle, IdThresholds};
pub use knowledge::{SpeciesKnowledgeBase, UNLISTED_ACQUISITION_COST};

// Runtime types.
pub use config::BreedingConfig;
pub use cooldown::CooldownRegistry;
pub use creature::{
    BreedingPair, CompatibilityTier, CreatureRecord, FormFlags, IdCategory, IdOverrideMap,
    MatchTier,
};

// Crate-specific error and result types.
pub use errors::{
    BreedingError, BreedingResult, ConfigError, ConfigResult, KnowledgeError, KnowledgeResult,
    RequestError, RequestResult,
};
