pub mod engine;
pub mod mode;
pub mod pool;

pub use engine::{match_breeding_pairs, PairMatcher};
pub use mode::{MatchMode, SpeciesChoice};
pub use pool::{FitnessOrder, MatchPool};

#[cfg(test)]
mod tests;
