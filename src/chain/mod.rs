//! Egg-move chain solving.

mod route;
pub mod solver;
pub mod types;

pub use solver::{solve_egg_move_chain, EggMoveSolver, DEFAULT_MAX_GENERATIONS};
pub use types::{BreedingChain, ChainFailure, ChainStep, Parent};

#[cfg(test)]
mod tests;
