use schema::GenderLock;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Where a parent in a breeding step comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Parent {
    /// A creature of this species caught in the wild.
    Wild(String),
    /// The offspring produced by an earlier step (0-based index).
    OffspringOf(usize),
}

impl Parent {
    pub fn is_wild(&self) -> bool {
        matches!(self, Parent::Wild(_))
    }

    /// Species of this parent, following offspring links through `chain`.
    pub fn species<'c>(&'c self, chain: &'c BreedingChain) -> Option<&'c str> {
        match self {
            Parent::Wild(name) => Some(name),
            Parent::OffspringOf(step) => chain.steps.get(*step).map(|s| s.offspring.as_str()),
        }
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parent::Wild(name) => write!(f, "{}", name),
            Parent::OffspringOf(step) => write!(f, "offspring of Step {}", step + 1),
        }
    }
}

/// One breeding: `donor` fathers an egg on `receiver`, passing `moves`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainStep {
    pub donor: Parent,
    pub receiver: Parent,
    pub moves: Vec<String>,
    /// Species of the hatched offspring, always the receiver's species.
    pub offspring: String,
    pub cost: u64,
}

/// Ordered breeding steps that end with the target carrying every requested move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedingChain {
    pub target: String,
    pub steps: Vec<ChainStep>,
}

impl BreedingChain {
    pub fn total_cost(&self) -> u64 {
        self.steps.iter().map(|step| step.cost).sum()
    }

    pub fn moves_taught(&self) -> BTreeSet<&str> {
        self.steps
            .iter()
            .flat_map(|step| step.moves.iter().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step whose offspring is the finished target.
    pub fn final_step(&self) -> Option<&ChainStep> {
        self.steps.last()
    }
}

/// Why no chain was produced. Every variant is an expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainFailure {
    #[error("{0} is not a known species")]
    UnknownSpecies(String),
    #[error("{species} is {lock} and can never hatch an egg")]
    TargetGenderLocked { species: String, lock: GenderLock },
    #[error("{0} is in the Undiscovered egg group and cannot breed")]
    TargetUndiscovered(String),
    #[error("no moves were requested")]
    NoMovesRequested,
    #[error("{move_name} is not an egg move for {species}")]
    MoveNotAnEggMove { species: String, move_name: String },
    #[error("no way to pass {move_name} to {species} within {generations} generations")]
    ChainUnreachable {
        species: String,
        move_name: String,
        generations: usize,
    },
}
