use super::route::{find_route, single_donor, MoveRoute};
use super::types::{BreedingChain, ChainFailure, ChainStep, Parent};
use crate::knowledge::{species_cost, SpeciesKnowledgeBase};
use crate::names::normalize_move_name;

/// Default bound on generations per move, counting the final breeding.
pub const DEFAULT_MAX_GENERATIONS: usize = 5;

/// Finds breeding chains that teach egg moves to a target species.
#[derive(Debug, Clone, Copy)]
pub struct EggMoveSolver<'kb> {
    kb: &'kb SpeciesKnowledgeBase,
    max_generations: usize,
}

impl<'kb> EggMoveSolver<'kb> {
    pub fn new(kb: &'kb SpeciesKnowledgeBase) -> Self {
        Self {
            kb,
            max_generations: DEFAULT_MAX_GENERATIONS,
        }
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations.max(1);
        self
    }

    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Like [`EggMoveSolver::try_solve`], discarding the failure reason.
    pub fn solve<S: AsRef<str>>(&self, target: &str, moves: &[S]) -> Option<BreedingChain> {
        self.try_solve(target, moves).ok()
    }

    /// Build a chain that leaves one offspring of `target` knowing every move.
    ///
    /// A single wild father that knows all moves always wins. Otherwise each
    /// move is routed on its own and the routes are bred onto the same
    /// lineage, cheapest move first.
    pub fn try_solve<S: AsRef<str>>(
        &self,
        target: &str,
        moves: &[S],
    ) -> Result<BreedingChain, ChainFailure> {
        let kb = self.kb;
        let target_index = kb
            .index_of(target)
            .ok_or_else(|| ChainFailure::UnknownSpecies(target.trim().to_string()))?;
        let entry = kb.entry(target_index);

        if !entry.gender_lock.can_be_female() {
            return Err(ChainFailure::TargetGenderLocked {
                species: entry.name.clone(),
                lock: entry.gender_lock,
            });
        }
        if entry.is_undiscovered() {
            return Err(ChainFailure::TargetUndiscovered(entry.name.clone()));
        }

        let mut requested: Vec<(String, String)> = Vec::new(); // (key, display name)
        for name in moves {
            let name = name.as_ref().trim();
            let key = normalize_move_name(name);
            if key.is_empty() || requested.iter().any(|(seen, _)| *seen == key) {
                continue;
            }
            let display = kb.canonical_move_name(name).unwrap_or(name).to_string();
            requested.push((key, display));
        }
        if requested.is_empty() {
            return Err(ChainFailure::NoMovesRequested);
        }

        for (key, display) in &requested {
            if !kb.egg_learner_indices(key).contains(&target_index) {
                return Err(ChainFailure::MoveNotAnEggMove {
                    species: entry.name.clone(),
                    move_name: display.clone(),
                });
            }
        }

        let keys: Vec<String> = requested.iter().map(|(key, _)| key.clone()).collect();
        if let Some((donor, cost)) = single_donor(kb, &keys, target_index) {
            tracing::debug!(target = %entry.name, donor = %kb.entry(donor).name, "single donor covers every move");
            return Ok(BreedingChain {
                target: entry.name.clone(),
                steps: vec![ChainStep {
                    donor: Parent::Wild(kb.entry(donor).name.clone()),
                    receiver: Parent::Wild(entry.name.clone()),
                    moves: requested.into_iter().map(|(_, display)| display).collect(),
                    offspring: entry.name.clone(),
                    cost,
                }],
            });
        }

        let mut routes = Vec::with_capacity(requested.len());
        for (key, display) in &requested {
            let route = find_route(kb, target_index, key, display, self.max_generations)
                .ok_or_else(|| ChainFailure::ChainUnreachable {
                    species: entry.name.clone(),
                    move_name: display.clone(),
                    generations: self.max_generations,
                })?;
            routes.push(route);
        }
        // Stable, so equal costs keep request order.
        routes.sort_by_key(|route| route.cost);

        let chain = self.assemble(target_index, routes);
        tracing::debug!(
            target = %chain.target,
            steps = chain.len(),
            cost = chain.total_cost(),
            "assembled breeding chain"
        );
        Ok(chain)
    }

    fn assemble(&self, target: usize, routes: Vec<MoveRoute>) -> BreedingChain {
        let kb = self.kb;
        let name = |index: usize| kb.entry(index).name.clone();
        let mut steps: Vec<ChainStep> = Vec::new();
        let mut lineage: Option<usize> = None;

        for route in routes {
            let mut carrier = Parent::Wild(name(route.donor));
            let mut carrier_cost = species_cost(kb.entry(route.donor));

            for &intermediate in route.bridge.iter().rev() {
                steps.push(ChainStep {
                    donor: carrier,
                    receiver: Parent::Wild(name(intermediate)),
                    moves: vec![route.move_name.clone()],
                    offspring: name(intermediate),
                    cost: carrier_cost + species_cost(kb.entry(intermediate)),
                });
                carrier = Parent::OffspringOf(steps.len() - 1);
                carrier_cost = 0;
            }

            let receiver = match lineage {
                Some(step) => Parent::OffspringOf(step),
                None => Parent::Wild(name(target)),
            };
            steps.push(ChainStep {
                donor: carrier,
                receiver,
                moves: vec![route.move_name],
                offspring: name(target),
                cost: carrier_cost,
            });
            lineage = Some(steps.len() - 1);
        }

        BreedingChain {
            target: name(target),
            steps,
        }
    }
}

/// Solve with the default generation bound. `None` means no chain exists.
pub fn solve_egg_move_chain<S: AsRef<str>>(
    kb: &SpeciesKnowledgeBase,
    target: &str,
    moves: &[S],
) -> Option<BreedingChain> {
    EggMoveSolver::new(kb).solve(target, moves)
}
