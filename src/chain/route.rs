//! Per-move route search over species indices.
//!
//! A route ends on the target. Either a natural learner fathers onto it
//! directly, or the move is first bred through intermediates that carry it as
//! an egg move. Intermediates must be able to both hatch and father eggs.

use crate::compatibility::can_father;
use crate::knowledge::{species_cost, SpeciesKnowledgeBase};
use std::collections::{BTreeMap, HashSet};

/// How one move reaches the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MoveRoute {
    pub move_name: String,
    /// Natural learner that starts the route.
    pub donor: usize,
    /// Intermediates ordered from the target outwards; empty for a direct donor.
    pub bridge: Vec<usize>,
    pub cost: u64,
}

#[derive(Debug, Clone)]
struct Partial {
    bridge: Vec<usize>,
    cost: u64,
}

/// Cheapest natural learner of the move that can father onto `receiver`.
/// Ties go to the alphabetically first species.
pub(crate) fn cheapest_donor(
    kb: &SpeciesKnowledgeBase,
    move_key: &str,
    receiver: usize,
) -> Option<(usize, u64)> {
    cheapest(
        kb,
        kb.natural_learner_indices(move_key)
            .iter()
            .copied()
            .filter(|&donor| can_father(kb.entry(donor), kb.entry(receiver))),
    )
}

/// Cheapest species that naturally learns every move and can father onto `target`.
pub(crate) fn single_donor(
    kb: &SpeciesKnowledgeBase,
    move_keys: &[String],
    target: usize,
) -> Option<(usize, u64)> {
    let (first, rest) = move_keys.split_first()?;
    cheapest(
        kb,
        kb.natural_learner_indices(first)
            .iter()
            .copied()
            .filter(|&donor| {
                rest.iter()
                    .all(|key| kb.natural_learner_indices(key).contains(&donor))
            })
            .filter(|&donor| can_father(kb.entry(donor), kb.entry(target))),
    )
}

fn cheapest<I>(kb: &SpeciesKnowledgeBase, candidates: I) -> Option<(usize, u64)>
where
    I: Iterator<Item = usize>,
{
    candidates
        .map(|index| (index, species_cost(kb.entry(index))))
        .min_by(|(a, cost_a), (b, cost_b)| {
            cost_a
                .cmp(cost_b)
                .then_with(|| kb.entry(*a).name.cmp(&kb.entry(*b).name))
        })
}

/// Find the cheapest route for one move, searching breadth first so shorter
/// bridges always win over longer ones.
pub(crate) fn find_route(
    kb: &SpeciesKnowledgeBase,
    target: usize,
    move_key: &str,
    move_name: &str,
    max_generations: usize,
) -> Option<MoveRoute> {
    if let Some((donor, cost)) = cheapest_donor(kb, move_key, target) {
        return Some(MoveRoute {
            move_name: move_name.to_string(),
            donor,
            bridge: Vec::new(),
            cost,
        });
    }

    let mut visited: HashSet<usize> = HashSet::from([target]);
    let mut frontier = vec![Partial {
        bridge: Vec::new(),
        cost: 0,
    }];

    for depth in 1..max_generations {
        // Best path into each newly reached intermediate.
        let mut reached: BTreeMap<usize, Partial> = BTreeMap::new();
        for partial in &frontier {
            let receiver = partial.bridge.last().copied().unwrap_or(target);
            for &carrier in kb.egg_learner_indices(move_key) {
                if visited.contains(&carrier) {
                    continue;
                }
                let entry = kb.entry(carrier);
                if !entry.gender_lock.can_be_female() || !can_father(entry, kb.entry(receiver)) {
                    continue;
                }
                let cost = partial.cost + species_cost(entry);
                let better = reached
                    .get(&carrier)
                    .map_or(true, |existing| cost < existing.cost);
                if better {
                    let mut bridge = partial.bridge.clone();
                    bridge.push(carrier);
                    reached.insert(carrier, Partial { bridge, cost });
                }
            }
        }
        if reached.is_empty() {
            break;
        }

        let best = reached
            .iter()
            .filter_map(|(&carrier, partial)| {
                cheapest_donor(kb, move_key, carrier)
                    .map(|(donor, donor_cost)| (partial.cost + donor_cost, donor, partial))
            })
            .min_by(|(cost_a, donor_a, a), (cost_b, donor_b, b)| {
                cost_a
                    .cmp(cost_b)
                    .then_with(|| a.bridge.cmp(&b.bridge))
                    .then_with(|| donor_a.cmp(donor_b))
            });
        if let Some((cost, donor, partial)) = best {
            tracing::trace!(move_name, depth, cost, "bridge route found");
            return Some(MoveRoute {
                move_name: move_name.to_string(),
                donor,
                bridge: partial.bridge.clone(),
                cost,
            });
        }

        visited.extend(reached.keys().copied());
        frontier = reached.into_values().collect();
    }

    None
}
