use crate::creature::CreatureRecord;
use ordered_float::OrderedFloat;
use schema::Gender;
use std::cmp::Reverse;

/// Direction a candidate list is ranked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessOrder {
    Descending,
    Ascending,
}

/// Available creatures for one matching request, split by role.
///
/// Every list is sorted by fitness, highest first, ties broken by id.
/// Creatures that can never breed are dropped on construction.
#[derive(Debug, Clone, Default)]
pub struct MatchPool {
    pub females: Vec<CreatureRecord>,
    pub males: Vec<CreatureRecord>,
    pub genderless: Vec<CreatureRecord>,
    pub dittos: Vec<CreatureRecord>,
}

impl MatchPool {
    pub fn from_records<I: IntoIterator<Item = CreatureRecord>>(records: I) -> Self {
        let mut pool = MatchPool::default();
        let mut dropped = 0usize;

        for record in records {
            if record.is_ditto() {
                pool.dittos.push(record);
                continue;
            }
            if !record.can_ever_breed() {
                dropped += 1;
                continue;
            }
            match record.gender {
                Gender::Female => pool.females.push(record),
                Gender::Male => pool.males.push(record),
                Gender::Unknown => pool.genderless.push(record),
            }
        }

        for list in [
            &mut pool.females,
            &mut pool.males,
            &mut pool.genderless,
            &mut pool.dittos,
        ] {
            list.sort_by_key(|r| (Reverse(OrderedFloat(r.fitness)), r.id));
        }

        if dropped > 0 {
            tracing::debug!(dropped, "skipped creatures that cannot breed");
        }
        pool
    }

    pub fn len(&self) -> usize {
        self.females.len() + self.males.len() + self.genderless.len() + self.dittos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn sort_refs(records: &mut [&CreatureRecord], order: FitnessOrder) {
    match order {
        FitnessOrder::Descending => {
            records.sort_by_key(|r| (Reverse(OrderedFloat(r.fitness)), r.id))
        }
        FitnessOrder::Ascending => records.sort_by_key(|r| (OrderedFloat(r.fitness), r.id)),
    }
}
