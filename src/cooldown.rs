//! In-memory cooldown tracking for paired creatures.
//!
//! The matcher itself is pure; callers record paired ids here after a
//! successful match and filter the next request's records through it.

use crate::creature::CreatureRecord;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CooldownRegistry {
    duration: Duration,
    expires_at: HashMap<u64, Instant>,
}

impl CooldownRegistry {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            expires_at: HashMap::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start (or restart) the cooldown for each id.
    pub fn record<I: IntoIterator<Item = u64>>(&mut self, ids: I, now: Instant) {
        let expiry = now + self.duration;
        for id in ids {
            self.expires_at.insert(id, expiry);
        }
    }

    pub fn is_cooling(&self, id: u64, now: Instant) -> bool {
        self.remaining(id, now).is_some()
    }

    pub fn remaining(&self, id: u64, now: Instant) -> Option<Duration> {
        self.expires_at
            .get(&id)
            .and_then(|expiry| expiry.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }

    /// Drop expired entries. Returns how many were removed.
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        let before = self.expires_at.len();
        self.expires_at.retain(|_, expiry| *expiry > now);
        before - self.expires_at.len()
    }

    /// Keep only records whose ids are not cooling down.
    pub fn retain_available(&self, records: Vec<CreatureRecord>, now: Instant) -> Vec<CreatureRecord> {
        records
            .into_iter()
            .filter(|record| !self.is_cooling(record.id, now))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.expires_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expires_at.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::Gender;

    #[test]
    fn test_cooldown_expires() {
        let start = Instant::now();
        let mut registry = CooldownRegistry::new(Duration::from_secs(60));
        registry.record([1, 2], start);

        assert!(registry.is_cooling(1, start));
        assert!(registry.is_cooling(2, start + Duration::from_secs(59)));
        assert!(!registry.is_cooling(2, start + Duration::from_secs(60)));
        assert!(!registry.is_cooling(3, start));
        assert_eq!(
            registry.remaining(1, start + Duration::from_secs(20)),
            Some(Duration::from_secs(40))
        );
    }

    #[test]
    fn test_purge_and_filter() {
        let start = Instant::now();
        let mut registry = CooldownRegistry::new(Duration::from_secs(10));
        registry.record([1], start);
        registry.record([2], start + Duration::from_secs(5));

        let records = vec![
            CreatureRecord::new(1, "Pidgey", Gender::Male, 10.0),
            CreatureRecord::new(2, "Pidgey", Gender::Female, 10.0),
            CreatureRecord::new(3, "Pidgey", Gender::Female, 10.0),
        ];
        let later = start + Duration::from_secs(12);
        let available: Vec<u64> = registry
            .retain_available(records, later)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(available, vec![1, 3]);

        assert_eq!(registry.purge_expired(later), 1);
        assert_eq!(registry.len(), 1);
    }
}
