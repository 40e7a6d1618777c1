//! Keyed, cancellable one-shot delays.
//!
//! Each key holds at most one pending action. Arming a key that is already
//! pending replaces the old entry, so two timers of the same kind can never
//! coexist. Cancellation is a map removal: once an entry is gone nothing
//! can fire it.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// One armed action and the instant it becomes due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer<A> {
    pub action: A,
    pub deadline: Instant,
}

#[derive(Debug)]
pub struct DebounceScheduler<K, A> {
    pending: BTreeMap<K, PendingTimer<A>>,
}

impl<K: Ord + Copy, A> Default for DebounceScheduler<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy, A> DebounceScheduler<K, A> {
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
        }
    }

    /// Schedules `action` to become due `delay` after `now`.
    ///
    /// Returns the action that was replaced, if one was pending for `key`.
    pub fn arm(&mut self, key: K, delay: Duration, action: A, now: Instant) -> Option<A> {
        let timer = PendingTimer {
            action,
            deadline: now + delay,
        };
        self.pending.insert(key, timer).map(|old| old.action)
    }

    /// Cancels the pending entry for `key`. Returns `false` if nothing was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        self.pending.remove(&key).is_some()
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn deadline(&self, key: K) -> Option<Instant> {
        self.pending.get(&key).map(|t| t.deadline)
    }

    /// Earliest deadline across all keys.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|t| t.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every entry whose deadline is at or before `now`,
    /// earliest first. Each entry is returned exactly once.
    pub fn take_due(&mut self, now: Instant) -> Vec<(K, A)> {
        let due_keys: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, t)| t.deadline <= now)
            .map(|(k, _)| *k)
            .collect();

        let mut due: Vec<(K, PendingTimer<A>)> = due_keys
            .into_iter()
            .filter_map(|k| self.pending.remove(&k).map(|t| (k, t)))
            .collect();
        due.sort_by_key(|(_, t)| t.deadline);
        due.into_iter().map(|(k, t)| (k, t.action)).collect()
    }
}
