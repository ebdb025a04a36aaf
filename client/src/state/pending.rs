//! Tracker for message ids with a status mutation in flight.

#[cfg(test)]
#[path = "pending_test.rs"]
mod pending_test;

use std::collections::HashSet;

/// Set of message ids whose status PATCH has not completed yet.
///
/// Ids are added immediately before the request is issued and removed
/// unconditionally when it completes, so no id can stay stuck here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingSet(HashSet<i64>);

impl PendingSet {
    /// Mark `id` as in flight. Returns false if it already was.
    pub fn insert(&mut self, id: i64) -> bool {
        self.0.insert(id)
    }

    /// Clear `id`. Removing an id that is not present is a no-op.
    pub fn remove(&mut self, id: i64) -> bool {
        self.0.remove(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
