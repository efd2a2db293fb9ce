//! First-seen-wins deduplication of normalized records.

use crate::models::NormalizedRecord;
use crate::normalize::identity_key;
use std::collections::HashSet;

/// Set of identity keys admitted during one aggregation run.
///
/// A fresh `Deduplicator` belongs to each run; it is never shared between runs.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `record`'s identity key.
    ///
    /// Returns `true` the first time a key is offered and `false` for every
    /// later record with the same key, whatever its title or source.
    pub fn admit(&mut self, record: &NormalizedRecord) -> bool {
        let key = identity_key(record);
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string())
    }

    /// Number of distinct keys admitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
