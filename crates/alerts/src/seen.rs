//! Deduplication of already-notified alerts.

use std::collections::HashSet;

/// Set of alert identifiers that were already notified.
///
/// Scoped to one process run; nothing is persisted and nothing is
/// evicted, so the set grows for as long as the process lives. That is
/// acceptable for the bounded uptimes this service is run with.
#[derive(Debug, Default)]
pub struct SeenSet {
    ids: HashSet<String>,
}

impl SeenSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identifier, returning true when it was not seen before.
    ///
    /// Check-then-add is the only mutation; an identifier is inserted at
    /// most once.
    pub fn mark_seen(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }

    /// Check membership without recording.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of recorded identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
