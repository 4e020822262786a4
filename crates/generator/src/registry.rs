//! Identifier registry for a single synthesis pass

use std::collections::HashSet;

/// Identifiers already taken in the current pass
///
/// Created empty for each pass and only ever grows. The synthesizer reads
/// it; the pass driver is the only writer.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    ids: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Record an identifier, returning `false` if it was already taken
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
