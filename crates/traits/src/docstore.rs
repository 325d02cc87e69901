//! DocumentationStore trait for abstracting documentation-comment sources.

use docdump_types::{DocFragment, DocId};
use std::collections::HashMap;
use std::fmt::Debug;

/// A source of raw documentation fragments keyed by [`DocId`].
///
/// Several stores may be registered with the compiler; they are consulted
/// in registration order and the first hit wins. Stores return fragments as
/// loaded; normalization happens in the lookup layer.
pub trait DocumentationStore: Debug {
    /// Returns the raw fragment for `id`, if this store has one.
    fn lookup(&self, id: &DocId) -> Option<&DocFragment>;

    /// Returns a human-readable name for this store (for logging/debugging).
    fn name(&self) -> &str;
}

/// A documentation store populated in memory.
#[derive(Debug, Default)]
pub struct InMemoryDocumentationStore {
    entries: HashMap<DocId, DocFragment>,
}

impl InMemoryDocumentationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. The first fragment registered for an id is kept.
    pub fn insert(&mut self, id: impl Into<DocId>, fragment: DocFragment) {
        self.entries.entry(id.into()).or_insert(fragment);
    }

    pub fn with_entry(mut self, id: impl Into<DocId>, fragment: DocFragment) -> Self {
        self.insert(id, fragment);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocumentationStore for InMemoryDocumentationStore {
    fn lookup(&self, id: &DocId) -> Option<&DocFragment> {
        self.entries.get(id)
    }

    fn name(&self) -> &str {
        "InMemoryDocumentationStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdump_types::{DocElement, DocNode};

    fn summary(text: &str) -> DocFragment {
        DocFragment::new(vec![DocNode::Element(
            DocElement::new("summary").with_text(text),
        )])
    }

    #[test]
    fn test_in_memory_store_lookup() {
        let store = InMemoryDocumentationStore::new()
            .with_entry("T:NLog.Targets.FileTarget", summary("Writes to a file."));

        let hit = store.lookup(&DocId::for_type("NLog.Targets.FileTarget"));
        assert_eq!(hit, Some(&summary("Writes to a file.")));
        assert!(store.lookup(&DocId::for_type("NLog.Targets.Other")).is_none());
    }

    #[test]
    fn test_in_memory_store_keeps_first_entry() {
        let mut store = InMemoryDocumentationStore::new();
        store.insert("T:A", summary("first"));
        store.insert("T:A", summary("second"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup(&DocId::from("T:A")), Some(&summary("first")));
    }
}
