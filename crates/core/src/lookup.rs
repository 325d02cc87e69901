//! First-match documentation lookup across an ordered list of stores.

use crate::normalize::normalize_fragment;
use docdump_traits::DocumentationStore;
use docdump_types::{DocFragment, DocId};

/// An ordered list of documentation stores.
///
/// Later stores are fallbacks (reference or base-library docs). Entries are
/// never merged across stores.
#[derive(Debug, Default)]
pub struct DocLookup {
    stores: Vec<Box<dyn DocumentationStore>>,
}

impl DocLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_store(&mut self, store: Box<dyn DocumentationStore>) {
        log::debug!("Registered documentation store '{}'", store.name());
        self.stores.push(store);
    }

    pub fn with_store(mut self, store: Box<dyn DocumentationStore>) -> Self {
        self.add_store(store);
        self
    }

    /// Drops every registered store; subsequent lookups find nothing.
    pub fn clear(&mut self) {
        self.stores.clear();
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Returns the normalized fragment from the first store that has `id`.
    pub fn find(&self, id: &DocId) -> Option<DocFragment> {
        self.stores.iter().find_map(|store| {
            store.lookup(id).map(|raw| {
                let mut fragment = raw.clone();
                normalize_fragment(&mut fragment);
                fragment
            })
        })
    }
}
