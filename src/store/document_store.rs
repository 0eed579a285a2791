use std::collections::BTreeMap;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, DocumentData, DocumentStatus};
use crate::store::arena::{ArenaHandle, TextArena};

struct Entry {
    data: DocumentData,
    body: ArenaHandle,
}

/// Owning storage for per-document metadata and the text arena backing
/// document bodies. Ids are kept in ascending order via a
/// `BTreeMap`, which also gives O(1) "is this id live" checks.
#[derive(Default)]
pub struct DocumentStore {
    docs: BTreeMap<DocId, Entry>,
    arena: TextArena,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore {
            docs: BTreeMap::new(),
            arena: TextArena::new(),
        }
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.docs.contains_key(&id)
    }

    /// Stores `body` in the arena first, then inserts the document's
    /// metadata — callers must derive tokens from the returned handle's
    /// text, not from the caller's original `body` reference, so that token
    /// views remain valid for the engine's lifetime.
    pub fn insert(&mut self, id: DocId, rating: i64, status: DocumentStatus, body: &str) -> &str {
        let handle = self.arena.store(body);
        self.docs.insert(
            id,
            Entry {
                data: DocumentData { rating, status },
                body: handle,
            },
        );
        self.arena.get(handle)
    }

    pub fn get(&self, id: DocId) -> Option<DocumentData> {
        self.docs.get(&id).map(|e| e.data)
    }

    pub fn body(&self, id: DocId) -> Option<&str> {
        self.docs.get(&id).map(|e| self.arena.get(e.body))
    }

    pub fn remove(&mut self, id: DocId) -> Option<DocumentData> {
        self.docs.remove(&id).map(|e| e.data)
    }

    pub fn count(&self) -> usize {
        self.docs.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.docs.keys().copied()
    }

    /// The index-th id in ascending order. Rejects `index == count` since
    /// the valid range is half-open.
    pub fn nth_id(&self, index: usize) -> Result<DocId> {
        self.docs
            .keys()
            .nth(index)
            .copied()
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::OutOfRange,
                    format!("index {} is out of range for {} documents", index, self.docs.len()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_id_respects_ascending_order() {
        let mut store = DocumentStore::new();
        store.insert(DocId(5), 0, DocumentStatus::Actual, "a");
        store.insert(DocId(1), 0, DocumentStatus::Actual, "b");
        store.insert(DocId(3), 0, DocumentStatus::Actual, "c");

        assert_eq!(store.nth_id(0).unwrap(), DocId(1));
        assert_eq!(store.nth_id(1).unwrap(), DocId(3));
        assert_eq!(store.nth_id(2).unwrap(), DocId(5));
    }

    #[test]
    fn nth_id_rejects_index_equal_to_count() {
        let mut store = DocumentStore::new();
        store.insert(DocId(1), 0, DocumentStatus::Actual, "a");
        let err = store.nth_id(1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::OutOfRange);
    }

    #[test]
    fn remove_then_reinsert_reuses_id() {
        let mut store = DocumentStore::new();
        store.insert(DocId(1), 0, DocumentStatus::Actual, "a");
        store.remove(DocId(1));
        assert!(!store.contains(DocId(1)));
        store.insert(DocId(1), 5, DocumentStatus::Banned, "b");
        assert!(store.contains(DocId(1)));
        assert_eq!(store.get(DocId(1)).unwrap().rating, 5);
    }
}
