use serde::{Deserialize, Serialize};

/// Document identifier. Always non-negative; validated at the `SearchEngine`
/// boundary (callers may still pass a signed integer there, see `engine::add_document`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u64);

impl DocId {
    pub fn new(id: u64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Interned term handle. Both the forward and inverted maps key on this rather
/// than on owned or borrowed strings — see `index::inverted::TermInterner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TermId(pub u32);

/// Execution-policy selector for the operations that expose both a sequential
/// and a parallel variant (`FindTopDocuments`, `MatchDocument`, `RemoveDocument`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
}

/// A single ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i64,
}

/// Result of `MatchDocument`: the plus-words found in the document (sorted,
/// deduplicated) together with the document's status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_words: Vec<String>,
    pub status: DocumentStatus,
}

/// Per-document metadata kept by the document store.
#[derive(Debug, Clone, Copy)]
pub struct DocumentData {
    pub rating: i64,
    pub status: DocumentStatus,
}

/// Floor-division average of the supplied ratings; 0 for an empty list.
pub fn compute_average_rating(ratings: &[i64]) -> i64 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().sum();
    sum.div_euclid(ratings.len() as i64)
}
