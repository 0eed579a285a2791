use std::collections::HashSet;

use crate::core::types::{DocId, ExecutionMode};
use crate::engine::SearchEngine;

/// Canonical signature for a document's token set: its distinct tokens,
/// sorted and joined, ignoring term frequency.
fn signature(engine: &SearchEngine, id: DocId) -> String {
    let mut tokens: Vec<String> = engine.word_frequencies(id.0 as i64).into_keys().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Remove every document whose token set duplicates one already seen
/// (scanned in ascending id order, so the lowest id of each group survives).
/// Returns the ids that were removed.
pub fn remove_duplicate_documents(engine: &mut SearchEngine) -> Vec<DocId> {
    let ids: Vec<DocId> = engine.ids().collect();
    let mut seen = HashSet::new();
    let mut to_remove = Vec::new();

    for id in ids {
        let sig = signature(engine, id);
        if !seen.insert(sig) {
            to_remove.push(id);
        }
    }

    for &id in &to_remove {
        engine
            .remove_document(id.0 as i64, ExecutionMode::Sequential)
            .expect("id was just observed live");
    }

    to_remove
}
