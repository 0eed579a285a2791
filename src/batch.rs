use rayon::prelude::*;

use crate::core::error::Result;
use crate::core::types::{ExecutionMode, ScoredDocument};
use crate::engine::SearchEngine;

/// Fan `queries` out across the Rayon pool against the same engine,
/// read-only. Output order matches input
/// order regardless of which query finishes first.
pub fn process_queries(
    engine: &SearchEngine,
    queries: &[&str],
    mode: ExecutionMode,
) -> Vec<Result<Vec<ScoredDocument>>> {
    queries
        .par_iter()
        .map(|&query| engine.find_top_documents(query, mode))
        .collect()
}

/// Same as `process_queries`, flattened into a single list in query order.
/// Queries that errored contribute nothing to the flattened output.
pub fn process_queries_joined(
    engine: &SearchEngine,
    queries: &[&str],
    mode: ExecutionMode,
) -> Vec<ScoredDocument> {
    process_queries(engine, queries, mode)
        .into_iter()
        .filter_map(Result::ok)
        .flatten()
        .collect()
}
