use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::config::EngineConfig;
use crate::core::types::{DocId, DocumentStatus, ExecutionMode, ScoredDocument};
use crate::index::concurrent_map::ConcurrentMap;
use crate::index::inverted::InvertedIndex;
use crate::query::parser::ParsedQuery;
use crate::ranking::scorer::term_score;
use crate::store::document_store::DocumentStore;

/// Runs the ranking algorithm: accumulate tf×idf over
/// plus-words filtered by `predicate`, subtract any document hit by a
/// minus-word, then sort and truncate to `config.max_results`.
pub fn find_top_documents<P>(
    index: &InvertedIndex,
    store: &DocumentStore,
    parsed: &ParsedQuery<'_>,
    predicate: P,
    mode: ExecutionMode,
    config: &EngineConfig,
) -> Vec<ScoredDocument>
where
    P: Fn(DocId, DocumentStatus, i64) -> bool + Sync,
{
    let accumulated = match mode {
        ExecutionMode::Sequential => accumulate_sequential(index, store, parsed, &predicate),
        ExecutionMode::Parallel => accumulate_parallel(index, store, parsed, &predicate, config),
    };

    let mut results: Vec<ScoredDocument> = accumulated
        .into_iter()
        .filter_map(|(id, relevance)| {
            store.get(id).map(|data| ScoredDocument {
                id,
                relevance,
                rating: data.rating,
            })
        })
        .collect();

    results.sort_by(|a, b| rank_order(a, b, config.relevance_epsilon));
    results.truncate(config.max_results);
    results
}

fn rank_order(a: &ScoredDocument, b: &ScoredDocument, epsilon: f64) -> Ordering {
    if (a.relevance - b.relevance).abs() >= epsilon {
        return b
            .relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal);
    }
    if a.rating != b.rating {
        return b.rating.cmp(&a.rating);
    }
    a.id.cmp(&b.id)
}

fn accumulate_sequential<P>(
    index: &InvertedIndex,
    store: &DocumentStore,
    parsed: &ParsedQuery<'_>,
    predicate: &P,
) -> HashMap<DocId, f64>
where
    P: Fn(DocId, DocumentStatus, i64) -> bool,
{
    let mut acc: HashMap<DocId, f64> = HashMap::new();

    for &word in &parsed.plus {
        let Some(term_id) = index.lookup_term(word) else {
            continue;
        };
        let idf = index.idf(term_id);
        let Some(postings) = index.postings(term_id) else {
            continue;
        };
        for (&doc_id, &tf) in postings {
            let Some(data) = store.get(doc_id) else {
                continue;
            };
            if predicate(doc_id, data.status, data.rating) {
                *acc.entry(doc_id).or_insert(0.0) += term_score(tf, idf);
            }
        }
    }

    for &word in &parsed.minus {
        if let Some(term_id) = index.lookup_term(word) {
            if let Some(postings) = index.postings(term_id) {
                for &doc_id in postings.keys() {
                    acc.remove(&doc_id);
                }
            }
        }
    }

    acc
}

fn accumulate_parallel<P>(
    index: &InvertedIndex,
    store: &DocumentStore,
    parsed: &ParsedQuery<'_>,
    predicate: &P,
    config: &EngineConfig,
) -> HashMap<DocId, f64>
where
    P: Fn(DocId, DocumentStatus, i64) -> bool + Sync,
{
    use rayon::prelude::*;

    let acc: ConcurrentMap<f64> = ConcurrentMap::new(config.accumulator_shards);

    parsed.plus.par_iter().for_each(|&word| {
        let Some(term_id) = index.lookup_term(word) else {
            return;
        };
        let idf = index.idf(term_id);
        let Some(postings) = index.postings(term_id) else {
            return;
        };
        postings.par_iter().for_each(|(&doc_id, &tf)| {
            let Some(data) = store.get(doc_id) else {
                return;
            };
            if predicate(doc_id, data.status, data.rating) {
                *acc.at(doc_id.0) += term_score(tf, idf);
            }
        });
    });

    parsed.minus.par_iter().for_each(|&word| {
        if let Some(term_id) = index.lookup_term(word) {
            if let Some(postings) = index.postings(term_id) {
                postings.par_iter().for_each(|(&doc_id, _)| {
                    acc.erase(doc_id.0);
                });
            }
        }
    });

    acc.snapshot()
        .into_iter()
        .map(|(id, relevance)| (DocId(id), relevance))
        .collect()
}
