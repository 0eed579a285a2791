use std::collections::HashMap;

use crate::core::types::{ExecutionMode, TermId};
use crate::index::inverted::InvertedIndex;
use crate::query::parser::ParsedQuery;

/// Plus-words from `parsed` that occur in `forward` (a document's term
/// frequencies), short-circuited to an empty list if any minus-word from
/// `parsed` occurs there first.
pub fn match_document(
    index: &InvertedIndex,
    forward: &HashMap<TermId, f64>,
    parsed: &ParsedQuery<'_>,
    mode: ExecutionMode,
) -> Vec<String> {
    let minus_ids: Vec<TermId> = parsed
        .minus
        .iter()
        .filter_map(|&w| index.lookup_term(w))
        .collect();

    let has_minus_hit = match mode {
        ExecutionMode::Sequential => minus_ids.iter().any(|id| forward.contains_key(id)),
        ExecutionMode::Parallel => {
            use rayon::prelude::*;
            minus_ids.par_iter().any(|id| forward.contains_key(id))
        }
    };

    if has_minus_hit {
        return Vec::new();
    }

    let plus_ids: Vec<(TermId, &str)> = parsed
        .plus
        .iter()
        .filter_map(|&w| index.lookup_term(w).map(|id| (id, w)))
        .collect();

    let mut matched: Vec<String> = match mode {
        ExecutionMode::Sequential => plus_ids
            .iter()
            .filter(|(id, _)| forward.contains_key(id))
            .map(|(_, w)| w.to_string())
            .collect(),
        ExecutionMode::Parallel => {
            use rayon::prelude::*;
            plus_ids
                .par_iter()
                .filter(|(id, _)| forward.contains_key(id))
                .map(|(_, w)| w.to_string())
                .collect()
        }
    };

    matched.sort_unstable();
    matched.dedup();
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocId;
    use crate::text::stopwords::StopWords;

    #[test]
    fn minus_word_short_circuits_in_both_modes() {
        let mut index = InvertedIndex::new();
        index.add_document(DocId(0), &["кот", "ошейник", "белый"]);
        let forward = index.forward_frequencies(DocId(0)).unwrap().clone();
        let stop_words = StopWords::from_text("и на в").unwrap();

        let without_minus =
            crate::query::parser::parse_query("кот ошейник", &stop_words).unwrap();
        let with_minus =
            crate::query::parser::parse_query("кот ошейник -белый", &stop_words).unwrap();

        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            let hit = match_document(&index, &forward, &without_minus, mode);
            assert_eq!(hit, vec!["кот".to_string(), "ошейник".to_string()]);

            let excluded = match_document(&index, &forward, &with_minus, mode);
            assert!(excluded.is_empty());
        }
    }
}
