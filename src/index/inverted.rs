use std::collections::HashMap;

use crate::core::types::{DocId, TermId};

/// Owns the canonical bytes of every distinct token ever indexed. Both
/// `InvertedIndex` maps key on the `TermId`s handed out here rather than on
/// borrowed `&str`s, which sidesteps the self-referential lifetime a raw
/// text-arena view would otherwise require.
#[derive(Default)]
struct TermInterner {
    terms: Vec<Box<str>>,
    index: HashMap<Box<str>, TermId>,
}

impl TermInterner {
    fn new() -> Self {
        TermInterner {
            terms: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn intern(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.index.get(term) {
            return id;
        }
        let id = TermId(self.terms.len() as u32);
        self.terms.push(Box::from(term));
        self.index.insert(Box::from(term), id);
        id
    }

    fn lookup(&self, term: &str) -> Option<TermId> {
        self.index.get(term).copied()
    }

    fn resolve(&self, id: TermId) -> &str {
        &self.terms[id.0 as usize]
    }
}

/// The coupled forward/inverted maps. `forward[d][t]` and
/// `inverted[t][d]` always carry the identical term-frequency value; the
/// two maps are otherwise independent, so either can be updated first.
#[derive(Default)]
pub struct InvertedIndex {
    interner: TermInterner,
    forward: HashMap<DocId, HashMap<TermId, f64>>,
    inverted: HashMap<TermId, HashMap<DocId, f64>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            interner: TermInterner::new(),
            forward: HashMap::new(),
            inverted: HashMap::new(),
        }
    }

    pub fn doc_count(&self) -> usize {
        self.forward.len()
    }

    pub fn lookup_term(&self, term: &str) -> Option<TermId> {
        self.interner.lookup(term)
    }

    pub fn resolve_term(&self, id: TermId) -> &str {
        self.interner.resolve(id)
    }

    /// Index `tokens` (already stop-word filtered) under `id`. Each distinct
    /// token's term frequency is occurrences / `tokens.len()`: rather
    /// than computing counts up front, `1 / tokens.len()` is added once per
    /// occurrence, which sums to the same value.
    pub fn add_document(&mut self, id: DocId, tokens: &[&str]) {
        if tokens.is_empty() {
            self.forward.insert(id, HashMap::new());
            return;
        }
        let inv_count = 1.0 / tokens.len() as f64;
        let mut doc_freqs: HashMap<TermId, f64> = HashMap::new();

        for &token in tokens {
            let term_id = self.interner.intern(token);
            *doc_freqs.entry(term_id).or_insert(0.0) += inv_count;
            *self
                .inverted
                .entry(term_id)
                .or_default()
                .entry(id)
                .or_insert(0.0) += inv_count;
        }

        self.forward.insert(id, doc_freqs);
    }

    /// Drops all postings for `id`; `token` entries whose posting list
    /// becomes empty are removed entirely. Returns the removed document's
    /// term frequencies, or `None` if `id` was not live.
    pub fn remove_document(&mut self, id: DocId) -> Option<HashMap<TermId, f64>> {
        let doc_freqs = self.forward.remove(&id)?;
        for &term_id in doc_freqs.keys() {
            if let Some(postings) = self.inverted.get_mut(&term_id) {
                postings.remove(&id);
                if postings.is_empty() {
                    self.inverted.remove(&term_id);
                }
            }
        }
        Some(doc_freqs)
    }

    /// Same effect as `remove_document`, but the per-token lookup that
    /// decides which inverted entries are touched is distributed across the
    /// Rayon pool. The caller must guarantee single-writer access for the
    /// duration.
    pub fn remove_document_parallel(&mut self, id: DocId) -> Option<HashMap<TermId, f64>> {
        use rayon::prelude::*;

        let doc_freqs = self.forward.remove(&id)?;
        let terms: Vec<TermId> = doc_freqs.keys().copied().collect();

        let emptied: Vec<TermId> = {
            let inverted = &self.inverted;
            terms
                .par_iter()
                .filter_map(|&term_id| {
                    let postings = inverted.get(&term_id)?;
                    (postings.contains_key(&id) && postings.len() == 1).then_some(term_id)
                })
                .collect()
        };

        for &term_id in &terms {
            if let Some(postings) = self.inverted.get_mut(&term_id) {
                postings.remove(&id);
            }
        }
        for term_id in emptied {
            self.inverted.remove(&term_id);
        }

        Some(doc_freqs)
    }

    pub fn postings(&self, term_id: TermId) -> Option<&HashMap<DocId, f64>> {
        self.inverted.get(&term_id)
    }

    pub fn forward_frequencies(&self, id: DocId) -> Option<&HashMap<TermId, f64>> {
        self.forward.get(&id)
    }

    pub fn contains_doc(&self, id: DocId) -> bool {
        self.forward.contains_key(&id)
    }

    /// idf(w) = ln(total-document-count / |postings(w)|).
    pub fn idf(&self, term_id: TermId) -> f64 {
        let postings_len = self.inverted.get(&term_id).map(|p| p.len()).unwrap_or(0);
        if postings_len == 0 {
            return 0.0;
        }
        (self.doc_count() as f64 / postings_len as f64).ln()
    }
}
