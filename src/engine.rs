use std::collections::HashMap;

use crate::core::config::EngineConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{
    compute_average_rating, DocId, DocumentStatus, ExecutionMode, MatchResult, ScoredDocument,
};
use crate::index::inverted::InvertedIndex;
use crate::query::matcher;
use crate::query::parser::{self, ParsedQuery};
use crate::ranking::retriever;
use crate::store::document_store::DocumentStore;
use crate::text::splitter::split_ascii_spaces;
use crate::text::stopwords::StopWords;
use crate::text::token::is_valid_token;

/// The public, single-writer search engine: a document store,
/// its inverted index, and the fixed stop-word set they were built with.
pub struct SearchEngine {
    stop_words: StopWords,
    index: InvertedIndex,
    store: DocumentStore,
    config: EngineConfig,
}

impl SearchEngine {
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_config(stop_words, EngineConfig::default())
    }

    pub fn with_config(stop_words: StopWords, config: EngineConfig) -> Self {
        SearchEngine {
            stop_words,
            index: InvertedIndex::new(),
            store: DocumentStore::new(),
            config,
        }
    }

    /// Construct from a single space-joined stop-word string.
    pub fn from_stop_word_text(text: &str) -> Result<Self> {
        Ok(Self::new(StopWords::from_text(text)?))
    }

    /// AddDocument. `id` is taken as a signed integer so a
    /// negative id can be rejected with its own error kind rather than
    /// panicking on the `u64` conversion.
    pub fn add_document(
        &mut self,
        id: i64,
        body: &str,
        status: DocumentStatus,
        ratings: &[i64],
    ) -> Result<()> {
        if id < 0 {
            return Err(Error::new(ErrorKind::NegativeId, format!("id {} is negative", id)));
        }
        let doc_id = DocId(id as u64);
        if self.store.contains(doc_id) {
            return Err(Error::new(
                ErrorKind::DuplicateId,
                format!("document {} already exists", id),
            ));
        }

        let mut tokens = Vec::new();
        for raw in split_ascii_spaces(body) {
            if self.stop_words.contains(raw) {
                continue;
            }
            if !is_valid_token(raw) {
                return Err(Error::new(
                    ErrorKind::InvalidChar,
                    format!("token {:?} in document {} contains a control character", raw, id),
                ));
            }
            tokens.push(raw);
        }

        let rating = compute_average_rating(ratings);
        self.store.insert(doc_id, rating, status, body);
        self.index.add_document(doc_id, &tokens);
        Ok(())
    }

    /// FindTopDocuments restricted to the default filter, status == ACTUAL.
    pub fn find_top_documents(&self, query: &str, mode: ExecutionMode) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by_status(query, DocumentStatus::Actual, mode)
    }

    pub fn find_top_documents_by_status(
        &self,
        query: &str,
        status: DocumentStatus,
        mode: ExecutionMode,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with(query, move |_id, s, _rating| s == status, mode)
    }

    pub fn find_top_documents_with<P>(
        &self,
        query: &str,
        predicate: P,
        mode: ExecutionMode,
    ) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(DocId, DocumentStatus, i64) -> bool + Sync,
    {
        let parsed = self.parse(query)?;
        Ok(retriever::find_top_documents(
            &self.index,
            &self.store,
            &parsed,
            predicate,
            mode,
            &self.config,
        ))
    }

    /// MatchDocument.
    pub fn match_document(&self, query: &str, id: i64, mode: ExecutionMode) -> Result<MatchResult> {
        let doc_id = self.live_doc_id(id)?;
        let parsed = self.parse(query)?;
        let forward = self
            .index
            .forward_frequencies(doc_id)
            .expect("live document must have forward frequencies");
        let matched_words = matcher::match_document(&self.index, forward, &parsed, mode);
        let status = self.store.get(doc_id).expect("live document").status;
        Ok(MatchResult { matched_words, status })
    }

    /// GetWordFrequencies: empty mapping for an unknown id, never an error.
    pub fn word_frequencies(&self, id: i64) -> HashMap<String, f64> {
        let Ok(doc_id) = u64::try_from(id).map(DocId) else {
            return HashMap::new();
        };
        match self.index.forward_frequencies(doc_id) {
            Some(freqs) => freqs
                .iter()
                .map(|(&term_id, &tf)| (self.index.resolve_term(term_id).to_string(), tf))
                .collect(),
            None => HashMap::new(),
        }
    }

    pub fn remove_document(&mut self, id: i64, mode: ExecutionMode) -> Result<()> {
        let doc_id = self.live_doc_id(id)?;
        match mode {
            ExecutionMode::Sequential => self.index.remove_document(doc_id),
            ExecutionMode::Parallel => self.index.remove_document_parallel(doc_id),
        };
        self.store.remove(doc_id);
        Ok(())
    }

    pub fn document_count(&self) -> usize {
        self.store.count()
    }

    pub fn document_id(&self, index: usize) -> Result<DocId> {
        self.store.nth_id(index)
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.store.ids()
    }

    fn live_doc_id(&self, id: i64) -> Result<DocId> {
        let doc_id = u64::try_from(id)
            .ok()
            .map(DocId)
            .filter(|&d| self.store.contains(d));
        doc_id.ok_or_else(|| {
            Error::new(ErrorKind::UnknownDocument, format!("document {} is not live", id))
        })
    }

    fn parse<'q>(&self, query: &'q str) -> Result<ParsedQuery<'q>> {
        parser::parse_query(query, &self.stop_words)
    }
}
