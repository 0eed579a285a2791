pub mod analytics;
pub mod batch;
pub mod core;
pub mod dedup;
pub mod engine;
pub mod index;
pub mod query;
pub mod ranking;
pub mod store;
pub mod text;

pub use crate::core::config::EngineConfig;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{DocId, DocumentStatus, ExecutionMode, MatchResult, ScoredDocument};
pub use crate::engine::SearchEngine;
pub use crate::text::stopwords::StopWords;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                      SEARCHCORE MODULE LAYOUT                            │
└──────────────────────────────────────────────────────────────────────────┘

 text::splitter      -- whitespace tokenizer, borrows the input
 text::stopwords     -- fixed-at-construction ignore set
 store::arena        -- append-only document body storage
 store::document_store -- id -> {rating, status}, ordered id set
 index::concurrent_map -- sharded lock-per-bucket accumulator
 index::inverted     -- TermId-interned forward/inverted maps
 query::parser       -- raw query -> (plus-set, minus-set)
 query::matcher      -- MatchDocument, minus-first short-circuit
 ranking::scorer      -- tf x idf
 ranking::retriever   -- FindTopDocuments, seq + parallel
 engine               -- SearchEngine: ties the modules above together
 analytics::request_tracker -- sliding zero-result window, external observer
 batch                -- process_queries / process_queries_joined
 dedup                -- remove_duplicate_documents

 SearchEngine is the single-writer entry point; FindTopDocuments, MatchDocument
 and RemoveDocument each take an ExecutionMode and must agree between modes.
*/
