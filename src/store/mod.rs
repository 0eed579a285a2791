pub mod arena;
pub mod document_store;
