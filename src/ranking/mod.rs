pub mod retriever;
pub mod scorer;
