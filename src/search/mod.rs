//! Search algorithms

pub mod alphabeta;

pub use alphabeta::{ChildPolicy, SearchResult, SearchStats, Searcher};
