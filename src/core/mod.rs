//! Core domain types for word ladders
//!
//! `Word` is the normalized vocabulary entry; `WordStore` is the graph that
//! owns every word and the edges between them.

mod store;
mod word;

pub use store::{GraphStats, NodeId, WordStore};
pub use word::{Word, WordError};
