//! Word Ladder
//!
//! Builds a graph over a dictionary where edges are single-step word
//! transformations (substitute, insert or swap letters) and finds shortest
//! ladders between words with breadth-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::WordStore;
//! use word_ladder::rules::RuleType;
//! use word_ladder::search::find_ladder;
//!
//! let mut store = WordStore::from_words(["cat", "cot", "cog", "dog"]);
//! for rule in RuleType::all() {
//!     store.apply(&rule);
//! }
//!
//! assert_eq!(find_ladder(&store, "cat", "dog"), vec!["cat", "cot", "cog", "dog"]);
//! assert!(find_ladder(&store, "cat", "xyz").is_empty());
//! ```

// Core domain types
pub mod core;

// Transformation rules
pub mod rules;

// Shortest-ladder search
pub mod search;

// Word lists
pub mod wordlists;

// Run configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
