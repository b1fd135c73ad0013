//! Command implementations

pub mod benchmark;
pub mod build;
pub mod find;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_pairs};
pub use build::{GraphBuild, RuleReport, apply_rules, build_graph};
pub use find::{FindOutcome, FindResult, find_words};
pub use simple::run_simple;
pub use stats::{GraphReport, graph_report};
