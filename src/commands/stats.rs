//! Graph statistics command
//!
//! Summarizes how a graph was built and what it looks like.

use super::build::{GraphBuild, RuleReport};
use crate::core::GraphStats;
use std::time::Duration;

/// Number of highest-degree words listed in a report
pub const TOP_HUBS: usize = 5;

/// Everything the `stats` command prints
#[derive(Debug, Clone)]
pub struct GraphReport {
    pub source: String,
    pub words_read: usize,
    pub load_duration: Duration,
    pub rules: Vec<RuleReport>,
    pub stats: GraphStats,
    /// Words with the most outgoing edges, highest first
    pub hubs: Vec<(String, usize)>,
}

/// Summarize a built graph
#[must_use]
pub fn graph_report(build: &GraphBuild) -> GraphReport {
    let store = &build.store;

    let mut hubs: Vec<(String, usize)> = store
        .iter()
        .map(|(id, word)| (word.to_string(), store.neighbors(id).len()))
        .filter(|&(_, degree)| degree > 0)
        .collect();
    hubs.sort_by(|(w1, d1), (w2, d2)| d2.cmp(d1).then_with(|| w1.cmp(w2)));
    hubs.truncate(TOP_HUBS);

    GraphReport {
        source: build.source.clone(),
        words_read: build.words_read,
        load_duration: build.load_duration,
        rules: build.rules.clone(),
        stats: store.stats(),
        hubs,
    }
}
