//! Graph construction pipeline
//!
//! Loads the configured dictionary and applies each rule in order,
//! timing every stage.

use crate::config::LadderConfig;
use crate::core::WordStore;
use crate::error::Result;
use crate::rules::{RuleType, TransformationRule};
use std::time::{Duration, Instant};
use tracing::info;

/// Outcome of applying one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub rule: &'static str,
    pub edges_added: usize,
    pub duration: Duration,
}

/// A built graph together with how it was built
#[derive(Debug)]
pub struct GraphBuild {
    pub store: WordStore,
    pub source: String,
    pub words_read: usize,
    pub load_duration: Duration,
    pub rules: Vec<RuleReport>,
}

/// Load the dictionary named by `config` and apply its rules
///
/// # Errors
///
/// Returns an error if the dictionary cannot be read or is empty.
pub fn build_graph(config: &LadderConfig) -> Result<GraphBuild> {
    let start = Instant::now();
    let words = config.dictionary.load()?;
    let words_read = words.len();

    let mut store = WordStore::from_words(&words);
    let load_duration = start.elapsed();
    info!(
        source = %config.dictionary,
        words = store.len(),
        "read {words_read} words"
    );

    let rules = apply_rules(&mut store, &config.rules);

    Ok(GraphBuild {
        store,
        source: config.dictionary.to_string(),
        words_read,
        load_duration,
        rules,
    })
}

/// Apply `rules` to `store` in order, reporting each one
pub fn apply_rules(store: &mut WordStore, rules: &[RuleType]) -> Vec<RuleReport> {
    rules
        .iter()
        .map(|rule| {
            info!(rule = rule.name(), "applying rule");
            let start = Instant::now();
            let edges_added = store.apply(rule);
            let duration = start.elapsed();
            info!(rule = rule.name(), edges_added, ?duration, "rule applied");

            RuleReport {
                rule: rule.name(),
                edges_added,
                duration,
            }
        })
        .collect()
}
