//! Benchmark command
//!
//! Runs many random ladder queries against one graph. The graph is read-only
//! once built, so queries run in parallel, each with its own search state.

use crate::core::WordStore;
use crate::search::PathFinder;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub found: usize,
    pub unreachable: usize,
    pub average_length: f64,
    /// Longest ladder found, as words
    pub longest: Vec<String>,
    /// Ladder length (in words) -> number of queries
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Pick `count` random (start, end) pairs from the store's vocabulary
///
/// The same seed always yields the same pairs for the same store.
#[must_use]
pub fn sample_pairs(store: &WordStore, count: usize, seed: u64) -> Vec<(String, String)> {
    let words: Vec<&str> = store.iter().map(|(_, word)| word).collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let start = words[rng.random_range(0..words.len())];
            let end = words[rng.random_range(0..words.len())];
            (start.to_string(), end.to_string())
        })
        .collect()
}

/// Run every query in `pairs` and collect statistics
pub fn run_benchmark(
    store: &WordStore,
    pairs: &[(String, String)],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let finder = PathFinder::new(store);
    let start = Instant::now();

    let ladders: Vec<Vec<&str>> = pairs
        .par_iter()
        .map(|(from, to)| {
            let ladder = finder.find(from, to);
            pb.inc(1);
            ladder
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut total_length = 0;
    for ladder in ladders.iter().filter(|l| !l.is_empty()) {
        total_length += ladder.len();
        *distribution.entry(ladder.len()).or_insert(0) += 1;
    }

    let found = distribution.values().sum::<usize>();
    let longest: Vec<String> = ladders
        .iter()
        .max_by_key(|ladder| ladder.len())
        .map(|ladder| ladder.iter().map(ToString::to_string).collect())
        .unwrap_or_default();

    BenchmarkResult {
        total_queries: pairs.len(),
        found,
        unreachable: pairs.len() - found,
        average_length: if found == 0 {
            0.0
        } else {
            total_length as f64 / found as f64
        },
        longest,
        distribution,
        duration,
        queries_per_second: pairs.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
