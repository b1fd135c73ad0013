//! Breadth-first ladder search
//!
//! BFS discovers nodes in non-decreasing distance from the start, so the
//! first time the target is dequeued its predecessor chain is a shortest
//! ladder. All per-query state lives inside `find`, so any number of queries
//! may run against the same store at once.

use crate::core::{NodeId, WordStore};
use std::collections::VecDeque;
use tracing::trace;

/// Shortest-path queries over a `WordStore`
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    store: &'a WordStore,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder over a fully built store
    #[must_use]
    pub const fn new(store: &'a WordStore) -> Self {
        Self { store }
    }

    /// The store this finder searches
    #[must_use]
    pub const fn store(&self) -> &'a WordStore {
        self.store
    }

    /// Find a shortest ladder from `start` to `end`
    ///
    /// Returns the words from `start` to `end` inclusive. An empty result
    /// means either word is unknown or `end` is unreachable; use
    /// `WordStore::exists` to tell those apart. A known word reaches itself
    /// with a one-word ladder.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::WordStore;
    /// use word_ladder::rules::SubstituteRule;
    /// use word_ladder::search::PathFinder;
    ///
    /// let mut store = WordStore::from_words(["cold", "cord", "card", "ward", "warm"]);
    /// store.apply(&SubstituteRule);
    ///
    /// let ladder = PathFinder::new(&store).find("cold", "warm");
    /// assert_eq!(ladder, vec!["cold", "cord", "card", "ward", "warm"]);
    /// ```
    #[must_use]
    pub fn find(&self, start: &str, end: &str) -> Vec<&'a str> {
        let (Some(start_id), Some(end_id)) = (self.store.get(start), self.store.get(end)) else {
            return Vec::new();
        };

        let predecessors = self.search(start_id, end_id);
        let Some(predecessors) = predecessors else {
            trace!(start, end, "no ladder");
            return Vec::new();
        };

        self.reconstruct(&predecessors, end_id)
    }

    /// Run BFS until `end` is dequeued
    ///
    /// Returns the predecessor table on success, `None` if the queue drains
    /// without reaching `end`.
    fn search(&self, start: NodeId, end: NodeId) -> Option<Vec<Option<NodeId>>> {
        let node_count = self.store.len();
        let mut seen = vec![false; node_count];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
        let mut queue = VecDeque::with_capacity(node_count);

        seen[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                trace!(visited = seen.iter().filter(|&&s| s).count(), "reached target");
                return Some(predecessors);
            }

            for &next in self.store.neighbors(current) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    predecessors[next.index()] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Walk predecessor links back from `end` and return the ladder start-first
    fn reconstruct(&self, predecessors: &[Option<NodeId>], end: NodeId) -> Vec<&'a str> {
        let mut ladder = Vec::new();
        let mut current = Some(end);

        while let Some(id) = current {
            ladder.push(self.store.word(id));
            current = predecessors[id.index()];
        }

        ladder.reverse();
        ladder
    }
}

/// Find a shortest ladder from `start` to `end` in `store`
///
/// Shorthand for `PathFinder::new(store).find(start, end)`.
#[must_use]
pub fn find_ladder<'a>(store: &'a WordStore, start: &str, end: &str) -> Vec<&'a str> {
    PathFinder::new(store).find(start, end)
}
