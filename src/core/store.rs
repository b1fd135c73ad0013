//! Word graph storage
//!
//! The `WordStore` owns every node of the word graph in an arena. Nodes are
//! addressed by `NodeId`, and adjacency lists hold ids rather than references,
//! so an edge can never outlive the node it points at.

use crate::rules::TransformationRule;
use rustc_hash::FxHashMap;
use std::fmt;

/// Stable handle to a node inside a `WordStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the store's arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single vertex: its word and outgoing edges
#[derive(Debug)]
struct Node {
    word: String,
    edges: Vec<NodeId>,
}

/// Summary numbers describing a built graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    /// Number of distinct words (nodes)
    pub words: usize,
    /// Number of directed edges
    pub edges: usize,
    /// Largest out-degree of any node
    pub max_out_degree: usize,
    /// Words with no outgoing edges
    pub isolated: usize,
}

/// Owner of the vocabulary and the directed edge relation between words
///
/// Lookup and insertion are O(1) amortized. Edges are directed and
/// de-duplicated: connecting the same pair twice records a single edge.
#[derive(Debug, Default)]
pub struct WordStore {
    nodes: Vec<Node>,
    index: FxHashMap<String, NodeId>,
    edge_count: usize,
}

impl WordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding every word of `words`
    ///
    /// Repeated words collapse onto a single node.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::WordStore;
    ///
    /// let store = WordStore::from_words(["cat", "cot", "cat"]);
    /// assert_eq!(store.len(), 2);
    /// assert!(store.exists("cot"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for word in words {
            store.ensure(word.as_ref());
        }
        store
    }

    /// Return the node for `word`, creating it if absent
    pub fn ensure(&mut self, word: &str) -> NodeId {
        if let Some(&id) = self.index.get(word) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            word: word.to_string(),
            edges: Vec::new(),
        });
        self.index.insert(word.to_string(), id);
        id
    }

    /// Membership test with no side effect
    #[inline]
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Look up the node for `word` without creating it
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<NodeId> {
        self.index.get(word).copied()
    }

    /// Add the directed edge `a -> b` if both words are known
    ///
    /// Missing endpoints make this a no-op rather than an error. Returns
    /// `true` only when a new edge was recorded.
    pub fn connect(&mut self, a: &str, b: &str) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(from), Some(to)) => self.connect_ids(from, to),
            _ => false,
        }
    }

    /// Add the directed edge `a -> b`, inserting either word if needed
    pub fn connect_or_insert(&mut self, a: &str, b: &str) -> bool {
        let from = self.ensure(a);
        let to = self.ensure(b);
        self.connect_ids(from, to)
    }

    /// Add the directed edge `from -> to` between existing nodes
    ///
    /// Self-loops, duplicate edges and ids from another store are rejected.
    pub fn connect_ids(&mut self, from: NodeId, to: NodeId) -> bool {
        if from == to || to.0 >= self.nodes.len() {
            return false;
        }

        let Some(node) = self.nodes.get_mut(from.0) else {
            return false;
        };

        if node.edges.contains(&to) {
            return false;
        }

        node.edges.push(to);
        self.edge_count += 1;
        true
    }

    /// Check whether the directed edge `a -> b` exists
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(from), Some(to)) => self.neighbors(from).contains(&to),
            _ => false,
        }
    }

    /// The word stored at `id`
    ///
    /// # Panics
    /// Panics if `id` was not issued by this store.
    #[inline]
    #[must_use]
    pub fn word(&self, id: NodeId) -> &str {
        &self.nodes[id.0].word
    }

    /// Outgoing edges of `id`, in insertion order
    ///
    /// Unknown ids have no neighbors.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map_or(&[], |node| node.edges.as_slice())
    }

    /// Iterate over every known word with its node id, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node.word.as_str()))
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edges
    #[inline]
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Apply a transformation rule, returning the number of edges it added
    pub fn apply<R: TransformationRule + ?Sized>(&mut self, rule: &R) -> usize {
        rule.apply(self)
    }

    /// Compute summary statistics for the current graph
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            words: self.len(),
            edges: self.edge_count,
            max_out_degree: self
                .nodes
                .iter()
                .map(|node| node.edges.len())
                .max()
                .unwrap_or(0),
            isolated: self.nodes.iter().filter(|node| node.edges.is_empty()).count(),
        }
    }
}
