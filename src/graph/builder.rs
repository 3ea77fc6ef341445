//! Graph builder with efficient edge handling
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) edge lookups during construction. The builder is consumed by
//! [`GraphBuilder::build`], which freezes it into an immutable
//! [`WordGraph`]; there is no way to add edges afterwards.

use crate::graph::csr::WordGraph;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Below this many words the parallel path is slower than the sequential one
const MIN_PARALLEL_WORDS: usize = 1000;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The word for this node
    pub word: String,
    /// Outgoing edges: target node ID -> co-occurrence count
    pub edges: FxHashMap<u32, u32>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable directed graph builder
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps word -> node ID
    word_to_id: FxHashMap<String, u32>,
    /// Node storage, indexed by ID in first-appearance order
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            word_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given word, returning its ID
    pub fn get_or_create_node(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(BuilderNode::new(word));
        id
    }

    /// Add `count` to the directed edge `from -> to`
    ///
    /// The edge is created if absent. Self-loops are kept: a word that
    /// follows itself is a real adjacency.
    pub fn increment_edge(&mut self, from: u32, to: u32, count: u32) {
        if count == 0 || to as usize >= self.nodes.len() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0) += count;
        }
    }

    /// Build a graph from an ordered word sequence
    ///
    /// Every word becomes a node; each consecutive pair `(w[i], w[i+1])`
    /// adds one to the weight of `w[i] -> w[i+1]`.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut builder = Self::with_capacity(words.len() / 2);

        let mut previous: Option<u32> = None;
        for word in words {
            let id = builder.get_or_create_node(word.as_ref());
            if let Some(prev) = previous {
                builder.increment_edge(prev, id, 1);
            }
            previous = Some(id);
        }

        debug!(
            words = words.len(),
            nodes = builder.node_count(),
            edges = builder.edge_count(),
            "built word graph"
        );
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by word
    pub fn get_node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Get the word for a node ID
    pub fn get_word(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.word.as_str())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the builder into an immutable graph
    pub fn build(self) -> WordGraph {
        WordGraph::from_builder(self)
    }

    pub(crate) fn into_parts(self) -> (FxHashMap<String, u32>, Vec<BuilderNode>) {
        (self.word_to_id, self.nodes)
    }
}

/// Build a graph from words, counting pairs in parallel for large inputs
///
/// Node IDs are assigned sequentially so they match [`GraphBuilder::from_words`];
/// only the pair counting is split across threads. The result is identical
/// to the sequential build.
pub fn build_graph_parallel<S: AsRef<str> + Sync>(words: &[S]) -> GraphBuilder {
    build_graph_with_threshold(words, MIN_PARALLEL_WORDS)
}

/// Like [`build_graph_parallel`] with an explicit cut-over point
pub fn build_graph_with_threshold<S: AsRef<str> + Sync>(
    words: &[S],
    threshold: usize,
) -> GraphBuilder {
    // For small documents, sequential is faster
    if words.len() < threshold.max(2) {
        return GraphBuilder::from_words(words);
    }

    let mut builder = GraphBuilder::with_capacity(words.len() / 4);
    let ids: Vec<u32> = words
        .iter()
        .map(|w| builder.get_or_create_node(w.as_ref()))
        .collect();

    let pair_counts: FxHashMap<(u32, u32), u32> = ids
        .par_windows(2)
        .fold(FxHashMap::default, |mut acc: FxHashMap<(u32, u32), u32>, pair| {
            *acc.entry((pair[0], pair[1])).or_insert(0) += 1;
            acc
        })
        .reduce(FxHashMap::default, |mut left, right| {
            for (edge, count) in right {
                *left.entry(edge).or_insert(0) += count;
            }
            left
        });

    for ((from, to), count) in pair_counts {
        builder.increment_edge(from, to, count);
    }

    debug!(
        words = words.len(),
        nodes = builder.node_count(),
        edges = builder.edge_count(),
        "built word graph in parallel"
    );
    builder
}
