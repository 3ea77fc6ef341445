//! Immutable word graph in compressed sparse row form
//!
//! Out-edges of node `i` live in `targets[offsets[i]..offsets[i + 1]]`
//! (weights in the parallel `weights` slice), sorted by target ID. Because
//! IDs follow first appearance in the text, neighbour order is stable
//! across runs.

use crate::graph::builder::GraphBuilder;
use rustc_hash::FxHashMap;

/// A directed, weighted word-adjacency graph
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// Word of each node, indexed by ID
    words: Vec<String>,
    /// Maps word -> node ID
    word_to_id: FxHashMap<String, u32>,
    /// Row offsets, `num_nodes + 1` entries
    offsets: Vec<usize>,
    /// Edge targets, grouped by source
    targets: Vec<u32>,
    /// Edge weights (co-occurrence counts), parallel to `targets`
    weights: Vec<u32>,
    /// Sum of outgoing weights per node
    out_weights: Vec<u64>,
}

impl WordGraph {
    /// Freeze a builder into CSR form
    pub fn from_builder(builder: GraphBuilder) -> Self {
        let (word_to_id, nodes) = builder.into_parts();
        let num_edges = nodes.iter().map(|n| n.edges.len()).sum();

        let mut words = Vec::with_capacity(nodes.len());
        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut targets = Vec::with_capacity(num_edges);
        let mut weights = Vec::with_capacity(num_edges);
        let mut out_weights = Vec::with_capacity(nodes.len());

        offsets.push(0);
        for node in nodes {
            let mut edges: Vec<(u32, u32)> = node.edges.into_iter().collect();
            edges.sort_unstable_by_key(|&(target, _)| target);

            let mut total = 0u64;
            for (target, weight) in edges {
                targets.push(target);
                weights.push(weight);
                total += u64::from(weight);
            }
            out_weights.push(total);
            offsets.push(targets.len());
            words.push(node.word);
        }

        Self {
            words,
            word_to_id,
            offsets,
            targets,
            weights,
            out_weights,
        }
    }

    /// Build directly from an ordered word sequence
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        GraphBuilder::from_words(words).build()
    }

    /// Number of nodes
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct directed edges
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.targets.len()
    }

    /// Whether the graph has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a node by word
    #[inline]
    pub fn node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Whether `word` is a node
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// Word of a node
    ///
    /// Panics if `node` is out of range; IDs come from this graph.
    #[inline]
    pub fn word(&self, node: u32) -> &str {
        &self.words[node as usize]
    }

    /// All words, indexed by node ID
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Out-neighbour IDs of a node, sorted ascending
    #[inline]
    pub fn targets(&self, node: u32) -> &[u32] {
        let (start, end) = self.row(node);
        &self.targets[start..end]
    }

    /// Iterate over (target_id, weight) pairs for a node
    #[inline]
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (start, end) = self.row(node);
        self.targets[start..end]
            .iter()
            .copied()
            .zip(self.weights[start..end].iter().copied())
    }

    /// Weight of `from -> to`, if the edge exists
    pub fn edge_weight(&self, from: u32, to: u32) -> Option<u32> {
        let (start, end) = self.row(from);
        self.targets[start..end]
            .binary_search(&to)
            .ok()
            .map(|i| self.weights[start + i])
    }

    /// Weight of `from -> to` by word, 0 when absent
    pub fn edge_weight_by_word(&self, from: &str, to: &str) -> u32 {
        match (self.node_id(from), self.node_id(to)) {
            (Some(f), Some(t)) => self.edge_weight(f, t).unwrap_or(0),
            _ => 0,
        }
    }

    /// Sum of outgoing weights of a node
    #[inline]
    pub fn out_weight(&self, node: u32) -> u64 {
        self.out_weights.get(node as usize).copied().unwrap_or(0)
    }

    /// Whether a node has no outgoing edges
    #[inline]
    pub fn is_dangling(&self, node: u32) -> bool {
        self.out_weight(node) == 0
    }

    /// Dangling nodes (no outgoing edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes() as u32)
            .filter(|&n| self.is_dangling(n))
            .collect()
    }

    /// Iterate over every edge as (source, target, weight)
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        (0..self.num_nodes() as u32)
            .flat_map(move |source| self.neighbors(source).map(move |(t, w)| (source, t, w)))
    }

    #[inline]
    fn row(&self, node: u32) -> (usize, usize) {
        let i = node as usize;
        match (self.offsets.get(i), self.offsets.get(i + 1)) {
            (Some(&start), Some(&end)) => (start, end),
            _ => (0, 0),
        }
    }
}
