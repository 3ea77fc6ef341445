//! Random walks over the word graph
//!
//! A walk starts at a random node and keeps picking a uniformly random
//! distinct successor (edge weights are ignored). It stops at a node with
//! no out-edges, on the first repeated edge (after recording that edge's
//! target once more), or when its cancellation token is set. Since every
//! non-final step traverses a new edge, a walk takes at most `|E| + 1`
//! steps.

use crate::cancel::CancellationToken;
use crate::errors::{Result, UnknownWords, WordGraphError};
use crate::graph::csr::WordGraph;
use crate::graph::export::atomic_write;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::PATH_SEPARATOR;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Why a walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkTermination {
    /// The current node has no outgoing edges
    DeadEnd,
    /// The chosen edge had already been traversed
    RepeatedEdge,
    /// The cancellation token was set
    Cancelled,
}

/// The nodes visited by one walk, in order
#[derive(Debug, Clone)]
pub struct WalkTrace {
    /// Visited node IDs; consecutive entries are edges
    nodes: Vec<u32>,
    /// Edges traversed in this walk (plus any pre-seeded ones)
    visited_edges: FxHashSet<(u32, u32)>,
    termination: WalkTermination,
}

impl WalkTrace {
    /// Visited node IDs in order
    pub fn nodes(&self) -> &[u32] {
        &self.nodes
    }

    /// Visited words in order
    pub fn words<'g>(&self, graph: &'g WordGraph) -> Vec<&'g str> {
        self.nodes.iter().map(|&n| graph.word(n)).collect()
    }

    /// Number of edges walked
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Edges marked as traversed
    pub fn visited_edges(&self) -> &FxHashSet<(u32, u32)> {
        &self.visited_edges
    }

    /// Why the walk stopped
    pub fn termination(&self) -> WalkTermination {
        self.termination
    }

    /// Words joined with ` -> `
    pub fn to_line(&self, graph: &WordGraph) -> String {
        self.words(graph).join(PATH_SEPARATOR)
    }

    /// Write the joined trace to `path`; the file is replaced atomically
    pub fn write_to(&self, graph: &WordGraph, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        atomic_write(path, &self.to_line(graph))?;
        debug!(path = %path.display(), steps = self.steps(), "wrote walk trace");
        Ok(())
    }
}

/// Random walker with an injectable random source
#[derive(Debug)]
pub struct RandomWalker<R: Rng> {
    rng: R,
    seeded_edges: FxHashSet<(u32, u32)>,
}

impl<R: Rng> RandomWalker<R> {
    /// Create a walker drawing from `rng`
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            seeded_edges: FxHashSet::default(),
        }
    }

    /// Treat these edges as already traversed at the start of every walk
    pub fn with_visited_edges(mut self, edges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        self.seeded_edges.extend(edges);
        self
    }

    /// Pre-mark the edge `from -> to` by word
    pub fn with_visited_edge(self, graph: &WordGraph, from: &str, to: &str) -> Result<Self> {
        let from = Tokenizer::normalize_word(from);
        let to = Tokenizer::normalize_word(to);
        let edge =
            UnknownWords::resolve_pair(&from, graph.node_id(&from), &to, graph.node_id(&to))
                .map_err(WordGraphError::unknown_word)?;
        Ok(self.with_visited_edges([edge]))
    }

    /// Walk from a uniformly random start node
    pub fn walk(&mut self, graph: &WordGraph, cancel: &CancellationToken) -> Result<WalkTrace> {
        if graph.is_empty() {
            return Err(WordGraphError::empty_graph(
                "random walk needs at least one node",
            ));
        }
        let start = self.rng.gen_range(0..graph.num_nodes()) as u32;
        Ok(self.walk_from(graph, start, cancel))
    }

    /// Walk from the node named `start` (trimmed and lowercased first)
    pub fn walk_from_word(
        &mut self,
        graph: &WordGraph,
        start: &str,
        cancel: &CancellationToken,
    ) -> Result<WalkTrace> {
        if graph.is_empty() {
            return Err(WordGraphError::empty_graph(
                "random walk needs at least one node",
            ));
        }
        let start = Tokenizer::normalize_word(start);
        let id = graph.node_id(&start).ok_or_else(|| {
            WordGraphError::unknown_word(UnknownWords::First {
                word: start.clone(),
            })
        })?;
        Ok(self.walk_from(graph, id, cancel))
    }

    /// Walk from node `start`, which must belong to `graph`
    pub fn walk_from(&mut self, graph: &WordGraph, start: u32, cancel: &CancellationToken) -> WalkTrace {
        let mut nodes = vec![start];
        let mut visited_edges = self.seeded_edges.clone();
        let mut current = start;

        let termination = loop {
            if cancel.is_cancelled() {
                break WalkTermination::Cancelled;
            }

            let targets = graph.targets(current);
            if targets.is_empty() {
                break WalkTermination::DeadEnd;
            }

            let next = targets[self.rng.gen_range(0..targets.len())];
            nodes.push(next);
            if !visited_edges.insert((current, next)) {
                break WalkTermination::RepeatedEdge;
            }
            current = next;
        };

        info!(
            start = graph.word(start),
            steps = nodes.len() - 1,
            termination = ?termination,
            "random walk finished"
        );

        WalkTrace {
            nodes,
            visited_edges,
            termination,
        }
    }
}
