//! Shortest paths with full enumeration of ties
//!
//! [`dijkstra::ShortestPathTree`] holds distances and predecessor sets;
//! [`ShortestPathEngine`] turns them into word paths. Every minimum-cost
//! path is listed exactly once. The number of such paths can grow
//! exponentially with graph size, so enumeration honours the same
//! cancellation token as the search.

pub mod dijkstra;

use crate::cancel::CancellationToken;
use crate::errors::{Result, UnknownWords, WordGraphError};
use crate::graph::csr::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::PATH_SEPARATOR;
use serde::Serialize;
use std::fmt;

pub use dijkstra::ShortestPathTree;

/// One minimum-cost path, source first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordPath {
    /// Words from source to target
    pub words: Vec<String>,
    /// Total edge weight along the path
    pub cost: u64,
}

impl WordPath {
    /// Number of edges in the path
    pub fn hops(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(PATH_SEPARATOR))
    }
}

/// All shortest paths to one reachable target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPaths {
    /// Target word
    pub target: String,
    /// Shared cost of every path in `paths`
    pub cost: u64,
    /// The tied minimum-cost paths
    pub paths: Vec<WordPath>,
}

/// Shortest-path queries over a built graph
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathEngine<'g> {
    graph: &'g WordGraph,
}

impl<'g> ShortestPathEngine<'g> {
    /// Create an engine over `graph`
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Run the single-source search from `source`
    pub fn tree(&self, source: &str, cancel: &CancellationToken) -> Result<ShortestPathTree> {
        let source = Tokenizer::normalize_word(source);
        let id = self.graph.node_id(&source).ok_or_else(|| {
            WordGraphError::unknown_word(UnknownWords::First {
                word: source.clone(),
            })
        })?;
        Ok(ShortestPathTree::compute(self.graph, id, cancel))
    }

    /// All shortest paths from `source` to `target`
    ///
    /// Unknown endpoints are an `UnknownWord` error; an unreachable target
    /// is an empty list. `source == target` yields the one-word path.
    pub fn paths_to(
        &self,
        source: &str,
        target: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<WordPath>> {
        let source = Tokenizer::normalize_word(source);
        let target = Tokenizer::normalize_word(target);

        let (source_id, target_id) = UnknownWords::resolve_pair(
            &source,
            self.graph.node_id(&source),
            &target,
            self.graph.node_id(&target),
        )
        .map_err(WordGraphError::unknown_word)?;

        let tree = ShortestPathTree::compute(self.graph, source_id, cancel);
        Ok(self.enumerate(&tree, target_id, cancel))
    }

    /// Shortest paths from `source` to every other reachable node, in ID order
    pub fn paths_to_all(
        &self,
        source: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<TargetPaths>> {
        let tree = self.tree(source, cancel)?;

        let mut all = Vec::new();
        for target in tree.reachable() {
            if cancel.is_cancelled() {
                break;
            }
            let paths = self.enumerate(&tree, target, cancel);
            if let (Some(cost), false) = (tree.distance(target), paths.is_empty()) {
                all.push(TargetPaths {
                    target: self.graph.word(target).to_string(),
                    cost,
                    paths,
                });
            }
        }
        Ok(all)
    }

    /// Expand the predecessor sets of `target` back to the source
    ///
    /// Uses an explicit stack: `chain` is the current partial path from the
    /// target backwards and `cursors[i]` is the next predecessor of
    /// `chain[i]` to try. A chain that reaches the source is reversed and
    /// emitted.
    pub fn enumerate(
        &self,
        tree: &ShortestPathTree,
        target: u32,
        cancel: &CancellationToken,
    ) -> Vec<WordPath> {
        let cost = match tree.distance(target) {
            Some(cost) => cost,
            None => return Vec::new(),
        };
        let source = tree.source();

        let mut paths = Vec::new();
        let mut chain: Vec<u32> = vec![target];
        let mut cursors: Vec<usize> = vec![0];

        while let Some(&node) = chain.last() {
            if cancel.is_cancelled() {
                break;
            }

            if node == source {
                paths.push(WordPath {
                    words: chain
                        .iter()
                        .rev()
                        .map(|&n| self.graph.word(n).to_string())
                        .collect(),
                    cost,
                });
                chain.pop();
                cursors.pop();
                continue;
            }

            let depth = chain.len() - 1;
            let preds = tree.predecessors(node);
            match preds.get(cursors[depth]) {
                Some(&pred) => {
                    cursors[depth] += 1;
                    chain.push(pred);
                    cursors.push(0);
                }
                None => {
                    chain.pop();
                    cursors.pop();
                }
            }
        }

        paths
    }
}
