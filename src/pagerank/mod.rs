//! PageRank over the word graph
//!
//! [`standard::StandardPageRank`] runs weighted power iteration with
//! dangling-mass redistribution. Results are indexed by node ID;
//! [`PageRankResult::ranked`] pairs them with words in descending order.

pub mod standard;

use crate::graph::csr::WordGraph;
use serde::Serialize;

/// Scores and convergence information from one PageRank run
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Score per node, indexed by node ID
    pub scores: Vec<f64>,
    /// Whether the L1 change fell below the threshold
    pub converged: bool,
    /// Iterations actually performed
    pub iterations: usize,
    /// L1 change of the last iteration
    pub delta: f64,
}

/// One row of a PageRank ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub score: f64,
}

impl PageRankResult {
    /// Result for a graph with no nodes
    pub fn empty() -> Self {
        Self {
            scores: Vec::new(),
            converged: true,
            iterations: 0,
            delta: 0.0,
        }
    }

    /// Score of a node, 0.0 when out of range
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Words sorted by descending score; ties keep node-ID order
    pub fn ranked(&self, graph: &WordGraph) -> Vec<RankedWord> {
        let mut order: Vec<usize> = (0..self.scores.len().min(graph.num_nodes())).collect();
        order.sort_by(|&a, &b| self.scores[b].total_cmp(&self.scores[a]));
        order
            .into_iter()
            .map(|i| RankedWord {
                word: graph.word(i as u32).to_string(),
                score: self.scores[i],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = PageRankResult::empty();
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.total(), 0.0);
        assert_eq!(result.score(3), 0.0);
    }

    #[test]
    fn test_ranked_descending_with_stable_ties() {
        let graph = WordGraph::from_words(&["a", "b", "c", "d"]);
        let result = PageRankResult {
            scores: vec![0.2, 0.4, 0.2, 0.2],
            converged: true,
            iterations: 1,
            delta: 0.0,
        };

        let ranked = result.ranked(&graph);
        let words: Vec<&str> = ranked.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["b", "a", "c", "d"]);
        assert_eq!(ranked[0].score, 0.4);
    }
}
