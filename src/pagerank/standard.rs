//! Weighted PageRank with dangling-mass redistribution
//!
//! Each node passes its score along out-edges in proportion to edge weight.
//! Nodes without out-edges spread their score evenly over all nodes, so no
//! rank mass is lost and the scores keep summing to one.
//!
//! ```text
//! link(v) = Σ_{u -> v} score(u) * w(u, v) / out(u)
//! new(v)  = (1 - d) / N + d * (link(v) + dangling / N)
//! ```

use crate::errors::{Result, WordGraphError};
use crate::graph::csr::WordGraph;
use crate::pagerank::PageRankResult;
use crate::types::{
    validate_damping, WordGraphConfig, DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_DAMPING,
    DEFAULT_MAX_ITERATIONS,
};
use tracing::{debug, info, warn};

/// Standard (non-personalized) PageRank
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    damping: f64,
    max_iterations: usize,
    threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardPageRank {
    /// Create with damping 0.85, 100 iterations and tolerance 1e-8
    pub fn new() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }

    /// Take damping, iteration cap and tolerance from a config
    pub fn from_config(config: &WordGraphConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance on total L1 change
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.max_iterations == 0 {
            return Err(WordGraphError::invalid_parameter(
                "max_iterations must be > 0",
            ));
        }
        if !(self.threshold > 0.0) {
            return Err(WordGraphError::invalid_parameter(format!(
                "threshold must be > 0, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Run power iteration on `graph`
    ///
    /// An empty graph gives an empty, converged result.
    pub fn run(&self, graph: &WordGraph) -> Result<PageRankResult> {
        self.validate()?;

        let n = graph.num_nodes();
        if n == 0 {
            return Ok(PageRankResult::empty());
        }
        let n_f = n as f64;

        // Reverse adjacency: contributors of each node with their share
        // weight(u -> v) / out(u) precomputed
        let mut incoming: Vec<Vec<(u32, f64)>> = vec![Vec::new(); n];
        for (source, target, weight) in graph.edges() {
            let share = f64::from(weight) / graph.out_weight(source) as f64;
            incoming[target as usize].push((source, share));
        }
        let dangling = graph.dangling_nodes();

        let mut scores = vec![1.0 / n_f; n];
        let mut next = vec![0.0; n];
        let base = (1.0 - self.damping) / n_f;

        let mut converged = false;
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        for _ in 0..self.max_iterations {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
            let dangling_share = dangling_mass / n_f;

            for (v, contributors) in incoming.iter().enumerate() {
                let link: f64 = contributors
                    .iter()
                    .map(|&(u, share)| scores[u as usize] * share)
                    .sum();
                next[v] = base + self.damping * (link + dangling_share);
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (new - old).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);

            if delta < self.threshold {
                converged = true;
                break;
            }
        }

        if converged {
            info!(iterations, delta, "PageRank converged");
        } else {
            warn!(iterations, delta, "PageRank hit the iteration cap before converging");
        }
        debug!(nodes = n, dangling = dangling.len(), "PageRank finished");

        Ok(PageRankResult {
            scores,
            converged,
            iterations,
            delta,
        })
    }
}
