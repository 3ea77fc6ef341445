//! Single-source Dijkstra with tied-predecessor tracking
//!
//! Edge weights are co-occurrence counts, so the "shortest" path is the one
//! with the smallest total count. Frequent transitions cost more.

use crate::cancel::CancellationToken;
use crate::graph::csr::WordGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, warn};

/// Distances and predecessor sets from one source node
///
/// Only settled nodes report a distance. A settled node's distance is
/// final, and all of its predecessors are settled too, so paths built
/// from this tree are exact even when the search was cancelled.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: u32,
    /// Best known distance per node
    distances: Vec<Option<u64>>,
    /// Immediate predecessors on some minimum-cost path
    predecessors: Vec<Vec<u32>>,
    /// Nodes popped from the queue with their final distance
    settled: Vec<bool>,
    /// False when the search stopped on cancellation
    complete: bool,
}

impl ShortestPathTree {
    /// Run Dijkstra from `source`, polling `cancel` before each settled node
    ///
    /// `source` must be a node of `graph`.
    pub fn compute(graph: &WordGraph, source: u32, cancel: &CancellationToken) -> Self {
        let n = graph.num_nodes();
        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut predecessors: Vec<Vec<u32>> = vec![Vec::new(); n];
        let mut settled = vec![false; n];
        let mut complete = true;

        if (source as usize) >= n {
            return Self {
                source,
                distances,
                predecessors,
                settled,
                complete,
            };
        }

        distances[source as usize] = Some(0);
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0u64, source)));

        while let Some(Reverse((dist, u))) = queue.pop() {
            if cancel.is_cancelled() {
                complete = false;
                break;
            }

            // Stale entry: a shorter distance was recorded after this push
            if settled[u as usize] || distances[u as usize].map_or(true, |best| dist > best) {
                continue;
            }
            settled[u as usize] = true;

            for (v, weight) in graph.neighbors(u) {
                let candidate = dist + u64::from(weight);
                let vi = v as usize;
                match distances[vi] {
                    Some(best) if candidate > best => {}
                    Some(best) if candidate == best => {
                        if !predecessors[vi].contains(&u) {
                            predecessors[vi].push(u);
                        }
                    }
                    _ => {
                        distances[vi] = Some(candidate);
                        predecessors[vi].clear();
                        predecessors[vi].push(u);
                        queue.push(Reverse((candidate, v)));
                    }
                }
            }
        }

        let reached = settled.iter().filter(|&&s| s).count();
        if complete {
            debug!(source, reached, "shortest-path search finished");
        } else {
            warn!(source, reached, "shortest-path search cancelled, returning partial result");
        }

        Self {
            source,
            distances,
            predecessors,
            settled,
            complete,
        }
    }

    /// The source node
    pub fn source(&self) -> u32 {
        self.source
    }

    /// Final distance to `node`, `None` if unreachable or not yet settled
    pub fn distance(&self, node: u32) -> Option<u64> {
        let i = node as usize;
        if self.settled.get(i).copied().unwrap_or(false) {
            self.distances[i]
        } else {
            None
        }
    }

    /// Whether `node` has a final distance
    pub fn is_reachable(&self, node: u32) -> bool {
        self.distance(node).is_some()
    }

    /// Predecessors of `node` on minimum-cost paths
    pub fn predecessors(&self, node: u32) -> &[u32] {
        self.predecessors
            .get(node as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Settled nodes other than the source, in ID order
    pub fn reachable(&self) -> impl Iterator<Item = u32> + '_ {
        self.settled
            .iter()
            .enumerate()
            .filter(move |&(i, &s)| s && i as u32 != self.source)
            .map(|(i, _)| i as u32)
    }

    /// False when the search was cut short by cancellation
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
