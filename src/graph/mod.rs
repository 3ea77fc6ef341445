//! Graph construction and representation
//!
//! - [`builder::GraphBuilder`] accumulates edges while reading words.
//! - [`csr::WordGraph`] is the frozen, read-only graph every query runs on.
//! - [`export`] renders the graph as text or Graphviz DOT.

pub mod builder;
pub mod csr;
pub mod export;
