//! # wordgraph
//!
//! Directed word-adjacency graphs built from text.
//!
//! Every distinct lowercase word becomes a node, and every pair of
//! consecutive words `(a, b)` adds one to the weight of the edge `a -> b`.
//! The frozen graph answers four kinds of query:
//!
//! - **Bridge words**: words `c` with `a -> c -> b`, plus text expansion
//!   that splices a random bridge between neighbouring words
//! - **Shortest paths**: Dijkstra with edge weight as cost, enumerating every
//!   tied shortest path
//! - **PageRank**: weighted power iteration with dangling-mass redistribution
//! - **Random walks**: uniform successor choice until a dead end or the first
//!   repeated edge
//!
//! Long-running queries take a [`CancellationToken`] and return partial
//! results when it is set.
//!
//! ```
//! use wordgraph::{CancellationToken, WordGraphSession};
//!
//! let mut session = WordGraphSession::new();
//! session.build_from_text("to seek out new life and new civilizations");
//!
//! let bridges = session.query_bridge_words("out", "life").unwrap();
//! assert_eq!(bridges.bridges(), vec!["new"]);
//!
//! let paths = session
//!     .shortest_paths("to", "life", &CancellationToken::new())
//!     .unwrap();
//! assert_eq!(paths[0].to_string(), "to -> seek -> out -> new -> life");
//! ```

pub mod bridge;
pub mod cancel;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod paths;
pub mod report;
pub mod session;
pub mod types;
pub mod walk;

// Re-export commonly used types
pub use cancel::CancellationToken;
pub use errors::{Result, UnknownWords, WordGraphError};
pub use types::WordGraphConfig;

// Re-export main functionality
pub use bridge::{expansion::TextExpander, BridgeOutcome, BridgeWordResolver};
pub use graph::{builder::GraphBuilder, csr::WordGraph};
pub use nlp::tokenizer::Tokenizer;
pub use pagerank::{standard::StandardPageRank, PageRankResult, RankedWord};
pub use paths::{dijkstra::ShortestPathTree, ShortestPathEngine, TargetPaths, WordPath};
pub use session::WordGraphSession;
pub use walk::{RandomWalker, WalkTermination, WalkTrace};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
