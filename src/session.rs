//! A build-then-query session
//!
//! Holds at most one graph at a time. Building replaces it wholesale, and
//! every query fails with `GraphNotReady` until a non-empty graph exists.

use crate::bridge::expansion::TextExpander;
use crate::bridge::{BridgeOutcome, BridgeWordResolver};
use crate::cancel::CancellationToken;
use crate::errors::{Result, WordGraphError};
use crate::graph::builder::build_graph_with_threshold;
use crate::graph::csr::WordGraph;
use crate::graph::export;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::paths::{ShortestPathEngine, TargetPaths, WordPath};
use crate::types::WordGraphConfig;
use crate::walk::{RandomWalker, WalkTrace};
use rand::Rng;
use std::path::Path;
use tracing::info;

/// Owns the configuration, the tokenizer and the current graph
#[derive(Debug, Default)]
pub struct WordGraphSession {
    config: WordGraphConfig,
    tokenizer: Tokenizer,
    graph: Option<WordGraph>,
}

impl WordGraphSession {
    /// Create a session with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a validated configuration
    pub fn with_config(config: WordGraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// The active configuration
    pub fn config(&self) -> &WordGraphConfig {
        &self.config
    }

    /// Build a new graph from raw text, replacing any previous one
    pub fn build_from_text(&mut self, text: &str) -> &WordGraph {
        let words = self.tokenizer.normalize(text);
        self.build_from_words(&words)
    }

    /// Build a new graph from already-normalized words
    pub fn build_from_words<S: AsRef<str> + Sync>(&mut self, words: &[S]) -> &WordGraph {
        let graph = build_graph_with_threshold(words, self.config.parallel_threshold).build();
        info!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            "word graph ready"
        );
        self.graph.insert(graph)
    }

    /// Read a text file and build a graph from it
    pub fn build_from_file(&mut self, path: impl AsRef<Path>) -> Result<&WordGraph> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| WordGraphError::io(format!("{}: {}", path.display(), e)))?;
        Ok(self.build_from_text(&text))
    }

    /// The current graph, if one with at least one node has been built
    pub fn graph(&self) -> Result<&WordGraph> {
        match &self.graph {
            Some(graph) if !graph.is_empty() => Ok(graph),
            _ => Err(WordGraphError::GraphNotReady),
        }
    }

    /// Adjacency listing of the current graph
    pub fn adjacency_listing(&self) -> Result<String> {
        Ok(export::adjacency_listing(self.graph()?))
    }

    /// Write the current graph as DOT
    pub fn export_dot(&self, path: impl AsRef<Path>) -> Result<()> {
        export::export_dot(self.graph()?, path)
    }

    /// Bridge words from `word1` to `word2`
    pub fn query_bridge_words(&self, word1: &str, word2: &str) -> Result<BridgeOutcome> {
        Ok(BridgeWordResolver::new(self.graph()?).query(word1, word2))
    }

    /// Insert random bridge words into `text`
    pub fn expand_text<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<String> {
        let expander = TextExpander::with_tokenizer(self.graph()?, self.tokenizer.clone());
        Ok(expander.expand(text, rng))
    }

    /// All shortest paths between two words
    pub fn shortest_paths(
        &self,
        source: &str,
        target: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<WordPath>> {
        ShortestPathEngine::new(self.graph()?).paths_to(source, target, cancel)
    }

    /// Shortest paths from one word to every reachable word
    pub fn all_shortest_paths(
        &self,
        source: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<TargetPaths>> {
        ShortestPathEngine::new(self.graph()?).paths_to_all(source, cancel)
    }

    /// PageRank with the configured damping, or `damping` when given
    pub fn page_rank(&self, damping: Option<f64>) -> Result<PageRankResult> {
        let graph = self.graph()?;
        let mut engine = StandardPageRank::from_config(&self.config);
        if let Some(d) = damping {
            engine = engine.with_damping(d);
        }
        engine.run(graph)
    }

    /// A random walk from a random start node
    pub fn random_walk<R: Rng>(&self, rng: R, cancel: &CancellationToken) -> Result<WalkTrace> {
        RandomWalker::new(rng).walk(self.graph()?, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_queries_before_build_fail() {
        let session = WordGraphSession::new();
        let cancel = CancellationToken::new();

        assert_eq!(session.graph().unwrap_err(), WordGraphError::GraphNotReady);
        assert!(session.query_bridge_words("a", "b").is_err());
        assert!(session.shortest_paths("a", "b", &cancel).is_err());
        assert!(session.page_rank(None).is_err());
        assert_eq!(
            session
                .random_walk(ChaCha8Rng::seed_from_u64(1), &cancel)
                .unwrap_err(),
            WordGraphError::GraphNotReady
        );
    }

    #[test]
    fn test_empty_text_is_not_ready() {
        let mut session = WordGraphSession::new();
        session.build_from_text("123 ... !!!");
        assert_eq!(session.graph().unwrap_err(), WordGraphError::GraphNotReady);
    }

    #[test]
    fn test_rebuild_replaces_graph() {
        let mut session = WordGraphSession::new();
        session.build_from_text("alpha beta gamma");
        assert_eq!(session.graph().unwrap().num_nodes(), 3);

        session.build_from_text("delta epsilon");
        let graph = session.graph().unwrap();
        assert_eq!(graph.num_nodes(), 2);
        assert!(!graph.contains("alpha"));
    }

    #[test]
    fn test_session_queries() {
        let mut session = WordGraphSession::new();
        session.build_from_text("To explore strange new worlds, to seek out new life");

        let outcome = session.query_bridge_words("explore", "new").unwrap();
        assert_eq!(outcome.bridges(), vec!["strange"]);

        let paths = session
            .shortest_paths("to", "life", &CancellationToken::new())
            .unwrap();
        let mut lines: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        lines.sort();
        assert_eq!(
            lines,
            vec![
                "to -> explore -> strange -> new -> life",
                "to -> seek -> out -> new -> life",
            ]
        );
        assert!(paths.iter().all(|p| p.cost == 4));

        let pr = session.page_rank(None).unwrap();
        assert!((pr.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_page_rank_damping_override_validated() {
        let mut session = WordGraphSession::new();
        session.build_from_text("a b c");
        assert!(matches!(
            session.page_rank(Some(3.0)).unwrap_err(),
            WordGraphError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_with_invalid_config() {
        let config = WordGraphConfig::default().with_max_iterations(0);
        assert!(WordGraphSession::with_config(config).is_err());
    }

    #[test]
    fn test_build_from_missing_file() {
        let mut session = WordGraphSession::new();
        let err = session.build_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, WordGraphError::Io { .. }));
    }
}
