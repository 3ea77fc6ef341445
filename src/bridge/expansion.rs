//! Text expansion by bridge insertion
//!
//! Between every consecutive pair of words in new text, one bridge word is
//! chosen uniformly at random (edge weights play no part) and spliced in.

use crate::bridge::BridgeWordResolver;
use crate::graph::csr::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use rand::Rng;

/// Inserts bridge words into new text
#[derive(Debug, Clone)]
pub struct TextExpander<'g> {
    resolver: BridgeWordResolver<'g>,
    tokenizer: Tokenizer,
}

impl<'g> TextExpander<'g> {
    /// Create an expander with the default tokenizer
    pub fn new(graph: &'g WordGraph) -> Self {
        Self::with_tokenizer(graph, Tokenizer::new())
    }

    /// Create an expander with a custom tokenizer
    pub fn with_tokenizer(graph: &'g WordGraph, tokenizer: Tokenizer) -> Self {
        Self {
            resolver: BridgeWordResolver::new(graph),
            tokenizer,
        }
    }

    /// Expand `text`, drawing bridge choices from `rng`
    ///
    /// Text that normalizes to fewer than two words is returned unchanged.
    pub fn expand<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let words = self.tokenizer.normalize(text);
        if words.len() < 2 {
            return text.to_string();
        }

        let mut expanded: Vec<&str> = Vec::with_capacity(words.len() * 2);
        for pair in words.windows(2) {
            expanded.push(&pair[0]);
            let bridges = self.resolver.bridge_words(&pair[0], &pair[1]);
            if !bridges.is_empty() {
                expanded.push(bridges[rng.gen_range(0..bridges.len())]);
            }
        }
        if let Some(last) = words.last() {
            expanded.push(last);
        }

        expanded.join(" ")
    }
}
