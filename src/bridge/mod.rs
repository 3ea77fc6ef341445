//! Bridge words
//!
//! A bridge word `b` connects `w1` to `w2` when both `w1 -> b` and
//! `b -> w2` are edges. Queries always produce a [`BridgeOutcome`]; unknown
//! words are outcomes, not errors, because the caller needs to tell them
//! apart from "known but unconnected".

pub mod expansion;

use crate::graph::csr::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use serde::Serialize;
use std::fmt;

/// Result of a bridge-word query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BridgeOutcome {
    /// Neither word is in the graph
    BothUnknown { word1: String, word2: String },
    /// The first word is not in the graph
    Word1Unknown { word1: String },
    /// The second word is not in the graph
    Word2Unknown { word2: String },
    /// Both words are known but nothing connects them
    NoBridges { word1: String, word2: String },
    /// Exactly one bridge word
    Single {
        word1: String,
        word2: String,
        bridge: String,
    },
    /// Several bridge words, in discovery order
    Multiple {
        word1: String,
        word2: String,
        bridges: Vec<String>,
    },
}

impl BridgeOutcome {
    /// The bridge words found (empty for every other outcome)
    pub fn bridges(&self) -> Vec<&str> {
        match self {
            Self::Single { bridge, .. } => vec![bridge.as_str()],
            Self::Multiple { bridges, .. } => bridges.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether one of the query words was missing from the graph
    pub fn is_unknown_word(&self) -> bool {
        matches!(
            self,
            Self::BothUnknown { .. } | Self::Word1Unknown { .. } | Self::Word2Unknown { .. }
        )
    }
}

impl fmt::Display for BridgeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothUnknown { .. } => write!(f, "No word1 or word2 in the graph!"),
            Self::Word1Unknown { .. } => write!(f, "No word1 in the graph!"),
            Self::Word2Unknown { .. } => write!(f, "No word2 in the graph!"),
            Self::NoBridges { word1, word2 } => {
                write!(f, "No bridge words from {} to {}!", word1, word2)
            }
            Self::Single {
                word1,
                word2,
                bridge,
            } => write!(
                f,
                "The bridge word from {} to {} is: {}.",
                word1, word2, bridge
            ),
            Self::Multiple {
                word1,
                word2,
                bridges,
            } => write!(
                f,
                "The bridge words from {} to {} are: {}.",
                word1,
                word2,
                bridges.join(", ")
            ),
        }
    }
}

/// Bridge-word queries over a built graph
#[derive(Debug, Clone, Copy)]
pub struct BridgeWordResolver<'g> {
    graph: &'g WordGraph,
}

impl<'g> BridgeWordResolver<'g> {
    /// Create a resolver over `graph`
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Classify the bridge words from `word1` to `word2`
    ///
    /// Query words are trimmed and lowercased first, so `The` finds `the`.
    pub fn query(&self, word1: &str, word2: &str) -> BridgeOutcome {
        let word1 = Tokenizer::normalize_word(word1);
        let word2 = Tokenizer::normalize_word(word2);

        let (id1, id2) = match (self.graph.node_id(&word1), self.graph.node_id(&word2)) {
            (None, None) => return BridgeOutcome::BothUnknown { word1, word2 },
            (None, Some(_)) => return BridgeOutcome::Word1Unknown { word1 },
            (Some(_), None) => return BridgeOutcome::Word2Unknown { word2 },
            (Some(a), Some(b)) => (a, b),
        };

        let mut bridges: Vec<String> = self
            .bridge_ids(id1, id2)
            .map(|b| self.graph.word(b).to_string())
            .collect();

        match bridges.len() {
            0 => BridgeOutcome::NoBridges { word1, word2 },
            1 => BridgeOutcome::Single {
                word1,
                word2,
                bridge: bridges.remove(0),
            },
            _ => BridgeOutcome::Multiple {
                word1,
                word2,
                bridges,
            },
        }
    }

    /// Bridge words between two already-normalized words
    ///
    /// Empty when either word is unknown.
    pub fn bridge_words(&self, word1: &str, word2: &str) -> Vec<&'g str> {
        match (self.graph.node_id(word1), self.graph.node_id(word2)) {
            (Some(a), Some(b)) => {
                let graph = self.graph;
                self.bridge_ids(a, b).map(|id| graph.word(id)).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Node IDs `b` with edges `from -> b` and `b -> to`, in neighbour order
    pub fn bridge_ids(&self, from: u32, to: u32) -> impl Iterator<Item = u32> + 'g {
        let graph = self.graph;
        graph
            .targets(from)
            .iter()
            .copied()
            .filter(move |&candidate| graph.edge_weight(candidate, to).is_some())
    }
}
