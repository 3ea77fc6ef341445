//! Error types for wordgraph
//!
//! This module defines the error types used throughout the library.
//! "No bridges" and "no path" are valid empty results, and cancellation
//! always yields a partial result, so neither appears here.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordGraphError>;

/// Which query word(s) could not be found in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "missing", rename_all = "snake_case")]
pub enum UnknownWords {
    /// Only the first word is missing
    First { word: String },
    /// Only the second word is missing
    Second { word: String },
    /// Neither word is in the graph
    Both { first: String, second: String },
}

impl UnknownWords {
    /// Pair up two node lookups, or report which words were missing
    pub fn resolve_pair(
        first: &str,
        first_id: Option<u32>,
        second: &str,
        second_id: Option<u32>,
    ) -> std::result::Result<(u32, u32), Self> {
        match (first_id, second_id) {
            (Some(a), Some(b)) => Ok((a, b)),
            (None, Some(_)) => Err(Self::First {
                word: first.to_string(),
            }),
            (Some(_), None) => Err(Self::Second {
                word: second.to_string(),
            }),
            (None, None) => Err(Self::Both {
                first: first.to_string(),
                second: second.to_string(),
            }),
        }
    }
}

impl fmt::Display for UnknownWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First { word } => write!(f, "'{word}' is not in the graph"),
            Self::Second { word } => write!(f, "'{word}' is not in the graph"),
            Self::Both { first, second } => {
                write!(f, "neither '{first}' nor '{second}' is in the graph")
            }
        }
    }
}

/// Main error type for wordgraph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WordGraphError {
    /// A query was issued before a graph was built, or the graph is empty
    #[error("Graph not ready: build a graph from non-empty text first")]
    GraphNotReady,

    /// A query referenced a word absent from the node set
    #[error("Unknown word: {0}")]
    UnknownWord(UnknownWords),

    /// An operation that needs at least one node ran on an empty graph
    #[error("Empty graph: {message}")]
    EmptyGraph { message: String },

    /// A parameter or configuration value is out of range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Reading input or writing output failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl WordGraphError {
    /// Create an unknown word error
    pub fn unknown_word(which: UnknownWords) -> Self {
        Self::UnknownWord(which)
    }

    /// Create an empty graph error
    pub fn empty_graph(message: impl Into<String>) -> Self {
        Self::EmptyGraph {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error is about missing query words
    pub fn is_unknown_word(&self) -> bool {
        matches!(self, Self::UnknownWord(_))
    }
}

impl From<std::io::Error> for WordGraphError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_json::Error> for WordGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
