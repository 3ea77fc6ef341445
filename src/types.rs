//! Core types for wordgraph
//!
//! Configuration shared by the session, the engines and the command line,
//! plus the separators used when rendering word sequences.

use crate::errors::{Result, WordGraphError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Separator between words of a path or walk trace
pub const PATH_SEPARATOR: &str = " -> ";

/// Default damping factor for PageRank
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default PageRank iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default PageRank convergence tolerance (total L1 change)
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-8;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for graph construction and analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordGraphConfig {
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when L1 delta < threshold)
    pub convergence_threshold: f64,
    /// Decimal places when printing PageRank scores
    pub score_precision: usize,
    /// Token count from which the builder counts pairs in parallel
    pub parallel_threshold: usize,
}

impl Default for WordGraphConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            score_precision: 6,
            parallel_threshold: 10_000,
        }
    }
}

impl WordGraphConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| WordGraphError::io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Parse a config from a JSON string and validate it
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;

        if self.max_iterations == 0 {
            return Err(WordGraphError::invalid_parameter(
                "max_iterations must be > 0",
            ));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(WordGraphError::invalid_parameter(format!(
                "convergence_threshold must be > 0, got {}",
                self.convergence_threshold
            )));
        }

        if self.score_precision > 17 {
            return Err(WordGraphError::invalid_parameter(
                "score_precision must be <= 17",
            ));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set score precision for reports
    pub fn with_score_precision(mut self, precision: usize) -> Self {
        self.score_precision = precision;
        self
    }

    /// Builder method: set the parallel build threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Reject damping factors outside `[0, 1)` (NaN included).
///
/// Out-of-range values are an error rather than being clamped.
pub fn validate_damping(damping: f64) -> Result<()> {
    if !(0.0..1.0).contains(&damping) {
        return Err(WordGraphError::invalid_parameter(format!(
            "damping must be in [0, 1), got {}",
            damping
        )));
    }
    Ok(())
}
