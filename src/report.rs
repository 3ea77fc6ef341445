//! Human-readable rendering of query results

use crate::errors::{UnknownWords, WordGraphError};
use crate::pagerank::RankedWord;
use crate::paths::{TargetPaths, WordPath};
use std::fmt::Write as _;

/// Minimum width of the word column in PageRank tables
const WORD_COLUMN_WIDTH: usize = 5;

/// Paths from `source` to `target`, one per line, or a "no path" sentence
pub fn render_paths(source: &str, target: &str, paths: &[WordPath]) -> String {
    let Some(first) = paths.first() else {
        return format!("No path from {} to {}.\n", source, target);
    };

    let mut out = format!(
        "Shortest path(s) from {} to {} (total weight {}):\n",
        source, target, first.cost
    );
    for path in paths {
        let _ = writeln!(out, "{}", path);
    }
    out
}

/// Every reachable target of `source` with its shortest paths
pub fn render_all_paths(source: &str, all: &[TargetPaths]) -> String {
    if all.is_empty() {
        return format!("No word is reachable from {}.\n", source);
    }

    let mut out = format!("Shortest paths from {}:\n", source);
    for target in all {
        let _ = writeln!(out, "\nTo {} (total weight {}):", target.target, target.cost);
        for path in &target.paths {
            let _ = writeln!(out, "{}", path);
        }
    }
    out
}

/// Message for a query that referenced words missing from the graph
pub fn render_unknown(which: &UnknownWords) -> String {
    match which {
        UnknownWords::First { word } => format!("No \"{}\" in the graph!", word),
        UnknownWords::Second { word } => format!("No \"{}\" in the graph!", word),
        UnknownWords::Both { first, second } => {
            format!("No \"{}\" or \"{}\" in the graph!", first, second)
        }
    }
}

/// Render an error for the terminal, with the unknown-word case spelled out
pub fn render_error(err: &WordGraphError) -> String {
    match err {
        WordGraphError::UnknownWord(which) => render_unknown(which),
        other => other.to_string(),
    }
}

/// `word score` lines, highest score first
pub fn render_pagerank(ranked: &[RankedWord], precision: usize) -> String {
    let mut out = String::new();
    for row in ranked {
        let _ = writeln!(
            out,
            "{:<width$} {:.prec$}",
            row.word,
            row.score,
            width = WORD_COLUMN_WIDTH,
            prec = precision
        );
    }
    out
}
