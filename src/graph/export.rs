//! Textual views of a graph: the adjacency listing and Graphviz DOT export

use crate::errors::{Result, WordGraphError};
use crate::graph::csr::WordGraph;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Graph name used in the DOT header
pub const DOT_GRAPH_NAME: &str = "WordGraph";

/// One line per edge: `source -> target (weight)`
pub fn adjacency_listing(graph: &WordGraph) -> String {
    let mut out = String::new();
    for (source, target, weight) in graph.edges() {
        let _ = writeln!(
            out,
            "{} -> {} ({})",
            graph.word(source),
            graph.word(target),
            weight
        );
    }
    out
}

/// Render the graph as a Graphviz digraph with weight labels
pub fn to_dot(graph: &WordGraph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph {} {{", DOT_GRAPH_NAME);
    for (source, target, weight) in graph.edges() {
        let _ = writeln!(
            out,
            "  \"{}\" -> \"{}\" [label=\"{}\"];",
            escape_dot(graph.word(source)),
            escape_dot(graph.word(target)),
            weight
        );
    }
    out.push_str("}\n");
    out
}

/// Write the DOT rendering to `path`
pub fn export_dot(graph: &WordGraph, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    atomic_write(path, &to_dot(graph))?;
    debug!(path = %path.display(), edges = graph.num_edges(), "exported DOT file");
    Ok(())
}

/// Write `content` to a sibling temp file, then rename it over `path`.
///
/// Readers see either the previous file or the complete new one.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| WordGraphError::io(format!("not a file path: {}", path.display())))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    if let Err(e) = fs::write(&temp_path, content) {
        // a partially written temp file must not outlive the failure
        let _ = fs::remove_file(&temp_path);
        return Err(WordGraphError::io(format!(
            "failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(WordGraphError::io(format!(
            "failed to rename temp file to {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn escape_dot(word: &str) -> String {
    word.replace('\\', "\\\\").replace('"', "\\\"")
}
