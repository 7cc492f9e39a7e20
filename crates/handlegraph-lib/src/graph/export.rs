//! Rendering the finished graph for humans and other tools
//!
//! DOT output has one node per handle, keyed by handle name, solid edges
//! for strong dependencies and dashed edges for weak ones.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::dependency_graph::{DependencyEdge, DependencyGraph};
use crate::primitives::GraphFormat;

/// Name given to the rendered graph
pub const GRAPH_NAME: &str = "Recursive Handle Dependencies";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize graph: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to write graph: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Serialize)]
struct GraphDocument<'a> {
    name: &'a str,
    deepest_recursion: usize,
    handles: &'a BTreeMap<String, BTreeSet<DependencyEdge>>,
}

/// Graphviz document with dashed weak edges and solid strong edges
///
/// Nodes and edges appear in sorted handle order, so renders of the same
/// registry are byte-identical.
pub fn to_dot(graph: &DependencyGraph) -> String {
    let mut dot = format!("digraph {} {{\n", quoted(GRAPH_NAME));
    for handle in graph.handles() {
        let id = quoted(handle);
        dot.push_str(&format!("    {id} [ label = {id} ]\n"));
    }
    for edge in graph.edges() {
        let style = if edge.is_weak() { "dashed" } else { "solid" };
        dot.push_str(&format!(
            "    {} -> {} [ style = {} ]\n",
            quoted(&edge.from),
            quoted(&edge.to),
            style
        ));
    }
    dot.push_str("}\n");
    dot
}

/// DOT quoted identifier
fn quoted(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// JSON document keyed by handle name
pub fn to_json(graph: &DependencyGraph) -> Result<String, ExportError> {
    let document = GraphDocument {
        name: GRAPH_NAME,
        deepest_recursion: graph.deepest_recursion(),
        handles: graph.as_map(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn render(graph: &DependencyGraph, format: GraphFormat) -> Result<String, ExportError> {
    match format {
        GraphFormat::Dot => Ok(to_dot(graph)),
        GraphFormat::Json => to_json(graph),
    }
}

/// Render `graph` and write it to `path`
pub fn write_graph(
    graph: &DependencyGraph,
    format: GraphFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let rendered = render(graph, format)?;
    std::fs::write(path, rendered).map_err(|e| ExportError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(
        path = %path.display(),
        format = ?format,
        handles = graph.handle_count(),
        edges = graph.edge_count(),
        "Graph written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("export.test.rs");
}
