//! Handle creation-dependency graph
//!
//! Every handle starts with strong edges to its static parents. Each retained
//! creation command then adds edges from the handle(s) it writes to every
//! handle its parameters reference, directly or through creation-info structs.
//! Edges point from the dependent handle to the handle it needs.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

use super::expander::expand;
use crate::registry::RegistryModel;

/// Errors raised by graph queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Circular creation dependency involving {handle}")]
    CycleDetected { handle: String },

    #[error("Unknown handle: {handle}")]
    UnknownHandle { handle: String },
}

/// How firmly one handle depends on another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Always needed to create the dependent handle
    Strong,
    /// Only needed along an optional path
    Weak,
}

impl DependencyKind {
    pub fn from_optional(optional: bool) -> Self {
        if optional {
            DependencyKind::Weak
        } else {
            DependencyKind::Strong
        }
    }

    pub fn is_weak(&self) -> bool {
        matches!(self, DependencyKind::Weak)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Strong => f.write_str("strong"),
            DependencyKind::Weak => f.write_str("weak"),
        }
    }
}

/// `from` needs `to` to exist before it can be created
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    pub kind: DependencyKind,
}

impl DependencyEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: DependencyKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }

    pub fn is_weak(&self) -> bool {
        self.kind.is_weak()
    }
}

/// Creation dependencies of every cataloged handle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<String, BTreeSet<DependencyEdge>>,
    deepest_recursion: usize,
}

impl DependencyGraph {
    /// Derive the graph from a loaded registry
    pub fn build(model: &RegistryModel) -> Self {
        let mut edges: BTreeMap<String, BTreeSet<DependencyEdge>> = BTreeMap::new();

        for (handle, parents) in model.handles() {
            let seeded = parents
                .iter()
                .filter(|parent| {
                    let known = model.is_handle(parent);
                    if !known {
                        debug!("Dropping unknown parent {} of {}", parent, handle);
                    }
                    known
                })
                .map(|parent| DependencyEdge::new(handle, parent, DependencyKind::Strong))
                .collect();
            edges.insert(handle.clone(), seeded);
        }

        let mut deepest_recursion = 0;
        for operation in model.operations().values() {
            let expansion = expand(&operation.parameters, model);
            trace!(
                operation = %operation.name,
                depth = expansion.max_depth,
                "Deepest recursive handle dependency"
            );
            deepest_recursion = deepest_recursion.max(expansion.max_depth);

            let outputs = operation
                .parameters
                .iter()
                .map(|p| p.declaration())
                .filter(|d| d.is_non_const_pointer());

            for output in outputs {
                // Outputs missing from the catalog (vendor handles, non-handles) are skipped
                let Some(set) = edges.get_mut(output.base_type()) else {
                    continue;
                };
                for dependency in &expansion.dependencies {
                    set.insert(DependencyEdge::new(
                        output.base_type(),
                        &dependency.handle,
                        DependencyKind::from_optional(dependency.optional),
                    ));
                }
            }
        }

        debug!(deepest = deepest_recursion, "Deepest recursion of all operations");

        Self {
            edges,
            deepest_recursion,
        }
    }

    /// Handle names in sorted order
    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.edges.contains_key(handle)
    }

    /// Direct dependencies of a handle
    pub fn dependencies_of(&self, handle: &str) -> Option<&BTreeSet<DependencyEdge>> {
        self.edges.get(handle)
    }

    /// All edges, grouped by dependent handle
    pub fn edges(&self) -> impl Iterator<Item = &DependencyEdge> {
        self.edges.values().flatten()
    }

    pub fn as_map(&self) -> &BTreeMap<String, BTreeSet<DependencyEdge>> {
        &self.edges
    }

    pub fn handle_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Deepest struct nesting reached across all commands
    pub fn deepest_recursion(&self) -> usize {
        self.deepest_recursion
    }

    /// Every handle reachable from `handle`, strong or weak, in discovery order
    pub fn transitive_dependencies(&self, handle: &str) -> Result<Vec<String>, GraphError> {
        let start = self
            .edges
            .get(handle)
            .ok_or_else(|| GraphError::UnknownHandle {
                handle: handle.to_string(),
            })?;

        let mut visited: HashSet<&str> = HashSet::new();
        let mut result = Vec::new();
        self.collect_transitive(start, &mut visited, &mut result);
        Ok(result)
    }

    fn collect_transitive<'a>(
        &'a self,
        edges: &'a BTreeSet<DependencyEdge>,
        visited: &mut HashSet<&'a str>,
        result: &mut Vec<String>,
    ) {
        for edge in edges {
            if visited.insert(edge.to.as_str()) {
                result.push(edge.to.clone());
                if let Some(next) = self.edges.get(&edge.to) {
                    self.collect_transitive(next, visited, result);
                }
            }
        }
    }

    /// Petgraph view with one node per handle and one edge per dependency
    pub fn to_petgraph(&self) -> (DiGraph<String, DependencyKind>, HashMap<&str, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();

        for handle in self.edges.keys() {
            let idx = graph.add_node(handle.clone());
            node_map.insert(handle.as_str(), idx);
        }

        for edge in self.edges() {
            // Endpoints are always catalog keys, see `build`
            if let (Some(&from), Some(&to)) =
                (node_map.get(edge.from.as_str()), node_map.get(edge.to.as_str()))
            {
                graph.add_edge(from, to, edge.kind);
            }
        }

        (graph, node_map)
    }

    /// Handles ordered so that each one comes after everything it depends on
    ///
    /// Self-dependencies do not constrain the order and are ignored. Weak
    /// edges only count when `include_weak` is set.
    pub fn creation_order(&self, include_weak: bool) -> Result<Vec<String>, GraphError> {
        let (mut graph, _) = self.to_petgraph();
        graph.retain_edges(|g, e| {
            let Some((from, to)) = g.edge_endpoints(e) else {
                return false;
            };
            from != to && (include_weak || !g[e].is_weak())
        });

        let sorted = toposort(&graph, None).map_err(|cycle| GraphError::CycleDetected {
            handle: graph[cycle.node_id()].clone(),
        })?;

        // Edges run dependent -> dependency, so the reverse puts dependencies first
        Ok(sorted
            .into_iter()
            .rev()
            .map(|idx| graph[idx].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    include!("dependency_graph.test.rs");
}
