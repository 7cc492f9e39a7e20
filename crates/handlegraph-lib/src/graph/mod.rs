//! # Graph Module
//!
//! Derives and renders the handle creation-dependency graph.
//!
//! ## Modules
//!
//! - [`expander`] - Recursive flattening of declarations into handle references
//! - [`dependency_graph`] - Graph construction and read-only queries
//! - [`export`] - DOT and JSON rendering

pub mod dependency_graph;
pub mod expander;
pub mod export;

pub use dependency_graph::{DependencyEdge, DependencyGraph, DependencyKind, GraphError};
pub use expander::{Expansion, FlatDependency, expand};
pub use export::{ExportError, render, write_graph};
