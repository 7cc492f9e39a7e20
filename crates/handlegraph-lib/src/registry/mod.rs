//! # Registry Module
//!
//! Reads the API registry document and classifies the declarations that
//! matter for handle creation.
//!
//! ## Modules
//!
//! - [`element`] - Tagged element tree built from quick-xml events
//! - [`declaration`] - Typed parameters, struct members, commands, and structs
//! - [`loader`] - Single-pass classification into a [`RegistryModel`]
//! - [`model`] - The immutable catalogs shared by the graph builder

pub mod declaration;
pub mod element;
pub mod loader;
pub mod model;

pub use declaration::{
    AggregateType, DeclarationError, NamedField, NamedParameter, Operation, TypedDeclaration,
};
pub use element::Element;
pub use loader::{FilterPolicy, RegistryLoader};
pub use model::{HandleCatalog, RegistryModel};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort loading the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read registry: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("Malformed declaration in {owner}: {source}")]
    MalformedDeclaration {
        owner: String,
        source: DeclarationError,
    },
}
