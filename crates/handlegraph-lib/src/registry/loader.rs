//! Single-pass classification of registry elements
//!
//! Three kinds of element are kept: handle type declarations, creation
//! commands, and creation-info structs. Names are not cross-checked here;
//! resolving one catalog against another is left to the graph builder.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, trace};

use super::RegistryError;
use super::declaration::{
    AggregateType, DeclarationError, NamedField, NamedParameter, Operation,
};
use super::element::Element;
use super::model::{HandleCatalog, RegistryModel};

/// Default filter values for the Vulkan registry
pub mod defaults {
    pub const VENDOR_SUFFIXES: &[&str] = &["EXT", "NV", "NVX", "INTEL"];
    pub const OPERATION_PREFIXES: &[&str] = &["vkCreate", "vkAllocate"];
    pub const OPERATION_EXCEPTIONS: &[&str] = &["vkGetDeviceQueue"];
    pub const AGGREGATE_MARKER: &str = "CreateInfo";
}

/// Names that decide which declarations take part in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Handles whose name ends with one of these are left out of the catalog
    pub vendor_suffixes: Vec<String>,
    /// Commands are retained when their name starts with one of these
    pub operation_prefixes: Vec<String>,
    /// Commands retained by exact name regardless of prefix
    pub operation_exceptions: Vec<String>,
    /// Structs are creation info when their name contains this
    pub aggregate_marker: String,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            vendor_suffixes: owned(defaults::VENDOR_SUFFIXES),
            operation_prefixes: owned(defaults::OPERATION_PREFIXES),
            operation_exceptions: owned(defaults::OPERATION_EXCEPTIONS),
            aggregate_marker: defaults::AGGREGATE_MARKER.to_string(),
        }
    }
}

impl FilterPolicy {
    /// Same policy with a different vendor suffix list
    pub fn with_vendor_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendor_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_vendor_handle(&self, name: &str) -> bool {
        self.vendor_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    pub fn retains_operation(&self, name: &str) -> bool {
        self.operation_prefixes
            .iter()
            .any(|p| name.starts_with(p.as_str()))
            || self.operation_exceptions.iter().any(|e| e == name)
    }

    pub fn is_creation_info(&self, name: &str) -> bool {
        name.contains(self.aggregate_marker.as_str())
    }
}

/// Builds a [`RegistryModel`] from registry elements
#[derive(Debug, Clone, Default)]
pub struct RegistryLoader {
    policy: FilterPolicy,
}

impl RegistryLoader {
    pub fn new(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    /// Read and classify a registry file
    pub fn load_path(&self, path: &Path) -> Result<RegistryModel, RegistryError> {
        debug!("Loading registry from: {}", path.display());

        let xml = std::fs::read_to_string(path).map_err(|e| RegistryError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_str(&xml)
    }

    /// Classify an in-memory registry document
    pub fn load_str(&self, xml: &str) -> Result<RegistryModel, RegistryError> {
        let root = Element::parse_document(xml)?;
        self.load_elements(root.descendants())
    }

    /// Classify every element of the stream, in one forward pass
    pub fn load_elements<'a, I>(&self, elements: I) -> Result<RegistryModel, RegistryError>
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let mut handles = HandleCatalog::new();
        let mut operations = BTreeMap::new();
        let mut aggregates = BTreeMap::new();

        for element in elements {
            match classify(element)? {
                Some(Classified::Handle(name)) => {
                    if self.policy.is_vendor_handle(name) {
                        trace!("Skipping vendor handle: {}", name);
                        continue;
                    }
                    handles.insert(name.to_string(), parent_list(element));
                }
                Some(Classified::Command(name)) => {
                    // Every command is validated, retained or not
                    let operation = parse_operation(name, element)?;
                    if self.policy.retains_operation(name) {
                        trace!("Retained operation: {}", operation.name);
                        operations.insert(operation.name.clone(), operation);
                    }
                }
                Some(Classified::Struct(name)) if self.policy.is_creation_info(name) => {
                    let aggregate = parse_aggregate(name, element)?;
                    aggregates.insert(aggregate.name.clone(), aggregate);
                }
                _ => {}
            }
        }

        debug!(
            handles = handles.len(),
            operations = operations.len(),
            aggregates = aggregates.len(),
            "Registry classified"
        );

        Ok(RegistryModel::new(handles, operations, aggregates))
    }
}

/// The element kinds the loader cares about, with their declared names
enum Classified<'a> {
    Handle(&'a str),
    Command(&'a str),
    Struct(&'a str),
}

fn is_type_of_category(element: &Element, category: &str) -> bool {
    element.tag == "type" && element.attribute("category") == Some(category)
}

fn classify(element: &Element) -> Result<Option<Classified<'_>>, RegistryError> {
    if is_type_of_category(element, "handle") {
        // Alias declarations carry no <name> child and are not handles of their own
        return Ok(element
            .child("name")
            .map(|n| Classified::Handle(n.text.trim())));
    }

    if element.tag == "command" {
        let Some(proto) = element.child("proto") else {
            return Ok(None);
        };
        let name = proto
            .child("name")
            .ok_or_else(|| RegistryError::MalformedDeclaration {
                owner: "<command>".to_string(),
                source: DeclarationError::MissingChild("name"),
            })?;
        return Ok(Some(Classified::Command(name.text.trim())));
    }

    if is_type_of_category(element, "struct") {
        return Ok(element
            .attribute("name")
            .map(|name| Classified::Struct(name.trim())));
    }

    Ok(None)
}

fn parent_list(element: &Element) -> Vec<String> {
    element
        .attribute("parent")
        .map(|parents| parents.split(',').map(|p| p.trim().to_string()).collect())
        .unwrap_or_default()
}

fn parse_operation(name: &str, element: &Element) -> Result<Operation, RegistryError> {
    let parameters = element
        .children_named("param")
        .map(NamedParameter::from_element)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| RegistryError::MalformedDeclaration {
            owner: name.to_string(),
            source,
        })?;

    Ok(Operation {
        name: name.to_string(),
        parameters,
    })
}

fn parse_aggregate(name: &str, element: &Element) -> Result<AggregateType, RegistryError> {
    let fields = element
        .children_named("member")
        .map(NamedField::from_element)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| RegistryError::MalformedDeclaration {
            owner: name.to_string(),
            source,
        })?;

    Ok(AggregateType {
        name: name.to_string(),
        fields,
    })
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
