//! Catalogs produced by one pass over the registry

use std::collections::BTreeMap;

use super::declaration::{AggregateType, Operation};

/// Handle name to its declared static parents, in declaration order
pub type HandleCatalog = BTreeMap<String, Vec<String>>;

/// Handles, retained commands, and creation-info structs of one registry
///
/// Read-only once built; every later stage borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryModel {
    handles: HandleCatalog,
    operations: BTreeMap<String, Operation>,
    aggregates: BTreeMap<String, AggregateType>,
}

impl RegistryModel {
    pub fn new(
        handles: HandleCatalog,
        operations: BTreeMap<String, Operation>,
        aggregates: BTreeMap<String, AggregateType>,
    ) -> Self {
        Self {
            handles,
            operations,
            aggregates,
        }
    }

    pub fn handles(&self) -> &HandleCatalog {
        &self.handles
    }

    pub fn operations(&self) -> &BTreeMap<String, Operation> {
        &self.operations
    }

    pub fn aggregates(&self) -> &BTreeMap<String, AggregateType> {
        &self.aggregates
    }

    pub fn is_handle(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    pub fn aggregate(&self, name: &str) -> Option<&AggregateType> {
        self.aggregates.get(name)
    }

    pub fn parents_of(&self, handle: &str) -> Option<&[String]> {
        self.handles.get(handle).map(Vec::as_slice)
    }
}
