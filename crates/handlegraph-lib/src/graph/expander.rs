//! Flattening of declarations into the handles they reference
//!
//! Creation-info structs are walked recursively. Optionality only ever
//! accumulates on the way down: once a struct is reached through an optional
//! member, everything found below it is optional too.

use tracing::trace;

use crate::registry::{RegistryModel, TypedDeclaration};

/// A handle reached while flattening, with its cumulative optionality
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlatDependency {
    pub handle: String,
    pub optional: bool,
}

impl FlatDependency {
    pub fn new(handle: impl Into<String>, optional: bool) -> Self {
        Self {
            handle: handle.into(),
            optional,
        }
    }
}

/// Result of flattening one declaration list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Handles in the order they were found; repeats are kept
    pub dependencies: Vec<FlatDependency>,
    /// Deepest struct nesting reached, 0 when no struct was entered
    pub max_depth: usize,
}

/// Flatten the parameters of a command, starting at recursion level 0
pub fn expand<D: AsRef<TypedDeclaration>>(declarations: &[D], model: &RegistryModel) -> Expansion {
    expand_at(declarations, model, 0, false, &[])
}

fn expand_at<D: AsRef<TypedDeclaration>>(
    declarations: &[D],
    model: &RegistryModel,
    level: usize,
    parent_optional: bool,
    ancestors: &[&str],
) -> Expansion {
    let mut expansion = Expansion {
        dependencies: Vec::new(),
        max_depth: level,
    };

    for declaration in declarations {
        let declaration = declaration.as_ref();
        let base = declaration.base_type();
        let optional = declaration.is_optional() || parent_optional;

        if let Some(aggregate) = model.aggregate(base) {
            if ancestors.iter().any(|a| *a == base) {
                trace!("Not re-entering {} at level {}", base, level);
                continue;
            }
            let mut path = ancestors.to_vec();
            path.push(base);

            let nested = expand_at(&aggregate.fields, model, level + 1, optional, &path);
            expansion.dependencies.extend(nested.dependencies);
            expansion.max_depth = expansion.max_depth.max(nested.max_depth);
        } else if model.is_handle(base) && (level > 0 || !declaration.is_non_const_pointer()) {
            // At the top level a non-const pointer is the command's output, not an input
            expansion
                .dependencies
                .push(FlatDependency::new(base, optional));
        }
    }

    expansion
}

#[cfg(test)]
mod tests {
    include!("expander.test.rs");
}
