//! C-like declarations parsed from `<param>` and `<member>` elements

use std::fmt;
use thiserror::Error;

use super::element::Element;

const CONST_MARKER: &str = "const";
const POINTER_MARKER: char = '*';
/// Prototypes longer than this are printed one parameter per line
const PROTOTYPE_WRAP_WIDTH: usize = 120;

/// A `<param>` or `<member>` element lacked a required child
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("missing <{0}> child")]
    MissingChild(&'static str),
}

/// A type reference such as `const VkBufferCreateInfo*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDeclaration {
    base_type: String,
    prefix: String,
    suffix: String,
    optional: bool,
}

impl TypedDeclaration {
    pub fn new(
        base_type: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        optional: bool,
    ) -> Self {
        Self {
            base_type: base_type.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
            optional,
        }
    }

    /// Read the qualifiers, base type, and `optional` flag shared by params and members
    fn from_element(element: &Element) -> Result<Self, DeclarationError> {
        let ty = element
            .child("type")
            .ok_or(DeclarationError::MissingChild("type"))?;
        Ok(Self::new(
            ty.text.trim(),
            element.text.trim(),
            ty.tail.trim(),
            is_optional(element),
        ))
    }

    pub fn base_type(&self) -> &str {
        &self.base_type
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_const(&self) -> bool {
        self.prefix.contains(CONST_MARKER)
    }

    pub fn is_pointer(&self) -> bool {
        self.suffix.contains(POINTER_MARKER)
    }

    pub fn is_const_pointer(&self) -> bool {
        self.is_const() && self.is_pointer()
    }

    /// Creation commands write the new handle through a parameter of this shape
    pub fn is_non_const_pointer(&self) -> bool {
        self.is_pointer() && !self.is_const()
    }
}

impl AsRef<TypedDeclaration> for TypedDeclaration {
    fn as_ref(&self) -> &TypedDeclaration {
        self
    }
}

impl fmt::Display for TypedDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{} {}{}", self.prefix, self.base_type, self.suffix);
        f.write_str(text.trim())
    }
}

/// Only the literal `"true"` marks a declaration optional; the registry also
/// uses comma lists such as `"false,true"` that describe pointee optionality.
fn is_optional(element: &Element) -> bool {
    element.attribute("optional") == Some("true")
}

/// One formal parameter of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedParameter {
    declaration: TypedDeclaration,
    name: String,
    name_suffix: String,
}

impl NamedParameter {
    pub fn new(
        declaration: TypedDeclaration,
        name: impl Into<String>,
        name_suffix: impl Into<String>,
    ) -> Self {
        Self {
            declaration,
            name: name.into(),
            name_suffix: name_suffix.into(),
        }
    }

    pub fn from_element(element: &Element) -> Result<Self, DeclarationError> {
        let declaration = TypedDeclaration::from_element(element)?;
        let name = element
            .child("name")
            .ok_or(DeclarationError::MissingChild("name"))?;
        Ok(Self::new(declaration, name.text.trim(), name.tail.trim()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_suffix(&self) -> &str {
        &self.name_suffix
    }

    pub fn declaration(&self) -> &TypedDeclaration {
        &self.declaration
    }
}

impl AsRef<TypedDeclaration> for NamedParameter {
    fn as_ref(&self) -> &TypedDeclaration {
        &self.declaration
    }
}

impl fmt::Display for NamedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.declaration;
        let text = format!(
            "{} {}{} {}{}",
            d.prefix, d.base_type, d.suffix, self.name, self.name_suffix
        );
        f.write_str(text.trim())
    }
}

/// One member of a creation-info struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedField {
    declaration: TypedDeclaration,
    name: String,
    type_expression: String,
}

impl NamedField {
    pub fn new(declaration: TypedDeclaration, name: impl Into<String>) -> Self {
        let type_expression = declaration.to_string();
        Self {
            declaration,
            name: name.into(),
            type_expression,
        }
    }

    pub fn from_element(element: &Element) -> Result<Self, DeclarationError> {
        let declaration = TypedDeclaration::from_element(element)?;
        let name = element
            .child("name")
            .ok_or(DeclarationError::MissingChild("name"))?;

        // Literal concatenation of the untrimmed runs
        let ty = element.child("type").ok_or(DeclarationError::MissingChild("type"))?;
        let type_expression = format!("{}{}{}", element.text, ty.text, ty.tail)
            .trim()
            .to_string();

        Ok(Self {
            declaration,
            name: name.text.trim().to_string(),
            type_expression,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qualified type as written, e.g. `const VkDescriptorSetLayout*`
    pub fn type_expression(&self) -> &str {
        &self.type_expression
    }

    pub fn declaration(&self) -> &TypedDeclaration {
        &self.declaration
    }
}

impl AsRef<TypedDeclaration> for NamedField {
    fn as_ref(&self) -> &TypedDeclaration {
        &self.declaration
    }
}

impl fmt::Display for NamedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_expression, self.name)
    }
}

/// A retained creation or allocation command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub parameters: Vec<NamedParameter>,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        let prototype = format!("{}({});", self.name, params.join(", "));
        if prototype.len() > PROTOTYPE_WRAP_WIDTH {
            write!(f, "{}(\n    {}\n);", self.name, params.join(",\n    "))
        } else {
            f.write_str(&prototype)
        }
    }
}

/// A struct whose name marks it as creation info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateType {
    pub name: String,
    pub fields: Vec<NamedField>,
}

impl fmt::Display for AggregateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self.fields.iter().map(ToString::to_string).collect();
        write!(f, "struct {}{{\n    {}\n}}", self.name, fields.join(",\n    "))
    }
}

#[cfg(test)]
mod tests {
    include!("declaration.test.rs");
}
