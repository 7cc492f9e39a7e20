//! Tagged element tree built from the quick-xml event stream
//!
//! The registry is small enough to hold in memory, so the reader events are
//! folded into an owned tree once. Each node keeps the text run that precedes
//! its first child (`text`) and the text run that follows its own closing tag
//! inside the parent (`tail`), which is where the registry puts C qualifiers
//! such as `const` and `*`.

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use std::collections::BTreeMap;

use super::RegistryError;

/// One tagged node of the registry document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    /// Text between the opening tag and the first child
    pub text: String,
    pub children: Vec<Element>,
    /// Text between this element's closing tag and the next sibling
    pub tail: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Parse a whole document and return its root element
    pub fn parse_document(xml: &str) -> Result<Self, RegistryError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let position = reader.buffer_position() as u64;
            let xml_error = |message: String| RegistryError::Xml { position, message };

            match reader.read_event().map_err(|e| xml_error(e.to_string()))? {
                Event::Start(start) => {
                    stack.push(Self::from_start(&start).map_err(xml_error)?);
                }
                Event::Empty(start) => {
                    let element = Self::from_start(&start).map_err(xml_error)?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| xml_error("unbalanced closing tag".to_string()))?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::Text(text) => {
                    let decoded = text.decode().map_err(|e| xml_error(e.to_string()))?;
                    Self::push_text(&mut stack, &decoded);
                }
                Event::CData(data) => {
                    let decoded = data.decode().map_err(|e| xml_error(e.to_string()))?;
                    Self::push_text(&mut stack, &decoded);
                }
                Event::GeneralRef(reference) => {
                    if let Some(ch) = reference
                        .resolve_char_ref()
                        .map_err(|e| xml_error(e.to_string()))?
                    {
                        Self::push_text(&mut stack, ch.encode_utf8(&mut [0; 4]));
                    } else {
                        let name = reference.decode().map_err(|e| xml_error(e.to_string()))?;
                        let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                            xml_error(format!("unknown entity reference '&{};'", name))
                        })?;
                        Self::push_text(&mut stack, resolved);
                    }
                }
                Event::Eof => break,
                // Declarations, comments, and processing instructions carry no declarations
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(RegistryError::Xml {
                position: reader.buffer_position() as u64,
                message: format!("unclosed element <{}>", open.tag),
            });
        }

        root.ok_or_else(|| RegistryError::Xml {
            position: 0,
            message: "document has no root element".to_string(),
        })
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, String> {
        let mut element = Self::new(String::from_utf8_lossy(start.name().as_ref()));
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| e.to_string())?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value().map_err(|e| e.to_string())?;
            element.attributes.insert(key, value.into_owned());
        }
        Ok(element)
    }

    fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => {
                // Only the first top-level element counts as the document root
                if root.is_none() {
                    *root = Some(element);
                }
            }
        }
    }

    fn push_text(stack: &mut [Element], text: &str) {
        let Some(current) = stack.last_mut() else {
            return;
        };
        match current.children.last_mut() {
            Some(previous) => previous.tail.push_str(text),
            None => current.text.push_str(text),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First direct child with the given tag
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All direct children with the given tag, in document order
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// This element and every element below it, in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order walk over an element subtree
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    include!("element.test.rs");
}
