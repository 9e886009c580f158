//! Minimal element tree over `quick-xml` pull events.
//!
//! The registry document mixes markup and text inside declarations
//! (`const <type>char</type>* <name>pName</name>`), so the tree keeps text
//! nodes in document order next to child elements.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::errors::RegistryError;

/// A node inside an element: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its attributes and mixed content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Look up an attribute value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a required attribute value.
    pub fn require_attr(&self, key: &str) -> Result<&str, RegistryError> {
        self.attr(key).ok_or_else(|| RegistryError::MissingAttribute {
            element: self.name.clone(),
            attribute: key.to_string(),
        })
    }

    /// Iterate over child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Iterate over child elements with the given tag name.
    pub fn elements_named<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a Element> + 'n
    where
        'a: 'n,
    {
        self.elements().filter(move |e| e.name == name)
    }

    /// First child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// First child element with the given tag name, or a structural error.
    pub fn require_child(&self, name: &str) -> Result<&Element, RegistryError> {
        self.child(name).ok_or_else(|| RegistryError::MissingElement {
            parent: self.name.clone(),
            child: name.to_string(),
        })
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Trimmed direct text content, or a structural error when empty.
    pub fn require_text(&self) -> Result<String, RegistryError> {
        let text = self.text();
        let text = text.trim();
        if text.is_empty() {
            return Err(RegistryError::MissingText {
                element: self.name.clone(),
            });
        }
        Ok(text.to_string())
    }
}

/// Parse a whole document and return its root element.
pub fn parse_document(content: &str) -> Result<Element, RegistryError> {
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| RegistryError::Xml {
            position,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => stack.push(open_element(&start, position)?),
            Event::Empty(start) => {
                let element = open_element(&start, position)?;
                close_element(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                // quick-xml verifies tag balance, so an End always has a Start.
                if let Some(element) = stack.pop() {
                    close_element(element, &mut stack, &mut root);
                }
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    let text = text.unescape().map_err(|e| RegistryError::Xml {
                        position,
                        message: e.to_string(),
                    })?;
                    push_text(parent, &text);
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    push_text(parent, &String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(RegistryError::Xml {
            position: reader.buffer_position() as u64,
            message: format!("unclosed element `{}`", stack[stack.len() - 1].name),
        });
    }

    root.ok_or(RegistryError::EmptyDocument)
}

fn open_element(start: &BytesStart<'_>, position: u64) -> Result<Element, RegistryError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| RegistryError::Xml {
            position,
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| RegistryError::Xml {
            position,
            message: e.to_string(),
        })?;
        attributes.push((key, value.into_owned()));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn close_element(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

fn push_text(parent: &mut Element, text: &str) {
    // Adjacent runs (text split by a comment) merge into one node.
    if let Some(Node::Text(last)) = parent.children.last_mut() {
        last.push_str(text);
    } else {
        parent.children.push(Node::Text(text.to_string()));
    }
}
