//! Content node model for Telegraph page bodies
//!
//! A page body is an ordered sequence of [`Node`]s. Each node is either a
//! run of text or a tagged element that carries attributes and further
//! child nodes, so arbitrarily deep documents can be built directly:
//!
//! ```
//! use telegraph_rs::{Element, Node};
//!
//! let body = vec![
//!     Element::new("p")
//!         .child("Read the ")
//!         .child(Element::new("a").attr("href", "https://example.com").child("docs"))
//!         .into(),
//!     Node::text("Plain trailing text"),
//! ];
//!
//! assert!(body[0].is_element());
//! assert_eq!(body[1].as_text(), Some("Plain trailing text"));
//! ```
//!
//! Tag names and attribute keys are not validated here; the service
//! rejects vocabulary it does not support.

use std::collections::BTreeMap;

/// A single node of a Telegraph document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Inline text
    Text(String),
    /// Tagged element with attributes and children
    Element(Element),
}

/// Tagged element node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name (e.g. "p", "a", "img")
    pub tag: String,
    /// Attribute name to value; encoded only when non-empty
    pub attrs: BTreeMap<String, String>,
    /// Child nodes in reading order; encoded only when non-empty
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same key
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child node
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several child nodes
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Look up an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Create an empty element node
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element(Element::new(tag))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Borrow the text of a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Borrow the element of an element node
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenate every text leaf under this node in reading order
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
