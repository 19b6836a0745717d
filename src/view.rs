//! Renderer-agnostic view tree: elements, attributes, and text nodes.
//!
//! DESIGN
//! ======
//! Components in this crate describe their output as an explicit tree of
//! typed constructors rather than an inline template, so the same structure
//! can be handed to any host renderer (or serialized across a wasm/JS
//! boundary). The Leptos bindings in [`crate::components`] are one such
//! consumer; tests are another.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

/// A node in the view tree: either an element or a run of plain text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewNode {
    /// An element with a tag, attributes, and children.
    Element(Element),
    /// A plain text node.
    Text(String),
}

impl ViewNode {
    /// Concatenated text content of this node and all descendants,
    /// in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(el) => el.children.iter().map(Self::text_content).collect(),
        }
    }

    /// The element inside this node, if it is not a text node.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for ViewNode {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An element: tag name, attributes in insertion order, and children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name (e.g. `"figure"`, `"img"`).
    pub tag: String,
    /// Attribute name/value pairs, preserved in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<ViewNode>,
}

impl Element {
    /// Start a new element with the given tag and no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    /// Value of the first attribute with the given name, if present.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
