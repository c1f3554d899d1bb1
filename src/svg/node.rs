//! Element descriptors handed to the UI framework
//!
//! An [`ElementNode`] is a plain value: tag, attribute map, ordered children.
//! JavaScript receives it as `{ tag, attributes, children, key? }` where each
//! child is either another descriptor or a bare string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One rendered element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub children: Vec<NodeChild>,

    /// Positional key for framework reconciliation; meaningless otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A child of an [`ElementNode`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeChild {
    Element(ElementNode),
    Text(String),
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child element
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(NodeChild::Element(child));
        self
    }

    /// Builder-style text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(NodeChild::Text(text.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(|child| match child {
            NodeChild::Element(element) => Some(element),
            NodeChild::Text(_) => None,
        })
    }

    /// Pre-order walk over this element and every descendant element
    pub fn descendants(&self) -> Vec<&ElementNode> {
        let mut out = vec![self];
        for child in self.child_elements() {
            out.extend(child.descendants());
        }
        out
    }

    /// Concatenated text of all descendant text leaves
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                NodeChild::Text(text) => out.push_str(text),
                NodeChild::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }
}
