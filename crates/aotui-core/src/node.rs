//! Element tree and the build primitive that produces it.

use crate::attrs::Attributes;
use serde::Serialize;

/// The single construction primitive the encoders are written against.
///
/// Implementations receive a tag, the reserved identity key (if any), an ordered
/// attribute set, and children, and return one node. They must accept any tag
/// and attribute name without validation.
pub trait TreeBuilder {
    /// Child content handed through unchanged. `Default` is the empty value,
    /// used for childless nodes.
    type Children: Default;
    type Node;

    fn build(
        &self,
        tag: &str,
        key: Option<&str>,
        attributes: Attributes,
        children: Self::Children,
    ) -> Self::Node;
}

impl<B: TreeBuilder + ?Sized> TreeBuilder for &B {
    type Children = B::Children;
    type Node = B::Node;

    fn build(
        &self,
        tag: &str,
        key: Option<&str>,
        attributes: Attributes,
        children: Self::Children,
    ) -> Self::Node {
        (**self).build(tag, key, attributes, children)
    }
}

/// A node of the in-memory markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text { .. } => None,
        }
    }
}

/// An element: tag, optional identity key, ordered attributes, children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Value of an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }
}

/// Builds [`Node`] trees in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementBuilder;

impl TreeBuilder for ElementBuilder {
    type Children = Vec<Node>;
    type Node = Node;

    fn build(
        &self,
        tag: &str,
        key: Option<&str>,
        attributes: Attributes,
        children: Vec<Node>,
    ) -> Node {
        Node::Element(Element {
            tag: tag.to_string(),
            key: key.map(str::to_string),
            attributes,
            children,
        })
    }
}
