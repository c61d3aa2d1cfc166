//! Declarative component documents.
//!
//! A JSON tree of components, tagged by `kind`, that encodes to a [`Node`]
//! tree without writing Rust:
//!
//! ```json
//! {"kind": "view", "name": "Conversations", "children": [
//!   {"kind": "list", "name": "messages", "type": "message", "children": [
//!     {"kind": "item", "key": "msg_1", "data": {"id": 1, "text": "hi"}}
//!   ]},
//!   {"kind": "operation", "name": "send_message", "children": [
//!     {"kind": "param", "name": "content", "type": "string", "required": true}
//!   ]}
//! ]}
//! ```
//!
//! `attrs` objects keep their document order. An item with `"data": null`
//! carries no payload.

use crate::encoder::SemanticEncoder;
use crate::error::SerializationError;
use crate::props::{ItemProps, ListProps, OperationProps, ParamProps, ViewProps};
use aotui_core::attrs::{AttrValue, Attributes};
use aotui_core::node::{Node, TreeBuilder};
use serde::Deserialize;
use serde_json::Value;

/// One component of a declarative document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    View {
        name: String,
        #[serde(default)]
        attrs: Attributes,
        #[serde(default)]
        children: Vec<Component>,
    },
    List {
        name: String,
        #[serde(rename = "type")]
        item_type: String,
        #[serde(rename = "as", default)]
        render_as: Option<String>,
        #[serde(default)]
        attrs: Attributes,
        #[serde(default)]
        children: Vec<Component>,
    },
    Item {
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        data: Option<Value>,
        #[serde(default)]
        attrs: Attributes,
        #[serde(default)]
        children: Vec<Component>,
    },
    Operation {
        name: String,
        #[serde(rename = "as", default)]
        render_as: Option<String>,
        #[serde(default)]
        attrs: Attributes,
        #[serde(default)]
        children: Vec<Component>,
    },
    Param {
        name: String,
        #[serde(rename = "type")]
        param_type: String,
        #[serde(default)]
        required: Option<bool>,
        #[serde(default)]
        default: Option<AttrValue>,
        #[serde(default)]
        attrs: Attributes,
    },
    Text {
        text: String,
    },
}

impl Component {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode this component and its descendants.
    ///
    /// Fails on the first item whose payload cannot be serialized.
    pub fn encode<B>(&self, encoder: &SemanticEncoder<B>) -> Result<Node, SerializationError>
    where
        B: TreeBuilder<Children = Vec<Node>, Node = Node>,
    {
        let node = match self {
            Component::View {
                name,
                attrs,
                children,
            } => encoder.view(
                ViewProps::new(name).attrs(attrs.clone()),
                encode_all(children, encoder)?,
            ),
            Component::List {
                name,
                item_type,
                render_as,
                attrs,
                children,
            } => {
                let mut props = ListProps::new(name, item_type).attrs(attrs.clone());
                props.render_as.clone_from(render_as);
                encoder.list(props, encode_all(children, encoder)?)
            }
            Component::Item {
                key,
                data,
                attrs,
                children,
            } => {
                let props = ItemProps {
                    key: key.clone(),
                    data: data.as_ref(),
                    attrs: attrs.clone(),
                };
                encoder.item(props, encode_all(children, encoder)?)?
            }
            Component::Operation {
                name,
                render_as,
                attrs,
                children,
            } => {
                let mut props = OperationProps::new(name).attrs(attrs.clone());
                props.render_as.clone_from(render_as);
                encoder.operation(props, encode_all(children, encoder)?)
            }
            Component::Param {
                name,
                param_type,
                required,
                default,
                attrs,
            } => encoder.param(ParamProps {
                name: name.clone(),
                param_type: param_type.clone(),
                required: *required,
                default_value: default.clone(),
                attrs: attrs.clone(),
            }),
            Component::Text { text } => Node::text(text),
        };
        Ok(node)
    }
}

fn encode_all<B>(
    components: &[Component],
    encoder: &SemanticEncoder<B>,
) -> Result<Vec<Node>, SerializationError>
where
    B: TreeBuilder<Children = Vec<Node>, Node = Node>,
{
    components.iter().map(|c| c.encode(encoder)).collect()
}
