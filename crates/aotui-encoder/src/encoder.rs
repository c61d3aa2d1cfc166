//! The five encoders: view, list, item, operation, param.
//!
//! Every encoder is a single call to the [`TreeBuilder`]. Attribute order is
//! part of the output contract: vocabulary attributes first, then caller
//! extras. An extra with the same name as a vocabulary attribute replaces its
//! value but keeps its position.

use crate::canonical::{self, DEFAULT_MAX_DEPTH};
use crate::error::SerializationError;
use crate::props::{ItemProps, ListProps, OperationProps, ParamProps, ViewProps};
use crate::vocab;
use aotui_core::attrs::Attributes;
use aotui_core::config::AotuiConfig;
use aotui_core::node::{ElementBuilder, Node, TreeBuilder};
use serde::Serialize;

/// Defaults applied by a [`SemanticEncoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSettings {
    /// Tag for lists without a `render_as` override.
    pub collection_tag: String,
    /// Tag for operations without a `render_as` override.
    pub operation_tag: String,
    /// Nesting limit for item payloads.
    pub max_depth: usize,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            collection_tag: vocab::DEFAULT_COLLECTION_TAG.to_string(),
            operation_tag: vocab::DEFAULT_OPERATION_TAG.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&AotuiConfig> for EncoderSettings {
    fn from(config: &AotuiConfig) -> Self {
        Self {
            collection_tag: config.tags.collection.clone(),
            operation_tag: config.tags.operation.clone(),
            max_depth: config.encoding.max_depth,
        }
    }
}

/// Maps typed props onto the AOTUI vocabulary through a tree builder.
///
/// Stateless apart from its settings: identical inputs always produce
/// identical nodes, and a shared encoder can be used from many threads.
#[derive(Debug, Clone, Default)]
pub struct SemanticEncoder<B = ElementBuilder> {
    builder: B,
    settings: EncoderSettings,
}

impl SemanticEncoder<ElementBuilder> {
    /// Encoder building in-memory [`Node`] trees with default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: TreeBuilder> SemanticEncoder<B> {
    pub fn with_builder(builder: B) -> Self {
        Self {
            builder,
            settings: EncoderSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EncoderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Encode a named region: `<div view="name" …extras>children</div>`.
    pub fn view(&self, props: ViewProps, children: B::Children) -> B::Node {
        let mut attrs = Attributes::new().with(vocab::VIEW, props.name);
        attrs.extend(props.attrs);

        tracing::trace!(tag = vocab::CONTAINER_TAG, "encoded view");
        self.builder.build(vocab::CONTAINER_TAG, None, attrs, children)
    }

    /// Encode a typed list: `<ul list="name" item-type="type" …extras>children</ul>`.
    pub fn list(&self, props: ListProps, children: B::Children) -> B::Node {
        let tag = pick_tag(props.render_as.as_deref(), &self.settings.collection_tag);
        let mut attrs = Attributes::new()
            .with(vocab::LIST, props.name)
            .with(vocab::ITEM_TYPE, props.item_type);
        attrs.extend(props.attrs);

        tracing::trace!(tag, "encoded list");
        self.builder.build(tag, None, attrs, children)
    }

    /// Encode a list entry: `<li data-value='{…}' …extras>children</li>`.
    ///
    /// `data-value` is present only when the props carry a payload. A payload
    /// that cannot be canonically serialized aborts the whole node.
    pub fn item<T: Serialize>(
        &self,
        props: ItemProps<T>,
        children: B::Children,
    ) -> Result<B::Node, SerializationError> {
        let mut attrs = Attributes::new();
        if let Some(data) = &props.data {
            let text = canonical::to_canonical_string_with_depth(data, self.settings.max_depth)
                .inspect_err(|e| tracing::debug!(error = %e, "item payload failed to serialize"))?;
            attrs.set(vocab::DATA_VALUE, text);
        }
        attrs.extend(props.attrs);

        tracing::trace!(tag = vocab::ITEM_TAG, key = ?props.key, "encoded item");
        Ok(self
            .builder
            .build(vocab::ITEM_TAG, props.key.as_deref(), attrs, children))
    }

    /// Encode an operation: `<button operation="name" …extras>children</button>`.
    pub fn operation(&self, props: OperationProps, children: B::Children) -> B::Node {
        let tag = pick_tag(props.render_as.as_deref(), &self.settings.operation_tag);
        let mut attrs = Attributes::new().with(vocab::OPERATION, props.name);
        attrs.extend(props.attrs);

        tracing::trace!(tag, "encoded operation");
        self.builder.build(tag, None, attrs, children)
    }

    /// Encode an operation parameter:
    /// `<param name="…" type="…" …extras required="true|false" default="…" />`.
    pub fn param(&self, props: ParamProps) -> B::Node {
        let mut attrs = Attributes::new()
            .with(vocab::NAME, props.name)
            .with(vocab::TYPE, props.param_type);
        attrs.extend(props.attrs);
        if let Some(required) = required_text(props.required) {
            attrs.set(vocab::REQUIRED, required);
        }
        if let Some(default) = props.default_value {
            attrs.set(vocab::DEFAULT, default);
        }

        tracing::trace!(tag = vocab::PARAM_TAG, "encoded param");
        self.builder
            .build(vocab::PARAM_TAG, None, attrs, Default::default())
    }
}

/// Override tag when present and non-empty, else the default.
fn pick_tag<'a>(render_as: Option<&'a str>, default: &'a str) -> &'a str {
    render_as.filter(|tag| !tag.is_empty()).unwrap_or(default)
}

/// Text form of the tri-state `required` flag.
fn required_text(required: Option<bool>) -> Option<&'static str> {
    required.map(|r| if r { "true" } else { "false" })
}

/// [`SemanticEncoder::view`] with default settings.
pub fn view(props: ViewProps, children: Vec<Node>) -> Node {
    SemanticEncoder::new().view(props, children)
}

/// [`SemanticEncoder::list`] with default settings.
pub fn list(props: ListProps, children: Vec<Node>) -> Node {
    SemanticEncoder::new().list(props, children)
}

/// [`SemanticEncoder::item`] with default settings.
pub fn item<T: Serialize>(
    props: ItemProps<T>,
    children: Vec<Node>,
) -> Result<Node, SerializationError> {
    SemanticEncoder::new().item(props, children)
}

/// [`SemanticEncoder::operation`] with default settings.
pub fn operation(props: OperationProps, children: Vec<Node>) -> Node {
    SemanticEncoder::new().operation(props, children)
}

/// [`SemanticEncoder::param`] with default settings.
pub fn param(props: ParamProps) -> Node {
    SemanticEncoder::new().param(props)
}
