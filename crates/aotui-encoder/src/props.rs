//! Typed inputs for the five encoders.
//!
//! Each props struct carries its own fields plus an explicit `attrs` bag of
//! extra attributes, forwarded verbatim in insertion order.

use aotui_core::attrs::{AttrValue, Attributes};
use serde_json::Value;

/// A named region (`<div view="…">`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewProps {
    pub name: String,
    pub attrs: Attributes,
}

impl ViewProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

/// A named, typed list (`<ul list="…" item-type="…">`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProps {
    pub name: String,
    /// Free-form tag describing the kind of item in the list.
    pub item_type: String,
    /// Tag override; `None` or empty uses the configured default.
    pub render_as: Option<String>,
    pub attrs: Attributes,
}

impl ListProps {
    pub fn new(name: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_type: item_type.into(),
            render_as: None,
            attrs: Attributes::new(),
        }
    }

    pub fn render_as(mut self, tag: impl Into<String>) -> Self {
        self.render_as = Some(tag.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

/// One list entry, optionally carrying a data payload.
///
/// The identity `key` belongs to the tree builder and is passed to it
/// separately; it never enters `attrs`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProps<T = Value> {
    pub key: Option<String>,
    pub data: Option<T>,
    pub attrs: Attributes,
}

impl ItemProps<Value> {
    /// An item with no payload. Use [`ItemProps::data`] to attach one.
    pub fn new() -> Self {
        Self {
            key: None,
            data: None,
            attrs: Attributes::new(),
        }
    }
}

impl Default for ItemProps<Value> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemProps<T> {
    /// Attach a payload, changing the payload type.
    pub fn data<U>(self, data: U) -> ItemProps<U> {
        ItemProps {
            key: self.key,
            data: Some(data),
            attrs: self.attrs,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

/// A named operation exposed to the agent (`<button operation="…">`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationProps {
    pub name: String,
    /// Tag override; `None` or empty uses the configured default.
    pub render_as: Option<String>,
    pub attrs: Attributes,
}

impl OperationProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            render_as: None,
            attrs: Attributes::new(),
        }
    }

    pub fn render_as(mut self, tag: impl Into<String>) -> Self {
        self.render_as = Some(tag.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

/// One argument of an operation (`<param name="…" type="…" />`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamProps {
    pub name: String,
    /// Free-form type tag, e.g. `string`, `number`, `enum`.
    pub param_type: String,
    /// `None` emits no `required` attribute; `Some(false)` emits `required="false"`.
    pub required: Option<bool>,
    /// Written verbatim under the `default` attribute. Structured defaults
    /// must be stringified by the caller.
    pub default_value: Option<AttrValue>,
    pub attrs: Attributes,
}

impl ParamProps {
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            required: None,
            default_value: None,
            attrs: Attributes::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn default_value(mut self, value: impl Into<AttrValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }
}
