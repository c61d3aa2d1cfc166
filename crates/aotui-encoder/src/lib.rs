//! Semantic encoder for AOTUI markup.
//!
//! Maps five structured node kinds onto a fixed tag/attribute vocabulary that an
//! agent can scan for data and operations:
//!
//! | input | output |
//! |---|---|
//! | view (container) | `<div view="…">` |
//! | list (collection) | `<ul list="…" item-type="…">` |
//! | item | `<li data-value='{…}'>` |
//! | operation (action) | `<button operation="…">` |
//! | param | `<param name="…" type="…" required="true" default="…" />` |
//!
//! Only item payload serialization can fail ([`SerializationError`]).

pub mod canonical;
pub mod document;
pub mod encoder;
pub mod error;
pub mod props;
pub mod vocab;

pub use document::Component;
pub use encoder::{EncoderSettings, SemanticEncoder, item, list, operation, param, view};
pub use error::SerializationError;
pub use props::{ItemProps, ListProps, OperationProps, ParamProps, ViewProps};
