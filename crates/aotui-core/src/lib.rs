//! Core types for AOTUI (Agent-Oriented TUI) markup.
//!
//! Provides the ordered attribute model ([`attrs::Attributes`]), the element tree and
//! its [`node::TreeBuilder`] primitive, the markup writer, and configuration loading.

pub mod attrs;
pub mod config;
pub mod markup;
pub mod node;

pub use attrs::{AttrValue, Attributes};
pub use node::{Element, ElementBuilder, Node, TreeBuilder};
