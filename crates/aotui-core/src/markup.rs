//! Serialize an element tree to attribute-based markup text.
//!
//! Compact output by default: `<ul list="messages" item-type="message"><li>…</li></ul>`.
//! With an indent width, every element starts on its own line.

use crate::node::{Element, Node};

/// Elements rendered self-closing with no children.
const VOID_TAGS: &[&str] = &["param", "br", "hr", "input", "img", "meta", "link"];

/// Output formatting options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Spaces per nesting level; `None` renders everything on one line.
    pub indent: Option<usize>,
}

impl MarkupOptions {
    pub fn compact() -> Self {
        Self { indent: None }
    }

    pub fn indented(width: usize) -> Self {
        Self {
            indent: Some(width),
        }
    }
}

/// Render a node with compact formatting.
pub fn to_markup(node: &Node) -> String {
    render(node, MarkupOptions::compact())
}

/// Render a node with the given formatting options.
pub fn render(node: &Node, opts: MarkupOptions) -> String {
    let mut out = String::new();
    write_node(&mut out, node, opts, 0);
    if opts.indent.is_some() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn write_node(out: &mut String, node: &Node, opts: MarkupOptions, depth: usize) {
    match node {
        Node::Element(el) => write_element(out, el, opts, depth),
        Node::Text { text } => {
            pad(out, opts, depth);
            escape_into(out, text, false);
            if opts.indent.is_some() {
                out.push('\n');
            }
        }
    }
}

fn write_element(out: &mut String, el: &Element, opts: MarkupOptions, depth: usize) {
    pad(out, opts, depth);
    out.push('<');
    out.push_str(&el.tag);
    if let Some(key) = &el.key {
        write_attr(out, "key", key);
    }
    for (name, value) in el.attributes.iter() {
        write_attr(out, name, value);
    }

    if VOID_TAGS.contains(&el.tag.as_str()) && el.children.is_empty() {
        out.push_str(" />");
        if opts.indent.is_some() {
            out.push('\n');
        }
        return;
    }

    out.push('>');
    if !el.children.is_empty() {
        if opts.indent.is_some() {
            out.push('\n');
        }
        for child in &el.children {
            write_node(out, child, opts, depth + 1);
        }
        pad(out, opts, depth);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
    if opts.indent.is_some() {
        out.push('\n');
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value, true);
    out.push('"');
}

fn pad(out: &mut String, opts: MarkupOptions, depth: usize) {
    if let Some(width) = opts.indent {
        out.extend(std::iter::repeat_n(' ', width * depth));
    }
}

/// Escape markup-significant characters. Quotes only matter inside attribute values.
fn escape_into(out: &mut String, s: &str, in_attr: bool) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            '\'' if in_attr => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
