//! Library side of the `aotui` binary: document loading and rendering.

use aotui_core::config::AotuiConfig;
use aotui_core::markup::{self, MarkupOptions};
use aotui_encoder::{Component, EncoderSettings, SemanticEncoder};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a document from a file, or from stdin when `path` is `None` or `-`.
pub fn read_document(path: Option<&Path>) -> Result<Component> {
    let (json, origin) = match path {
        Some(p) if p != Path::new("-") => {
            let json = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read document {}", p.display()))?;
            (json, p.display().to_string())
        }
        _ => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("failed to read document from stdin")?;
            (json, "<stdin>".to_string())
        }
    };
    tracing::debug!(origin = %origin, bytes = json.len(), "read document");
    Component::from_json(&json).with_context(|| format!("invalid document {}", origin))
}

/// Resolve output formatting: `--compact` beats `--indent`, which beats config.
pub fn markup_options(config: &AotuiConfig, indent: Option<usize>, compact: bool) -> MarkupOptions {
    if compact {
        return MarkupOptions::compact();
    }
    MarkupOptions {
        indent: indent.or(config.markup.indent),
    }
}

/// Encode a document with the configured settings and render it to markup.
pub fn render_document(
    doc: &Component,
    config: &AotuiConfig,
    opts: MarkupOptions,
) -> Result<String> {
    let encoder = SemanticEncoder::new().with_settings(EncoderSettings::from(config));
    let node = doc
        .encode(&encoder)
        .context("failed to encode document")?;
    Ok(markup::render(&node, opts))
}
