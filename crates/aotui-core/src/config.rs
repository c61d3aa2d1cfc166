//! Configuration for default tags, payload encoding, and markup output.
//!
//! Load order: `.aotui/config.toml` → environment variables → defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".aotui";
const CONFIG_FILE: &str = "config.toml";

/// Top-level AOTUI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AotuiConfig {
    pub tags: TagConfig,
    pub encoding: EncodingConfig,
    pub markup: MarkupConfig,
}

/// Default tags for the encoders whose tag callers may override.
///
/// Container, item and param tags are part of the wire vocabulary and are not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Tag for lists without an explicit `render_as`.
    pub collection: String,
    /// Tag for operations without an explicit `render_as`.
    pub operation: String,
}

/// Item payload serialization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Maximum nesting depth of an item payload. Deeper payloads, including
    /// self-referential ones, fail to serialize.
    pub max_depth: usize,
}

/// Markup writer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Spaces per nesting level. Unset renders compact single-line markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<usize>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            collection: "ul".to_string(),
            operation: "button".to_string(),
        }
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Get the path to the config file for a given project root.
pub fn config_file(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl AotuiConfig {
    /// Load config from `.aotui/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = config_file(project_root);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config {}", config_path.display()))?;
            Self::from_toml(&content)
                .with_context(|| format!("invalid config {}", config_path.display()))?
        } else {
            Self::default()
        };

        env_override("AOTUI_COLLECTION_TAG", &mut config.tags.collection);
        env_override("AOTUI_OPERATION_TAG", &mut config.tags.operation);
        env_override("AOTUI_MAX_DEPTH", &mut config.encoding.max_depth);
        if let Ok(v) = std::env::var("AOTUI_INDENT")
            && let Ok(n) = v.parse()
        {
            config.markup.indent = Some(n);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document without consulting the environment.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tags.collection.trim().is_empty() {
            anyhow::bail!("tags.collection must not be empty");
        }
        if self.tags.operation.trim().is_empty() {
            anyhow::bail!("tags.operation must not be empty");
        }
        if self.encoding.max_depth == 0 {
            anyhow::bail!("encoding.max_depth must be at least 1");
        }
        Ok(())
    }
}
