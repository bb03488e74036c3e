//! Shell configuration loaded from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tracker.toml";

/// Top-level shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// tracing filter used when RUST_LOG is unset
    pub log_level: String,
    pub display: DisplayConfig,
    pub random: RandomConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            display: DisplayConfig::default(),
            random: RandomConfig::default(),
        }
    }
}

/// Piece glyph style for the board diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    #[default]
    Ascii,
    Unicode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub glyphs: GlyphStyle,
    /// List candidate moves after every board redraw
    pub show_candidates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::Ascii,
            show_candidates: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub plies: u32,
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            plies: 200,
            seed: None,
        }
    }
}

impl ShellConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config")
    }

    /// Load `path`. A missing file yields the defaults; an unreadable or
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
