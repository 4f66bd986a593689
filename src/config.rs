//! Render config (config.json) loading.
//!
//! The config names the output file, the two text lines, the colour theme,
//! and the font/background/logo inputs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThumbError};
use crate::types::ThemeChoice;

/// Default config file, relative to the working directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: u32 = 50;

/// The config file as written on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub image_name: PathBuf,
    pub text: Vec<String>,
    pub color: String,
    pub font: PathBuf,
    pub background: PathBuf,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

/// A validated render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub output: PathBuf,
    pub line1: String,
    pub line2: String,
    pub color: ThemeChoice,
    pub font: PathBuf,
    pub font_size: u32,
    pub background: PathBuf,
    pub logo: Option<PathBuf>,
}

impl RenderConfig {
    /// Load and validate a config file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, everything else
    /// as JSON. Returns the validated config together with the raw record
    /// it came from.
    pub fn load(path: &Path) -> Result<(Self, RawConfig)> {
        let content = std::fs::read_to_string(path).map_err(|e| ThumbError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let raw = if is_yaml(path) {
            RawConfig::parse_yaml(&content)?
        } else {
            RawConfig::parse(&content)?
        };

        let config = Self::try_from(raw.clone())?;
        Ok((config, raw))
    }

    /// Parse and validate a JSON config string.
    pub fn parse(content: &str) -> Result<Self> {
        Self::try_from(RawConfig::parse(content)?)
    }
}

impl RawConfig {
    /// Parse a config from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ThumbError::MalformedConfig {
            message: e.to_string(),
            help: Some(
                "Expected keys: imageName, text, color, font, background".to_string(),
            ),
        })
    }

    /// Parse a config from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ThumbError::MalformedConfig {
            message: e.to_string(),
            help: Some(
                "Expected keys: imageName, text, color, font, background".to_string(),
            ),
        })
    }

    /// Pretty-printed JSON form of the config.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl TryFrom<RawConfig> for RenderConfig {
    type Error = ThumbError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let color = raw.color.parse::<ThemeChoice>()?;

        if raw.font_size == 0 {
            return Err(ThumbError::MalformedConfig {
                message: "fontSize must be greater than zero".to_string(),
                help: None,
            });
        }

        let mut lines = raw.text.into_iter();
        let (Some(line1), Some(line2)) = (lines.next(), lines.next()) else {
            return Err(ThumbError::MalformedConfig {
                message: "`text` must contain two lines".to_string(),
                help: Some(r#"e.g. "text": ["Leetcode", "1. Two Sum"]"#.to_string()),
            });
        };

        Ok(Self {
            output: raw.image_name,
            line1,
            line2,
            color,
            font: raw.font,
            font_size: raw.font_size,
            background: raw.background,
            logo: raw.logo,
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
