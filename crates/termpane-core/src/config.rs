// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves refresh settings and the declarative pane layout as TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{BorderGlyphs, BorderStyle, SplitKind, SplitUnit};

/// Named border presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
    Frame,
    Margin,
}

/// A border either picked by preset name or spelled out glyph by glyph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleConfig {
    Preset(StylePreset),
    Glyphs(BorderGlyphs),
}

impl StyleConfig {
    pub fn to_style(&self) -> BorderStyle {
        match self {
            StyleConfig::Preset(StylePreset::Frame) => BorderStyle::frame(),
            StyleConfig::Preset(StylePreset::Margin) => BorderStyle::margin(),
            StyleConfig::Glyphs(glyphs) => BorderStyle::new(glyphs.clone()),
        }
    }
}

/// Split of a configured pane into two children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub kind: SplitKind,
    /// Size of the pinned child; negative pins the first child, positive the second
    pub value: i32,
    #[serde(default)]
    pub unit: SplitUnit,
    pub first: Box<PaneConfig>,
    pub second: Box<PaneConfig>,
}

/// One node of the declarative layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    pub name: String,
    pub min_width: usize,
    pub min_height: usize,
    pub style: Option<StyleConfig>,
    /// Widget attached to this pane when it is a leaf
    pub widget: Option<String>,
    pub split: Option<SplitConfig>,
}

impl PaneConfig {
    pub fn leaf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            name: "main".to_string(),
            min_width: 0,
            min_height: 0,
            style: None,
            widget: None,
            split: None,
        }
    }
}

/// Two framed panes side by side: a clock on the left, a title over a clock on the right
fn default_layout() -> PaneConfig {
    let framed = |name: &str, widget: &str| PaneConfig {
        style: Some(StyleConfig::Preset(StylePreset::Frame)),
        widget: Some(widget.to_string()),
        ..PaneConfig::leaf(name)
    };

    PaneConfig {
        split: Some(SplitConfig {
            kind: SplitKind::Vertical,
            value: 50,
            unit: SplitUnit::Percent,
            first: Box::new(framed("clock", "clock")),
            second: Box::new(PaneConfig {
                split: Some(SplitConfig {
                    kind: SplitKind::Horizontal,
                    value: -3,
                    unit: SplitUnit::Char,
                    first: Box::new(framed("title", "label")),
                    second: Box::new(PaneConfig {
                        style: Some(StyleConfig::Preset(StylePreset::Margin)),
                        widget: Some("clock".to_string()),
                        ..PaneConfig::leaf("clock-margin")
                    }),
                }),
                ..PaneConfig::leaf("right")
            }),
        }),
        ..PaneConfig::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay between two refresh ticks
    pub refresh_interval_ms: u64,

    /// Draw on the alternate screen and restore the previous contents on exit
    pub alternate_screen: bool,

    /// Hide the terminal cursor while running
    pub hide_cursor: bool,

    /// Pane tree bound to the terminal surface
    pub layout: PaneConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 1000,
            alternate_screen: true,
            hide_cursor: true,
            layout: default_layout(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/termpane/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("termpane").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
