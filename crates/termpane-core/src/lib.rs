// ABOUTME: Shared types and configuration for termpane.
// ABOUTME: Defines border styles, split kinds and config file handling.

pub mod config;
pub mod split;
pub mod style;

pub use config::{Config, ConfigError, PaneConfig, SplitConfig, StyleConfig, StylePreset};
pub use split::{SplitKind, SplitUnit};
pub use style::{BorderGlyphs, BorderStyle};
