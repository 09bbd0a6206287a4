use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub animation: AnimationConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
    /// Extra or replacement text resources, keyed by resource name.
    pub strings: HashMap<String, String>,
    /// Extra or replacement image glyphs, keyed by resource name.
    pub drawables: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 33).
    pub tick_rate_ms: u64,
    pub theme: ThemeName,
}

/// Entrance cascade tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    /// Delay between two consecutive rows starting to move (default: 40).
    pub stagger_ms: u64,
    /// Height of one row in terminal lines, also the base slide distance.
    pub row_height: u16,
    /// Spring stiffness of the row slide (default: 50, "very low").
    pub stiffness: f32,
    /// Spring damping ratio of the row slide (default: 0.75, "low bouncy").
    pub damping_ratio: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// TOML hero catalogue. The built-in roster is used when unset.
    pub heroes_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
    /// Log destination. Logging stays off when unset.
    pub file: Option<PathBuf>,
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl AnimationConfig {
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            theme: ThemeName::Dark,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stagger_ms: 40,
            row_height: 4,
            stiffness: 50.0,
            damping_ratio: 0.75,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
