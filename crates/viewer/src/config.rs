//! Viewer configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub scatter: ScatterConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Config {
    /// Load configuration from `quadview.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new("quadview.toml");
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No quadview.toml found, creating default config");
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            scatter: ScatterConfig::default(),
            probe: ProbeConfig::default(),
        }
    }
}

/// Viewport and canvas settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewportConfig {
    /// Viewport width in world units.
    #[serde(default = "default_viewport_width")]
    pub width: i32,
    /// Viewport height in world units.
    #[serde(default = "default_viewport_height")]
    pub height: i32,
    /// Inset between the viewport edge and the index region.
    #[serde(default = "default_margin")]
    pub margin: i32,
    /// Terminal canvas width in characters.
    #[serde(default = "default_canvas_cols")]
    pub canvas_cols: usize,
    /// Terminal canvas height in characters.
    #[serde(default = "default_canvas_rows")]
    pub canvas_rows: usize,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
            margin: default_margin(),
            canvas_cols: default_canvas_cols(),
            canvas_rows: default_canvas_rows(),
        }
    }
}

fn default_viewport_width() -> i32 {
    1600
}
fn default_viewport_height() -> i32 {
    800
}
fn default_margin() -> i32 {
    5
}
fn default_canvas_cols() -> usize {
    100
}
fn default_canvas_rows() -> usize {
    40
}

/// Random item population settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScatterConfig {
    /// Items inserted per burst.
    #[serde(default = "default_item_count")]
    pub count: usize,
    /// Item width and height in world units.
    #[serde(default = "default_item_size")]
    pub item_size: i32,
    /// Horizontal extent item origins are drawn from.
    #[serde(default = "default_viewport_width")]
    pub extent_x: i32,
    /// Vertical extent item origins are drawn from.
    #[serde(default = "default_viewport_height")]
    pub extent_y: i32,
    /// RNG seed, for reproducible frames.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: default_item_count(),
            item_size: default_item_size(),
            extent_x: default_viewport_width(),
            extent_y: default_viewport_height(),
            seed: default_seed(),
        }
    }
}

fn default_item_count() -> usize {
    10_000
}
fn default_item_size() -> i32 {
    20
}
fn default_seed() -> u64 {
    1
}

/// Probe rectangle settings (the query area under the pointer).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Probe side length in world units, centered on the pointer.
    #[serde(default = "default_probe_size")]
    pub size: i32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            size: default_probe_size(),
        }
    }
}

fn default_probe_size() -> i32 {
    150
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: Config = toml::from_str("[probe]\nsize = 40\n").unwrap();

        assert_eq!(config.probe.size, 40);
        assert_eq!(config.viewport.width, 1600);
        assert_eq!(config.scatter.count, 10_000);
        assert_eq!(config.scatter.seed, 1);
    }
}
