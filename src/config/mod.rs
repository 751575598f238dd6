//! Configuration file support for doodlepad.
//!
//! This module handles loading and validating user settings from the
//! configuration file at `~/.config/doodlepad/config.toml`. Settings include
//! canvas dimensions, drawing defaults, the tracing pad background, export
//! defaults, and the video list.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use types::{
    CanvasConfig, DrawingConfig, ExportConfig, MediaConfig, TracingConfig, VideoEntry,
};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use enums::ColorSpec;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
///
/// [drawing]
/// default_color = "black"
/// default_width = 5
///
/// [tracing]
/// background_path = "/usr/share/doodlepad/butterfly.png"
///
/// [export]
/// jpeg_quality = 90
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
///
/// [[media.videos]]
/// title = "Drawing a cat"
/// path = "/usr/share/doodlepad/videos/cat.mp4"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas dimensions shared by the paint and tracing panels
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults (color, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Tracing pad background image
    #[serde(default)]
    pub tracing: TracingConfig,

    /// Export defaults (directory, filename template, JPEG quality)
    #[serde(default)]
    pub export: ExportConfig,

    /// Videos panel content
    #[serde(default)]
    pub media: MediaConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged, so a bad config file never prevents startup.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 64 - 4096
    /// - `drawing.default_width`: 1 - 20
    /// - `export.jpeg_quality`: 1 - 100
    fn validate_and_clamp(&mut self) {
        // Canvas dimensions: 64 - 4096
        if !(64..=4096).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 64-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(64, 4096);
        }
        if !(64..=4096).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 64-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(64, 4096);
        }

        // Stroke width: 1 - 20
        if !(crate::input::MIN_STROKE_WIDTH..=crate::input::MAX_STROKE_WIDTH)
            .contains(&self.drawing.default_width)
        {
            log::warn!(
                "Invalid default_width {}, clamping to {}-{} range",
                self.drawing.default_width,
                crate::input::MIN_STROKE_WIDTH,
                crate::input::MAX_STROKE_WIDTH
            );
            self.drawing.default_width = self
                .drawing
                .default_width
                .clamp(crate::input::MIN_STROKE_WIDTH, crate::input::MAX_STROKE_WIDTH);
        }

        // JPEG quality: 1 - 100
        if !(1..=100).contains(&self.export.jpeg_quality) {
            log::warn!(
                "Invalid jpeg_quality {}, clamping to 1-100 range",
                self.export.jpeg_quality
            );
            self.export.jpeg_quality = self.export.jpeg_quality.clamp(1, 100);
        }

        // An empty filename template would export to a bare ".png"
        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, falling back to default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/doodlepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("doodlepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file is not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the user
    /// asked for this specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
