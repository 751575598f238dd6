//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas dimensions.
///
/// Controls the pixel size of the paint and tracing canvases. Both panels
/// share the same dimensions so drawings can be moved between them.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Drawing tool defaults.
///
/// Controls the tool state when the application first opens. Users change
/// these at runtime through the toolbar.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default brush color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1 - 20)
    #[serde(default = "default_width")]
    pub default_width: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Tracing pad settings.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TracingConfig {
    /// Image shown behind the transparent tracing canvas.
    /// If unset or missing, the pad falls back to a plain white backdrop.
    #[serde(default)]
    pub background_path: Option<PathBuf>,
}

/// Export defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exports when no explicit path is given.
    /// Defaults to the current directory if unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// chrono strftime template for generated filenames (without extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: default_filename_template(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// A single entry in the video list.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VideoEntry {
    /// Title shown in the videos panel
    pub title: String,

    /// Path to the video file on disk
    pub path: PathBuf,
}

/// Videos panel settings.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MediaConfig {
    /// Videos offered in the videos panel, in display order
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
}

// ============================================================================
// Default value functions for serde
// ============================================================================

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> u32 {
    5
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_jpeg_quality() -> u8 {
    90
}
