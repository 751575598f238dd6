//! Utility functions for colors and gesture geometry.
//!
//! This module provides:
//! - Color-name mapping for the configuration system
//! - Normalization of two-corner drag gestures into shape bounds
//! - Point-to-segment distance used by the stroke rasterizer

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Arguments
/// * `name` - Color name string
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Gesture Geometry
// ============================================================================

/// Normalizes a two-corner drag gesture into a top-left anchored rectangle.
///
/// The user may drag in any direction; the returned bounds are always
/// anchored at the minimum corner with non-negative extents.
///
/// # Arguments
/// * `x1`, `y1` - Press corner
/// * `x2`, `y2` - Release corner
///
/// # Returns
/// Tuple `(x, y, w, h)` where `(x, y)` is the top-left corner and `w`/`h`
/// are the absolute extents of the gesture.
pub fn normalized_rect(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32, i32) {
    let x = x1.min(x2);
    let y = y1.min(y2);
    let w = (x2 - x1).abs();
    let h = (y2 - y1).abs();
    (x, y, w, h)
}

/// Computes circle bounds from a two-corner drag gesture.
///
/// The circle diameter is the *smaller* of the two gesture extents, anchored
/// at the normalized top-left corner. A wide, flat gesture therefore produces
/// a small circle rather than an ellipse, which keeps circles perfectly round
/// no matter how crooked the drag was.
///
/// # Returns
/// Tuple `(x, y, diameter)` with the top-left anchor and the circle diameter.
pub fn circle_bounds(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32) {
    let (x, y, w, h) = normalized_rect(x1, y1, x2, y2);
    (x, y, w.min(h))
}

/// Squared distance from a point to a line segment.
///
/// Degenerate segments (both endpoints equal) fall back to point distance,
/// which is what gives strokes their round caps: a zero-length segment paints
/// a disc.
///
/// # Arguments
/// * `px`, `py` - Query point
/// * `x1`, `y1` - Segment start
/// * `x2`, `y2` - Segment end
pub fn segment_distance_sq(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let cx = x1 + t * dx;
    let cy = y1 + t * dy;
    (px - cx) * (px - cx) + (py - cy) * (py - cy)
}

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
