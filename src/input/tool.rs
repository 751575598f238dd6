//! Drawing tool selection and tool parameters.

use crate::draw::{Color, color};

/// Minimum stroke width accepted from the toolbar slider.
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Maximum stroke width accepted from the toolbar slider.
pub const MAX_STROKE_WIDTH: u32 = 20;

/// Drawing tool selection.
///
/// The active tool determines how pointer events translate into canvas
/// mutation: incremental tools paint while the pointer drags, committed
/// tools draw a single shape when the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    Brush,
    /// Freehand erasing - restores the surface background along the path
    Eraser,
    /// Rectangle outline - committed from press corner to release corner
    Rectangle,
    /// Circle outline - committed, diameter bounded by the smaller extent
    Circle,
    /// Straight line - committed between press and release points
    Line,
}

impl Tool {
    /// Whether the tool paints during the drag (brush/eraser) as opposed to
    /// committing one shape on release (rectangle/circle/line).
    pub fn is_incremental(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }
}

/// Current tool configuration, mutated only by toolbar actions.
///
/// Plain last-write-wins state; the stroke width is the single validated
/// field and is clamped to the slider range on write.
#[derive(Debug, Clone)]
pub struct ToolState {
    /// Currently selected tool
    pub active_tool: Tool,
    /// Current drawing color
    pub color: Color,
    /// Stroke width in pixels, always within [`MIN_STROKE_WIDTH`]..=[`MAX_STROKE_WIDTH`]
    stroke_width: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active_tool: Tool::Brush,
            color: color::BLACK,
            stroke_width: 5,
        }
    }
}

impl ToolState {
    /// Creates tool state with the given defaults, clamping the width.
    pub fn new(tool: Tool, color: Color, stroke_width: u32) -> Self {
        let mut state = Self {
            active_tool: tool,
            color,
            stroke_width: 5,
        };
        state.set_stroke_width(stroke_width);
        state
    }

    /// Current stroke width in pixels.
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Sets the stroke width, clamping to the valid slider range.
    pub fn set_stroke_width(&mut self, width: u32) {
        if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&width) {
            log::warn!(
                "Stroke width {} out of range, clamping to {}-{}",
                width,
                MIN_STROKE_WIDTH,
                MAX_STROKE_WIDTH
            );
        }
        self.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }
}
