//! Input handling and tool state machine.
//!
//! This module translates host pointer events into drawing actions. It
//! maintains the current tool state (tool, color, stroke width) and the
//! two-state gesture machine (idle / stroking) described by the editing
//! model.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{InputState, StrokeState};
pub use tool::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, Tool, ToolState};
