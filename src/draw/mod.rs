//! Raster surface, colors, and damage tracking.
//!
//! This module defines the core drawing types of the editing model:
//! - [`Color`]: RGBA color with predefined palette constants
//! - [`Surface`]: the fixed-size pixel buffer and its drawing primitives
//! - [`Background`]: the initial fill a surface resets and erases to
//! - [`DirtyTracker`]: dirty rectangles accumulated between repaints

pub mod color;
pub mod dirty;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use surface::{Background, Surface};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
