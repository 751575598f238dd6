//! Generic pointer event types for host-toolkit independence.

/// A discrete pointer event at a canvas coordinate.
///
/// Host toolkits map their native mouse/touch callbacks to these variants
/// and feed them to [`InputState::handle_event`](super::InputState::handle_event).
/// Coordinates are in canvas pixels; out-of-bounds positions are legal and
/// clip at the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed at the given position
    Down { x: i32, y: i32 },
    /// Pointer moved while the primary button is held
    Drag { x: i32, y: i32 },
    /// Primary button released at the given position
    Up { x: i32, y: i32 },
}

impl PointerEvent {
    /// The position carried by the event.
    pub fn position(&self) -> (i32, i32) {
        match *self {
            PointerEvent::Down { x, y }
            | PointerEvent::Drag { x, y }
            | PointerEvent::Up { x, y } => (x, y),
        }
    }
}
