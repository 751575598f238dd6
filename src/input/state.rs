//! Stroke state machine: pointer events in, surface mutations out.

use crate::draw::Surface;

use super::events::PointerEvent;
use super::tool::{Tool, ToolState};

/// Current stroke state machine.
///
/// Tracks whether the user is idle or mid-gesture. State transitions occur
/// on pointer press and release; drags are self-loops while stroking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// Not drawing - waiting for a pointer press
    Idle,
    /// Pointer held down mid-gesture
    Stroking {
        /// Tool captured at press time, so toolbar changes mid-gesture
        /// cannot mix tool semantics within one stroke
        tool: Tool,
        /// Where the pointer was pressed (shape anchor for committed tools)
        start: (i32, i32),
        /// Most recent pointer position (polyline anchor for brush/eraser)
        last: (i32, i32),
    },
}

/// Translates pointer events into draw calls against a [`Surface`].
///
/// Owns the current [`ToolState`] and the in-progress stroke. All access is
/// single-threaded from the host's event dispatch; there are no suspension
/// points.
#[derive(Debug)]
pub struct InputState {
    /// Tool, color, and stroke width the next gesture will use
    pub tools: ToolState,
    /// Current stroke state machine
    pub state: StrokeState,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(ToolState::default())
    }
}

impl InputState {
    /// Creates an idle controller around the given tool state.
    pub fn new(tools: ToolState) -> Self {
        Self {
            tools,
            state: StrokeState::Idle,
        }
    }

    /// Dispatches one pointer event, mutating the surface as the active tool
    /// dictates.
    ///
    /// # Behavior
    /// - `Down`: records the press point. Incremental tools (brush/eraser)
    ///   immediately paint a zero-length segment so a single click leaves a
    ///   dot; committed tools draw nothing yet.
    /// - `Drag`: incremental tools paint from the previous anchor to the
    ///   current point and advance the anchor, producing a connected
    ///   polyline sampled at the host's event rate. Committed tools only
    ///   track the position.
    /// - `Up`: committed tools draw exactly one shape from the press point
    ///   to the release point; a release at the press point yields a
    ///   degenerate (zero-size) shape. The controller returns to idle.
    ///
    /// A `Drag` or `Up` arriving while idle is ignored; the host delivered
    /// events for a gesture that began outside the canvas.
    pub fn handle_event(&mut self, surface: &mut Surface, event: PointerEvent) {
        let (x, y) = event.position();
        match event {
            PointerEvent::Down { .. } => self.on_pointer_down(surface, x, y),
            PointerEvent::Drag { .. } => self.on_pointer_drag(surface, x, y),
            PointerEvent::Up { .. } => self.on_pointer_up(surface, x, y),
        }
    }

    fn on_pointer_down(&mut self, surface: &mut Surface, x: i32, y: i32) {
        if !matches!(self.state, StrokeState::Idle) {
            // A second press mid-gesture means we lost the matching release;
            // restart the gesture at the new point.
            log::debug!("Pointer press while stroking, restarting gesture");
        }
        let tool = self.tools.active_tool;
        if tool.is_incremental() {
            self.paint_segment(surface, tool, (x, y), (x, y));
        }
        self.state = StrokeState::Stroking {
            tool,
            start: (x, y),
            last: (x, y),
        };
    }

    fn on_pointer_drag(&mut self, surface: &mut Surface, x: i32, y: i32) {
        let StrokeState::Stroking { tool, start, last } = self.state else {
            return;
        };
        if tool.is_incremental() {
            self.paint_segment(surface, tool, last, (x, y));
        }
        self.state = StrokeState::Stroking {
            tool,
            start,
            last: (x, y),
        };
    }

    fn on_pointer_up(&mut self, surface: &mut Surface, x: i32, y: i32) {
        let StrokeState::Stroking { tool, start, .. } = self.state else {
            return;
        };
        let width = self.tools.stroke_width();
        match tool {
            // Incremental tools already painted during the drag
            Tool::Brush | Tool::Eraser => {}
            Tool::Rectangle => surface.rect_outline(start, (x, y), self.tools.color, width),
            Tool::Circle => surface.circle_outline(start, (x, y), self.tools.color, width),
            Tool::Line => surface.stroke_line(start, (x, y), self.tools.color, width),
        }
        self.state = StrokeState::Idle;
    }

    fn paint_segment(&mut self, surface: &mut Surface, tool: Tool, from: (i32, i32), to: (i32, i32)) {
        let width = self.tools.stroke_width();
        match tool {
            Tool::Eraser => surface.erase_line(from, to, width),
            _ => surface.stroke_line(from, to, self.tools.color, width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Background, RED};
    use crate::input::PointerEvent;

    fn white_surface() -> Surface {
        Surface::new(64, 64, Background::White)
    }

    fn press_drag_release(
        input: &mut InputState,
        surface: &mut Surface,
        points: &[(i32, i32)],
    ) {
        let (first, rest) = points.split_first().expect("at least one point");
        input.handle_event(surface, PointerEvent::Down { x: first.0, y: first.1 });
        for &(x, y) in rest {
            input.handle_event(surface, PointerEvent::Drag { x, y });
        }
        let last = points.last().unwrap();
        input.handle_event(surface, PointerEvent::Up { x: last.0, y: last.1 });
    }

    #[test]
    fn click_with_brush_leaves_a_dot() {
        let mut surface = white_surface();
        let mut input = InputState::default();
        press_drag_release(&mut input, &mut surface, &[(32, 32)]);

        assert_eq!(surface.pixel(32, 32).unwrap(), BLACK.to_rgba());
        assert_eq!(input.state, StrokeState::Idle);
    }

    #[test]
    fn drag_paints_a_connected_polyline() {
        let mut surface = white_surface();
        let mut input = InputState::default();
        press_drag_release(&mut input, &mut surface, &[(10, 10), (20, 10), (20, 20)]);

        // Both legs of the polyline are painted, including the corner
        assert_eq!(surface.pixel(15, 10).unwrap(), BLACK.to_rgba());
        assert_eq!(surface.pixel(20, 15).unwrap(), BLACK.to_rgba());
        assert_eq!(surface.pixel(20, 10).unwrap(), BLACK.to_rgba());
    }

    #[test]
    fn committed_tools_draw_nothing_until_release() {
        let mut surface = white_surface();
        let mut input = InputState::default();
        input.tools.active_tool = Tool::Rectangle;

        input.handle_event(&mut surface, PointerEvent::Down { x: 10, y: 10 });
        input.handle_event(&mut surface, PointerEvent::Drag { x: 40, y: 30 });
        assert!(
            surface.pixels().chunks_exact(4).all(|p| p == [255; 4]),
            "no pixels may change before release"
        );

        input.handle_event(&mut surface, PointerEvent::Up { x: 40, y: 30 });
        assert_eq!(surface.pixel(25, 10).unwrap(), BLACK.to_rgba());
    }

    #[test]
    fn line_tool_commits_press_to_release() {
        let mut surface = white_surface();
        let mut input = InputState::default();
        input.tools.active_tool = Tool::Line;
        // Wander around before releasing; only press and release points matter
        press_drag_release(
            &mut input,
            &mut surface,
            &[(10, 30), (50, 50), (5, 5), (40, 30)],
        );

        assert_eq!(surface.pixel(25, 30).unwrap(), BLACK.to_rgba());
        assert_eq!(surface.pixel(50, 50).unwrap(), [255; 4]);
    }

    #[test]
    fn release_at_press_point_draws_degenerate_shape() {
        let mut surface = white_surface();
        let mut input = InputState::default();
        input.tools.active_tool = Tool::Circle;
        press_drag_release(&mut input, &mut surface, &[(16, 16)]);

        assert_eq!(surface.pixel(16, 16).unwrap(), BLACK.to_rgba());
    }

    #[test]
    fn eraser_restores_background_along_path() {
        let mut surface = white_surface();
        let mut input = InputState::default();
        input.tools.color = RED;
        press_drag_release(&mut input, &mut surface, &[(10, 10), (30, 10)]);

        input.tools.active_tool = Tool::Eraser;
        input.tools.set_stroke_width(9);
        press_drag_release(&mut input, &mut surface, &[(10, 10), (30, 10)]);

        assert!(surface.pixels().chunks_exact(4).all(|p| p == [255; 4]));
    }

    #[test]
    fn stray_drag_and_release_are_ignored_when_idle() {
        let mut surface = white_surface();
        let mut input = InputState::default();
        input.handle_event(&mut surface, PointerEvent::Drag { x: 10, y: 10 });
        input.handle_event(&mut surface, PointerEvent::Up { x: 10, y: 10 });

        assert!(surface.pixels().chunks_exact(4).all(|p| p == [255; 4]));
        assert_eq!(input.state, StrokeState::Idle);
    }

    #[test]
    fn tool_is_captured_at_press_time() {
        let mut surface = white_surface();
        let mut input = InputState::default();
        input.tools.active_tool = Tool::Rectangle;

        input.handle_event(&mut surface, PointerEvent::Down { x: 10, y: 10 });
        // Toolbar switch mid-gesture must not turn the gesture into a brush
        input.tools.active_tool = Tool::Brush;
        input.handle_event(&mut surface, PointerEvent::Drag { x: 30, y: 30 });
        assert!(surface.pixels().chunks_exact(4).all(|p| p == [255; 4]));

        input.handle_event(&mut surface, PointerEvent::Up { x: 30, y: 30 });
        assert_eq!(surface.pixel(20, 10).unwrap(), BLACK.to_rgba());
    }
}
