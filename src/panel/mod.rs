//! Application panels.
//!
//! The program is a tabbed frame with four panels: free painting, the
//! tracing pad, written lessons, and videos. [`App`] owns all four plus the
//! active-tab selection; the host toolkit renders whichever tab is active
//! and forwards pointer events to it.

pub mod lessons;
pub mod paint;
pub mod tracing;
pub mod video;

pub use lessons::{Lesson, LessonsPanel};
pub use paint::PaintPanel;
pub use tracing::TracingPadPanel;
pub use video::VideoPanel;

use crate::config::Config;
use crate::input::PointerEvent;
use crate::ui::Notifier;

/// Which panel the tab bar currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Paint,
    Tracing,
    Lessons,
    Videos,
}

/// The whole application model: four panels and the active tab.
pub struct App {
    pub paint: PaintPanel,
    pub tracing: TracingPadPanel,
    pub lessons: LessonsPanel,
    pub videos: VideoPanel,
    pub active: PanelTab,
}

impl App {
    /// Builds all panels from config. The notifier receives any startup
    /// notices (e.g. a missing tracing background).
    pub fn new(config: &Config, notifier: &mut dyn Notifier) -> Self {
        Self {
            paint: PaintPanel::new(config),
            tracing: TracingPadPanel::new(config, notifier),
            lessons: LessonsPanel,
            videos: VideoPanel::new(&config.media),
            active: PanelTab::default(),
        }
    }

    /// Routes a pointer event to the active panel.
    ///
    /// Only the drawing panels consume pointer input; on the lessons and
    /// videos tabs the event is dropped.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match self.active {
            PanelTab::Paint => self.paint.handle_event(event),
            PanelTab::Tracing => self.tracing.handle_event(event),
            PanelTab::Lessons | PanelTab::Videos => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::WHITE;
    use crate::ui::LogNotifier;

    #[test]
    fn app_starts_on_the_paint_tab() {
        let app = App::new(&Config::default(), &mut LogNotifier);
        assert_eq!(app.active, PanelTab::Paint);
        assert_eq!(app.videos.entries().len(), 0);
    }

    #[test]
    fn events_go_to_the_active_panel_only() {
        let mut app = App::new(&Config::default(), &mut LogNotifier);
        app.active = PanelTab::Tracing;
        app.handle_event(PointerEvent::Down { x: 30, y: 30 });
        app.handle_event(PointerEvent::Up { x: 30, y: 30 });

        assert_ne!(app.tracing.surface().pixel(30, 30), Some([0, 0, 0, 0]));
        assert_eq!(app.paint.surface().pixel(30, 30), Some(WHITE.to_rgba()));
    }

    #[test]
    fn non_drawing_tabs_drop_pointer_events() {
        let mut app = App::new(&Config::default(), &mut LogNotifier);
        app.active = PanelTab::Lessons;
        app.handle_event(PointerEvent::Down { x: 30, y: 30 });
        app.handle_event(PointerEvent::Up { x: 30, y: 30 });
        assert_eq!(app.paint.surface().pixel(30, 30), Some(WHITE.to_rgba()));
    }
}
