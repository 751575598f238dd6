//! Free-paint panel: an opaque white canvas with the full toolbox.

use crate::config::Config;
use crate::draw::{Background, Surface};
use crate::export::{self, ExportError, ExportFormat};
use crate::input::{InputState, PointerEvent, ToolState};
use crate::ui::{FileDialog, Notifier};

/// The main drawing panel.
///
/// Owns a white surface and the stroke controller. Tool selection lives in
/// [`InputState::tools`], which the host toolbar mutates directly.
pub struct PaintPanel {
    surface: Surface,
    /// Stroke state machine and current tool settings
    pub input: InputState,
    jpeg_quality: u8,
}

impl PaintPanel {
    /// Creates the panel with canvas size and tool defaults from config.
    pub fn new(config: &Config) -> Self {
        let tools = ToolState::new(
            crate::input::Tool::Brush,
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
        );
        Self {
            surface: Surface::new(config.canvas.width, config.canvas.height, Background::White),
            input: InputState::new(tools),
            jpeg_quality: config.export.jpeg_quality,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Routes one pointer event through the stroke controller.
    pub fn handle_event(&mut self, event: PointerEvent) {
        self.input.handle_event(&mut self.surface, event);
    }

    /// Resets the canvas to solid white. Tool settings are kept.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Saves the canvas via a user-chosen path.
    ///
    /// A cancelled dialog is a silent no-op. On success the notifier gets a
    /// "Saved drawing" notice with the final path; encode or I/O failures
    /// propagate with the canvas and target untouched.
    pub fn save_with(
        &mut self,
        dialog: &mut dyn FileDialog,
        notifier: &mut dyn Notifier,
        format: ExportFormat,
    ) -> Result<(), ExportError> {
        let Some(path) = dialog.choose_save_target() else {
            log::debug!("Save cancelled");
            return Ok(());
        };
        let written = export::save_canvas(&self.surface, &path, format, self.jpeg_quality)?;
        notifier.notify("Saved drawing", &written.display().to_string());
        Ok(())
    }

    /// Opens an image and composites it onto the canvas at the origin.
    ///
    /// The opened image is layered over the existing drawing (additive, no
    /// clear first), matching how kids collage pictures together. A cancelled
    /// dialog is a silent no-op.
    pub fn open_with(
        &mut self,
        dialog: &mut dyn FileDialog,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ExportError> {
        let Some(path) = dialog.choose_open_target() else {
            log::debug!("Open cancelled");
            return Ok(());
        };
        let (pixels, width, height) = export::open_image(&path)?;
        self.surface.composite_image(&pixels, width, height);
        notifier.notify("Opened image", &path.display().to_string());
        Ok(())
    }
}
