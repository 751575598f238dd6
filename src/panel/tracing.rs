//! Tracing pad: a transparent canvas laid over a reference picture.
//!
//! The child draws on a fully transparent surface while a background image
//! shows through from underneath. The background is read-only; erasing
//! restores transparency so the picture reappears instead of going white.

use crate::config::Config;
use crate::draw::{Background, Surface};
use crate::export::{self, ExportError, ExportFormat};
use crate::input::{InputState, PointerEvent, ToolState};
use crate::ui::{FileDialog, Notifier};
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::Path;

/// The tracing panel.
pub struct TracingPadPanel {
    surface: Surface,
    /// Stroke state machine and current tool settings
    pub input: InputState,
    background: Option<RgbaImage>,
    jpeg_quality: u8,
}

impl TracingPadPanel {
    /// Creates the panel, loading the configured background image once.
    ///
    /// A missing or unreadable background is not fatal: the user gets a
    /// notice and the pad degrades to freehand drawing on a plain backdrop.
    pub fn new(config: &Config, notifier: &mut dyn Notifier) -> Self {
        let tools = ToolState::new(
            crate::input::Tool::Brush,
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
        );
        let background = match &config.tracing.background_path {
            Some(path) => match load_background(path) {
                Ok(img) => Some(img),
                Err(err) => {
                    log::warn!("Tracing background {} unavailable: {err}", path.display());
                    notifier.notify(
                        "Tracing picture unavailable",
                        "You can still draw freely on the pad",
                    );
                    None
                }
            },
            None => None,
        };
        Self {
            surface: Surface::new(
                config.canvas.width,
                config.canvas.height,
                Background::Transparent,
            ),
            input: InputState::new(tools),
            background,
            jpeg_quality: config.export.jpeg_quality,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Routes one pointer event through the stroke controller.
    pub fn handle_event(&mut self, event: PointerEvent) {
        self.input.handle_event(&mut self.surface, event);
    }

    /// Resets the canvas to fully transparent, revealing the background.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Flattens what the user sees: background (scaled to the canvas, or a
    /// white backdrop if there is none) with the tracing layer on top.
    ///
    /// The background itself is never mutated; scaling happens here each
    /// time, on the stored original.
    pub fn render_composite(&self) -> Vec<u8> {
        self.composite_surface().pixels().to_vec()
    }

    /// Saves the pad via a user-chosen path.
    ///
    /// Exports what the child sees: the composite of background and tracing
    /// layer, not the transparent canvas alone. A cancelled dialog is a
    /// silent no-op; failures propagate with the target untouched.
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
        let composite = self.composite_surface();
        let written = export::save_canvas(&composite, &path, format, self.jpeg_quality)?;
        notifier.notify("Saved tracing", &written.display().to_string());
        Ok(())
    }

    fn composite_surface(&self) -> Surface {
        let (w, h) = (self.surface.width(), self.surface.height());
        let mut base = Surface::new(w, h, Background::White);
        if let Some(bg) = &self.background {
            if bg.dimensions() == (w, h) {
                base.composite_image(bg.as_raw(), w, h);
            } else {
                let scaled = image::imageops::resize(bg, w, h, FilterType::Triangle);
                base.composite_image(scaled.as_raw(), w, h);
            }
        }
        base.composite_image(self.surface.pixels(), w, h);
        base
    }
}

fn load_background(path: &Path) -> Result<RgbaImage, ExportError> {
    Ok(image::ImageReader::open(path)?.decode()?.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TracingConfig;
    use crate::input::Tool;
    use crate::ui::LogNotifier;

    struct CountingNotifier(usize);

    impl Notifier for CountingNotifier {
        fn notify(&mut self, _summary: &str, _body: &str) {
            self.0 += 1;
        }
    }

    fn small_config() -> Config {
        let mut config = Config::default();
        config.canvas.width = 64;
        config.canvas.height = 64;
        config
    }

    #[test]
    fn pad_starts_fully_transparent() {
        let p = TracingPadPanel::new(&small_config(), &mut LogNotifier);
        assert_eq!(p.surface().pixel(0, 0), Some([0, 0, 0, 0]));
        assert!(!p.has_background());
    }

    #[test]
    fn missing_background_degrades_with_a_notice() {
        let mut config = small_config();
        config.tracing = TracingConfig {
            background_path: Some("/nonexistent/butterfly.png".into()),
        };
        let mut notifier = CountingNotifier(0);
        let mut p = TracingPadPanel::new(&config, &mut notifier);
        assert_eq!(notifier.0, 1);
        assert!(!p.has_background());

        // Drawing still works
        p.handle_event(PointerEvent::Down { x: 5, y: 5 });
        p.handle_event(PointerEvent::Up { x: 5, y: 5 });
        assert_ne!(p.surface().pixel(5, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn erasing_reveals_the_background_again() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        image::RgbaImage::from_pixel(64, 64, image::Rgba([0, 128, 0, 255]))
            .save(&path)
            .unwrap();

        let mut config = small_config();
        config.tracing.background_path = Some(path);
        let mut p = TracingPadPanel::new(&config, &mut LogNotifier);
        assert!(p.has_background());

        p.handle_event(PointerEvent::Down { x: 10, y: 10 });
        p.handle_event(PointerEvent::Up { x: 10, y: 10 });
        p.input.tools.active_tool = Tool::Eraser;
        p.handle_event(PointerEvent::Down { x: 10, y: 10 });
        p.handle_event(PointerEvent::Up { x: 10, y: 10 });

        // Erased pixels are transparent again, so the composite shows green
        assert_eq!(p.surface().pixel(10, 10), Some([0, 0, 0, 0]));
        let composite = p.render_composite();
        let idx = (10 * 64 + 10) * 4;
        assert_eq!(&composite[idx..idx + 4], &[0, 128, 0, 255]);
    }

    #[test]
    fn background_is_scaled_to_canvas_but_never_mutated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        image::RgbaImage::from_pixel(8, 8, image::Rgba([200, 100, 50, 255]))
            .save(&path)
            .unwrap();

        let mut config = small_config();
        config.tracing.background_path = Some(path);
        let p = TracingPadPanel::new(&config, &mut LogNotifier);

        let composite = p.render_composite();
        assert_eq!(composite.len(), 64 * 64 * 4);
        // A solid-color source stays that color after scaling
        let idx = (32 * 64 + 32) * 4;
        assert_eq!(&composite[idx..idx + 4], &[200, 100, 50, 255]);
        assert_eq!(
            p.background.as_ref().map(|b| b.dimensions()),
            Some((8, 8))
        );
    }

    #[test]
    fn save_exports_the_composite_not_the_bare_layer() {
        struct FixedDialog(Option<std::path::PathBuf>);
        impl FileDialog for FixedDialog {
            fn choose_save_target(&mut self) -> Option<std::path::PathBuf> {
                self.0.clone()
            }
            fn choose_open_target(&mut self) -> Option<std::path::PathBuf> {
                self.0.clone()
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let bg_path = dir.path().join("bg.png");
        image::RgbaImage::from_pixel(64, 64, image::Rgba([0, 128, 0, 255]))
            .save(&bg_path)
            .unwrap();

        let mut config = small_config();
        config.tracing.background_path = Some(bg_path);
        let mut p = TracingPadPanel::new(&config, &mut LogNotifier);
        p.handle_event(PointerEvent::Down { x: 10, y: 10 });
        p.handle_event(PointerEvent::Up { x: 10, y: 10 });

        let out = dir.path().join("traced");
        p.save_with(
            &mut FixedDialog(Some(out.clone())),
            &mut LogNotifier,
            ExportFormat::Png,
        )
        .unwrap();

        let decoded = image::open(dir.path().join("traced.png")).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (64, 64));
        // Untouched pixels show the background, stroked ones the ink
        assert_eq!(decoded.get_pixel(50, 50).0, [0, 128, 0, 255]);
        assert_ne!(decoded.get_pixel(10, 10).0, [0, 128, 0, 255]);

        // A cancelled dialog writes nothing
        p.save_with(&mut FixedDialog(None), &mut LogNotifier, ExportFormat::Png)
            .unwrap();
    }

    #[test]
    fn composite_without_background_is_white_under_strokes() {
        let mut p = TracingPadPanel::new(&small_config(), &mut LogNotifier);
        p.handle_event(PointerEvent::Down { x: 20, y: 20 });
        p.handle_event(PointerEvent::Up { x: 20, y: 20 });

        let composite = p.render_composite();
        let corner = (0 * 64 + 0) * 4;
        assert_eq!(&composite[corner..corner + 4], &[255, 255, 255, 255]);
        let stroked = (20 * 64 + 20) * 4;
        assert_ne!(&composite[stroked..stroked + 4], &[255, 255, 255, 255]);
    }
}
