//! Interfaces to the surrounding shell.
//!
//! The editing model never talks to a toolkit directly. File pickers,
//! user-facing notices, and video playback are behind these traits so the
//! panels can be driven from a real GUI, from the CLI, or from tests.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Source of file paths chosen by the user.
///
/// Implementations typically show a native save/open dialog. Returning
/// `None` means the user cancelled, which callers treat as a silent no-op.
pub trait FileDialog {
    /// Asks the user where to save a drawing.
    fn choose_save_target(&mut self) -> Option<PathBuf>;

    /// Asks the user for an image file to open onto the canvas.
    fn choose_open_target(&mut self) -> Option<PathBuf>;
}

/// Sink for short user-facing notices.
///
/// Notices are informational ("Saved to drawing.png") or gentle failure
/// reports ("That video is missing"). They never interrupt drawing.
pub trait Notifier {
    fn notify(&mut self, summary: &str, body: &str);
}

/// External video playback.
pub trait MediaPlayer {
    /// Starts playing the file at `path`, replacing any current playback.
    fn play(&mut self, path: &Path) -> Result<()>;

    /// Stops playback if something is playing.
    fn stop(&mut self);
}

/// [`Notifier`] that writes notices to the log.
///
/// Used by the CLI and as a fallback when no GUI notifier is wired up.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, summary: &str, body: &str) {
        if body.is_empty() {
            log::info!("{summary}");
        } else {
            log::info!("{summary}: {body}");
        }
    }
}
