//! Video list panel.
//!
//! Holds the configured video entries and drives an external
//! [`MediaPlayer`]. Playback problems are never fatal: a missing file or a
//! player error produces a notice and the panel stays usable.

use crate::config::{MediaConfig, VideoEntry};
use crate::ui::{MediaPlayer, Notifier};

/// The videos panel.
pub struct VideoPanel {
    entries: Vec<VideoEntry>,
    playing: Option<usize>,
}

impl VideoPanel {
    pub fn new(media: &MediaConfig) -> Self {
        Self {
            entries: media.videos.clone(),
            playing: None,
        }
    }

    /// The configured videos, in display order.
    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    /// Index of the entry currently playing, if any.
    pub fn playing(&self) -> Option<usize> {
        self.playing
    }

    /// Starts playback of the entry at `index`, replacing any current one.
    ///
    /// Out-of-range indices, missing files, and player failures all emit a
    /// notice instead of an error.
    pub fn play(&mut self, index: usize, player: &mut dyn MediaPlayer, notifier: &mut dyn Notifier) {
        let Some(entry) = self.entries.get(index) else {
            log::warn!("No video at index {index}");
            return;
        };
        if !entry.path.exists() {
            log::warn!("Video file missing: {}", entry.path.display());
            notifier.notify(
                "Video unavailable",
                &format!("'{}' could not be found", entry.title),
            );
            return;
        }
        match player.play(&entry.path) {
            Ok(()) => {
                log::info!("Playing '{}'", entry.title);
                self.playing = Some(index);
            }
            Err(err) => {
                log::warn!("Playback of '{}' failed: {err}", entry.title);
                notifier.notify(
                    "Video unavailable",
                    &format!("'{}' could not be played", entry.title),
                );
            }
        }
    }

    /// Stops playback.
    pub fn stop(&mut self, player: &mut dyn MediaPlayer) {
        player.stop();
        self.playing = None;
    }
}
