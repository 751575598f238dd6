//! Dirty region tracking for incremental repainting.
//!
//! Collects axis-aligned rectangles that need repainting between frames.
//! Every mutating surface operation marks the bounds it touched; the host
//! drains the accumulated regions when it repaints.

use crate::util::Rect;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds a dirty rectangle when present.
    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    /// Returns true if any damage has been recorded since the last drain.
    pub fn is_dirty(&self) -> bool {
        self.force_full || !self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            if width > 0 && height > 0 {
                if let Some(full) = Rect::new(0, 0, width, height) {
                    return vec![full];
                }
            }
            Vec::new()
        } else {
            self.regions.drain(..).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_rect_records_rectangles() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_rect(Rect::new(10, 10, 20, 20).unwrap());
        assert!(tracker.is_dirty());

        let rects = tracker.take_regions(100, 100);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(10, 10, 20, 20).unwrap());
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_rect(Rect::new(5, 5, 10, 10).unwrap());
        tracker.mark_full();
        tracker.mark_rect(Rect::new(20, 20, 15, 15).unwrap());

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(0, 0, 200, 100).unwrap());
    }

    #[test]
    fn optional_rects_are_skipped_when_none() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_optional_rect(None);
        assert!(!tracker.is_dirty());
        assert!(tracker.take_regions(10, 10).is_empty());
    }
}
