//! Fixed-size RGBA raster surface and its drawing primitives.
//!
//! The surface is the mutable bitmap behind both the paint canvas and the
//! tracing pad. Dimensions are fixed at creation; every drawing primitive
//! silently clips to bounds, so no operation can fail. Thick lines are
//! rasterized as capsules (distance-to-segment coverage), which produces
//! round caps and round joins without any special-casing.

use super::color::Color;
use super::dirty::DirtyTracker;
use crate::util::{self, Rect};

/// Initial fill of a surface; also the value the eraser restores.
///
/// The paint canvas uses an opaque white background, the tracing pad a fully
/// transparent one so the reference image shows through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    /// Opaque white fill
    White,
    /// Fully transparent fill
    Transparent,
}

impl Background {
    /// The RGBA value this background fills pixels with.
    pub const fn pixel(self) -> [u8; 4] {
        match self {
            Background::White => [255, 255, 255, 255],
            Background::Transparent => [0, 0, 0, 0],
        }
    }
}

/// What a primitive writes into covered pixels.
#[derive(Clone, Copy)]
enum PaintValue {
    /// Source-over composite of the given color
    Over(Color),
    /// Restore the surface background (eraser)
    Erase,
}

/// A fixed-dimension RGBA8 pixel buffer with clipped drawing primitives.
///
/// Pixel data is stored in row-major RGBA order, compatible with the `image`
/// crate's `RgbaImage` layout. Every mutating call records the affected
/// bounds in a [`DirtyTracker`] so the host can repaint incrementally.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    background: Background,
    dirty: DirtyTracker,
}

impl Surface {
    /// Creates a surface filled with the given background.
    ///
    /// Dimensions are immutable for the lifetime of the surface.
    pub fn new(width: u32, height: u32, background: Background) -> Self {
        let fill = background.pixel();
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for px in pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&fill);
        }
        let mut dirty = DirtyTracker::new();
        dirty.mark_full();
        Self {
            width,
            height,
            pixels,
            background,
            dirty,
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The background this surface was created with.
    pub fn background(&self) -> Background {
        self.background
    }

    /// Raw RGBA pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reads a single pixel; `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Draws a round-capped, round-joined line segment of the given stroke
    /// width, composited source-over.
    ///
    /// A zero-length segment (both points equal) paints a disc, which is how
    /// a single click produces a dot.
    pub fn stroke_line(&mut self, p1: (i32, i32), p2: (i32, i32), color: Color, width: u32) {
        self.paint_capsule(p1, p2, width, PaintValue::Over(color));
    }

    /// Erases along a line segment: covered pixels are restored to the
    /// surface background (opaque white or fully transparent).
    ///
    /// On a transparent surface this clears to transparency rather than
    /// painting background-colored pixels, so erasing on the tracing pad
    /// reveals the reference image again.
    pub fn erase_line(&mut self, p1: (i32, i32), p2: (i32, i32), width: u32) {
        self.paint_capsule(p1, p2, width, PaintValue::Erase);
    }

    /// Draws an outline-only rectangle from two arbitrary corner points.
    ///
    /// The corners are normalized, then the four edges are stroked as thick
    /// segments; shared endpoints give the outline round joins matching the
    /// freehand stroke style.
    pub fn rect_outline(&mut self, a: (i32, i32), b: (i32, i32), color: Color, width: u32) {
        let (x, y, w, h) = util::normalized_rect(a.0, a.1, b.0, b.1);
        let tl = (x, y);
        let tr = (x + w, y);
        let br = (x + w, y + h);
        let bl = (x, y + h);
        self.paint_capsule(tl, tr, width, PaintValue::Over(color));
        self.paint_capsule(tr, br, width, PaintValue::Over(color));
        self.paint_capsule(br, bl, width, PaintValue::Over(color));
        self.paint_capsule(bl, tl, width, PaintValue::Over(color));
    }

    /// Draws an outline-only circle from two arbitrary corner points.
    ///
    /// The diameter is the smaller of the two gesture extents (see
    /// [`util::circle_bounds`]); a degenerate gesture paints a dot.
    pub fn circle_outline(&mut self, a: (i32, i32), b: (i32, i32), color: Color, width: u32) {
        let (x, y, d) = util::circle_bounds(a.0, a.1, b.0, b.1);
        let radius = d as f32 / 2.0;
        let cx = x as f32 + radius;
        let cy = y as f32 + radius;
        let half = width.max(1) as f32 / 2.0;

        let pad = (radius + half).ceil() as i32 + 1;
        let bounds = self.clip_bounds(
            cx as i32 - pad,
            cy as i32 - pad,
            cx as i32 + pad,
            cy as i32 + pad,
        );
        let Some((min_x, min_y, max_x, max_y)) = bounds else {
            return;
        };

        let rgba = color.to_rgba();
        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f32 - cx;
                let dy = py as f32 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if (dist - radius).abs() <= half {
                    self.write_over(px, py, rgba);
                }
            }
        }
        self.dirty
            .mark_optional_rect(Rect::from_min_max(min_x, min_y, max_x + 1, max_y + 1));
    }

    /// Resets every pixel to the initial background, discarding all strokes.
    /// There is no undo.
    pub fn clear(&mut self) {
        let fill = self.background.pixel();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&fill);
        }
        self.dirty.mark_full();
    }

    /// Composites an RGBA image onto the surface at origin (0,0).
    ///
    /// The image is laid source-over on top of the existing content without
    /// resizing or clearing; anything larger than the surface is clipped.
    /// This is the additive "open file" semantic: importing a picture draws
    /// it over the current drawing instead of replacing it.
    pub fn composite_image(&mut self, rgba: &[u8], img_width: u32, img_height: u32) {
        let copy_w = img_width.min(self.width) as usize;
        let copy_h = img_height.min(self.height) as usize;
        if copy_w == 0 || copy_h == 0 {
            return;
        }

        for y in 0..copy_h {
            for x in 0..copy_w {
                let src_idx = (y * img_width as usize + x) * 4;
                let src = [
                    rgba[src_idx],
                    rgba[src_idx + 1],
                    rgba[src_idx + 2],
                    rgba[src_idx + 3],
                ];
                self.write_over(x as i32, y as i32, src);
            }
        }
        self.dirty
            .mark_optional_rect(Rect::new(0, 0, copy_w as i32, copy_h as i32));
    }

    /// Returns the surface flattened over opaque white as RGB rows.
    ///
    /// JPEG and PDF cannot represent transparency, so both encoders run the
    /// pixels through this first. A surface with no transparency comes back
    /// unchanged (minus the alpha channel).
    pub fn flatten_over_white(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for px in self.pixels.chunks_exact(4) {
            let a = px[3] as u32;
            let inv = 255 - a;
            for c in 0..3 {
                rgb.push(((px[c] as u32 * a + 255 * inv) / 255) as u8);
            }
        }
        rgb
    }

    /// Drains the dirty rectangles accumulated since the last repaint.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        self.dirty
            .take_regions(self.width as i32, self.height as i32)
    }

    /// Whether any mutation happened since the last `take_dirty_regions`.
    pub fn needs_repaint(&self) -> bool {
        self.dirty.is_dirty()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Rasterizes a capsule (thick segment with round caps) with the given
    /// paint value. The workhorse behind strokes, erasing, and outlines.
    fn paint_capsule(&mut self, p1: (i32, i32), p2: (i32, i32), width: u32, value: PaintValue) {
        let half = width.max(1) as f32 / 2.0;
        let pad = half.ceil() as i32 + 1;
        let bounds = self.clip_bounds(
            p1.0.min(p2.0) - pad,
            p1.1.min(p2.1) - pad,
            p1.0.max(p2.0) + pad,
            p1.1.max(p2.1) + pad,
        );
        let Some((min_x, min_y, max_x, max_y)) = bounds else {
            return;
        };

        let (x1, y1) = (p1.0 as f32, p1.1 as f32);
        let (x2, y2) = (p2.0 as f32, p2.1 as f32);
        let radius_sq = half * half;
        let erase_px = self.background.pixel();

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let d_sq = util::segment_distance_sq(px as f32, py as f32, x1, y1, x2, y2);
                if d_sq <= radius_sq {
                    match value {
                        PaintValue::Over(color) => self.write_over(px, py, color.to_rgba()),
                        PaintValue::Erase => self.write_raw(px, py, erase_px),
                    }
                }
            }
        }
        self.dirty
            .mark_optional_rect(Rect::from_min_max(min_x, min_y, max_x + 1, max_y + 1));
    }

    /// Clips an inclusive pixel bounding box to the surface; `None` when the
    /// box lies entirely outside.
    fn clip_bounds(&self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<(i32, i32, i32, i32)> {
        let min_x = min_x.max(0);
        let min_y = min_y.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let max_y = max_y.min(self.height as i32 - 1);
        if min_x > max_x || min_y > max_y {
            None
        } else {
            Some((min_x, min_y, max_x, max_y))
        }
    }

    /// Source-over composite of a single pixel. Coordinates must be in bounds.
    fn write_over(&mut self, x: i32, y: i32, src: [u8; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let dst = [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ];
        let out = blend_over(dst, src);
        self.pixels[idx..idx + 4].copy_from_slice(&out);
    }

    /// Replaces a single pixel without blending. Coordinates must be in bounds.
    fn write_raw(&mut self, x: i32, y: i32, value: [u8; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&value);
    }
}

/// Straight-alpha source-over blend of two RGBA pixels.
fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }

    let da = dst[3] as u32;
    let inv = 255 - sa;
    let out_a = sa + da * inv / 255;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let sc = src[c] as u32;
        let dc = dst[c] as u32;
        out[c] = ((sc * sa + dc * da * inv / 255) / out_a) as u8;
    }
    out[3] = out_a as u8;
    out
}
