//! Canvas export (PNG/JPEG/PDF) and additive image import.
//!
//! Export is read-only over the surface: any failure aborts the operation
//! and leaves both the canvas and the target path untouched. Files are
//! written to a temporary sibling path and renamed into place so a failed
//! encode never leaves a partial file behind.

mod pdf;

use crate::draw::Surface;
use chrono::Local;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output format selected by the user in the save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossless RGBA
    Png,
    /// Lossy RGB; transparency is flattened over white
    Jpeg,
    /// Single-page document embedding the flattened raster
    Pdf,
}

impl ExportFormat {
    /// The file extension appended when the chosen path has none.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Parses a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }

    /// Derives the format from a path's extension, if it has a known one.
    pub fn for_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Errors that can occur while exporting or importing canvas images.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("cannot determine an image format for '{0}'")]
    UnknownFormat(PathBuf),
}

/// Serializes the surface to bytes in the requested format.
///
/// JPEG and PDF flatten the canvas over opaque white first, since neither
/// format can represent transparency. `jpeg_quality` is only consulted for
/// the JPEG arm (1-100).
pub fn encode(
    surface: &Surface,
    format: ExportFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, ExportError> {
    let (w, h) = (surface.width(), surface.height());
    match format {
        ExportFormat::Png => {
            let mut buf = Vec::new();
            PngEncoder::new(&mut buf).write_image(
                surface.pixels(),
                w,
                h,
                ExtendedColorType::Rgba8,
            )?;
            Ok(buf)
        }
        ExportFormat::Jpeg => {
            let rgb = surface.flatten_over_white();
            let mut buf = Vec::new();
            JpegEncoder::new_with_quality(&mut buf, jpeg_quality).write_image(
                &rgb,
                w,
                h,
                ExtendedColorType::Rgb8,
            )?;
            Ok(buf)
        }
        ExportFormat::Pdf => {
            let rgb = surface.flatten_over_white();
            Ok(pdf::encode_pdf(&rgb, w, h)?)
        }
    }
}

/// Saves the surface to `path` in the explicitly selected format.
///
/// If the path lacks an extension, the format's extension is appended (the
/// format comes from the save dialog's filter, never from sniffing). The
/// encoded bytes go to a `.part` sibling first and are renamed into place
/// on success.
///
/// # Returns
/// The path actually written, including any appended extension.
pub fn save_canvas(
    surface: &Surface,
    path: &Path,
    format: ExportFormat,
    jpeg_quality: u8,
) -> Result<PathBuf, ExportError> {
    let target = if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    };

    let bytes = encode(surface, format, jpeg_quality)?;

    let mut part_name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    part_name.push(".part");
    let part = target.with_file_name(part_name);

    if let Err(err) = fs::write(&part, &bytes) {
        let _ = fs::remove_file(&part);
        return Err(err.into());
    }
    if let Err(err) = fs::rename(&part, &target) {
        let _ = fs::remove_file(&part);
        return Err(err.into());
    }

    log::info!(
        "Saved canvas to {} ({} bytes)",
        target.display(),
        bytes.len()
    );
    Ok(target)
}

/// Decodes an image file into RGBA pixels for additive import.
///
/// # Returns
/// Tuple `(pixels, width, height)`; the caller composites the pixels onto
/// its surface at the origin.
pub fn open_image(path: &Path) -> Result<(Vec<u8>, u32, u32), ExportError> {
    let decoded = image::ImageReader::open(path)?.decode()?;
    let rgba = decoded.to_rgba8();
    let (w, h) = rgba.dimensions();
    log::debug!("Decoded {} ({}x{})", path.display(), w, h);
    Ok((rgba.into_raw(), w, h))
}

/// Generates a default filename from a chrono template and format.
///
/// Used when exporting without an explicit target, e.g.
/// `drawing_%Y-%m-%d_%H%M%S` becomes `drawing_2026-08-29_141523.png`.
pub fn default_filename(template: &str, format: ExportFormat) -> String {
    let now = Local::now();
    format!("{}.{}", now.format(template), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Background, RED};

    #[test]
    fn format_from_extension_accepts_jpeg_aliases() {
        assert_eq!(ExportFormat::from_extension("PNG"), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_extension("jpeg"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_extension("jpg"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_extension("pdf"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::from_extension("bmp"), None);
    }

    #[test]
    fn png_round_trip_is_lossless() {
        let mut surface = Surface::new(32, 32, Background::White);
        surface.stroke_line((4, 4), (28, 28), RED, 3);

        let bytes = encode(&surface, ExportFormat::Png, 90).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded.as_raw().as_slice(), surface.pixels());
    }

    #[test]
    fn transparent_surface_encodes_to_transparent_png() {
        let surface = Surface::new(16, 16, Background::Transparent);
        let bytes = encode(&surface, ExportFormat::Png, 90).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert!(decoded.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn jpeg_flattens_transparency_to_white() {
        let surface = Surface::new(16, 16, Background::Transparent);
        let bytes = encode(&surface, ExportFormat::Jpeg, 90).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        for p in decoded.pixels() {
            for c in p.0 {
                assert!(c >= 240, "expected near-white, got {c}");
            }
        }
    }

    #[test]
    fn jpeg_round_trip_is_within_lossy_tolerance() {
        let mut surface = Surface::new(32, 32, Background::White);
        // A large solid block keeps DCT artifacts small at its center
        for y in 8..24 {
            surface.stroke_line((8, y), (24, y), BLACK, 1);
        }

        let bytes = encode(&surface, ExportFormat::Jpeg, 90).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        let center = decoded.get_pixel(16, 16).0;
        let corner = decoded.get_pixel(2, 2).0;
        for c in center {
            assert!(c <= 32, "block center should stay near-black, got {c}");
        }
        for c in corner {
            assert!(c >= 224, "background should stay near-white, got {c}");
        }
    }

    #[test]
    fn pdf_export_embeds_canvas_dimensions() {
        let surface = Surface::new(24, 12, Background::White);
        let bytes = encode(&surface, ExportFormat::Pdf, 90).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-"));
        assert!(text.contains("/Width 24"));
        assert!(text.contains("/Height 12"));
    }

    #[test]
    fn save_appends_extension_only_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let surface = Surface::new(8, 8, Background::White);

        let written = save_canvas(
            &surface,
            &dir.path().join("drawing"),
            ExportFormat::Png,
            90,
        )
        .unwrap();
        assert_eq!(written, dir.path().join("drawing.png"));
        assert!(written.exists());

        // An explicit extension is preserved, even a mismatched one
        let written = save_canvas(
            &surface,
            &dir.path().join("picture.jpeg"),
            ExportFormat::Jpeg,
            90,
        )
        .unwrap();
        assert_eq!(written, dir.path().join("picture.jpeg"));
    }

    #[test]
    fn save_leaves_no_partial_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let surface = Surface::new(8, 8, Background::White);
        save_canvas(&surface, &dir.path().join("kid_art"), ExportFormat::Pdf, 90).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["kid_art.pdf".to_string()]);
    }

    #[test]
    fn open_image_round_trips_an_exported_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = Surface::new(16, 16, Background::White);
        surface.stroke_line((0, 0), (15, 15), RED, 2);
        let path = save_canvas(&surface, &dir.path().join("a"), ExportFormat::Png, 90).unwrap();

        let (pixels, w, h) = open_image(&path).unwrap();
        assert_eq!((w, h), (16, 16));
        assert_eq!(pixels.as_slice(), surface.pixels());
    }

    #[test]
    fn open_image_reports_decode_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        fs::write(&path, b"not an image").unwrap();
        assert!(matches!(
            open_image(&path),
            Err(ExportError::Codec(_))
        ));
    }

    #[test]
    fn default_filename_applies_template_and_extension() {
        let name = default_filename("drawing_%Y", ExportFormat::Pdf);
        assert!(name.starts_with("drawing_2"));
        assert!(name.ends_with(".pdf"));
    }
}
