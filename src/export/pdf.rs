//! Single-page PDF generation with one embedded raster image.
//!
//! Builds the document entirely in memory: the flattened RGB canvas is
//! deflate-compressed and embedded as the sole Image XObject of a page
//! sized to the canvas (one pixel per point). No intermediate file is
//! written.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::{self, Write};

/// Assembles a PDF file from numbered objects, tracking byte offsets for
/// the cross-reference table.
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        Self {
            buf: b"%PDF-1.4\n".to_vec(),
            offsets: Vec::new(),
        }
    }

    /// Starts the next numbered object and records its offset.
    fn begin_obj(&mut self) -> usize {
        self.offsets.push(self.buf.len());
        let num = self.offsets.len();
        self.buf.extend_from_slice(format!("{num} 0 obj\n").as_bytes());
        num
    }

    fn end_obj(&mut self) {
        self.buf.extend_from_slice(b"endobj\n");
    }

    fn dict(&mut self, body: &str) {
        self.buf.extend_from_slice(format!("<< {body} >>\n").as_bytes());
    }

    /// Writes a stream object: dictionary (with /Length appended) plus data.
    fn stream_obj(&mut self, dict_body: &str, data: &[u8]) {
        self.begin_obj();
        self.buf.extend_from_slice(
            format!("<< {dict_body} /Length {} >>\nstream\n", data.len()).as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\n");
        self.end_obj();
    }

    /// Appends the xref table and trailer, returning the finished bytes.
    fn finish(mut self, root_obj: usize) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let count = self.offsets.len() + 1;
        self.buf
            .extend_from_slice(format!("xref\n0 {count}\n").as_bytes());
        self.buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            self.buf
                .extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        self.buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {count} /Root {root_obj} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
            )
            .as_bytes(),
        );
        self.buf
    }
}

/// Encodes flattened RGB rows as a single-page PDF sized to the image.
///
/// The page MediaBox is `width` x `height` points and the image fills it
/// exactly; row 0 of the input lands at the top of the page.
pub fn encode_pdf(rgb: &[u8], width: u32, height: u32) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(rgb)?;
    let compressed = encoder.finish()?;

    let mut writer = PdfWriter::new();

    // 1: document catalog
    let root = writer.begin_obj();
    writer.dict("/Type /Catalog /Pages 2 0 R");
    writer.end_obj();

    // 2: page tree
    writer.begin_obj();
    writer.dict("/Type /Pages /Kids [3 0 R] /Count 1");
    writer.end_obj();

    // 3: the single page
    writer.begin_obj();
    writer.dict(&format!(
        "/Type /Page /Parent 2 0 R /MediaBox [0 0 {width} {height}] \
         /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R"
    ));
    writer.end_obj();

    // 4: the canvas raster
    writer.stream_obj(
        &format!(
            "/Type /XObject /Subtype /Image /Width {width} /Height {height} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /FlateDecode"
        ),
        &compressed,
    );

    // 5: content stream scaling the image to fill the page
    let content = format!("q\n{width} 0 0 {height} 0 0 cm\n/Im0 Do\nQ\n");
    writer.stream_obj("", content.as_bytes());

    Ok(writer.finish(root))
}
