//! KML document builder.
//!
//! A [`Kml`] is an append-only document. Markup is produced by pairs of
//! `*_header` / `*_footer` calls that mirror the nesting of the target
//! document; each header that introduces children raises the indent level and
//! the matching footer lowers it again. Balancing the pairs is up to the
//! caller, the builder never validates structure.
//!
//! Leaf text (names, descriptions, URLs) is written verbatim. Callers that
//! may pass `<`, `>` or `&` should run the text through [`escape`] first.
//!
//! # Example
//!
//! ```
//! use kmlkit::{Color, Geometry, Kml};
//!
//! let mut kml = Kml::new("track.kml", 6);
//! kml.header();
//! kml.style_header(Some("red"));
//! kml.line_style(&Color::new("ff0000", "ff")?, 2);
//! kml.style_footer();
//! kml.placemark_header(Some("Track"), None, Some("red"));
//! kml.linestring_header(&Geometry::default().tessellate());
//! kml.coordinates_2d(-122.084, 37.422);
//! kml.coordinates_2d(-122.085, 37.423);
//! kml.linestring_footer();
//! kml.placemark_footer();
//! kml.footer();
//!
//! assert!(kml.buffer().as_str().contains("<coordinates>-122.084,37.422 -122.085,37.423 </coordinates>"));
//! # Ok::<(), kmlkit::Error>(())
//! ```

mod color;
mod geometry;
mod number;
mod style;
mod time;

use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{info, warn};

use crate::buffer::{Buffer, bprintf};
use crate::error::Result;

pub use color::Color;
pub use geometry::{AltitudeMode, Geometry};
pub use number::{CoordinateFormat, Significant};
pub use style::IconStyle;
pub use time::Time;

/// Significant digits used when a caller has no preference.
pub const DEFAULT_PRECISION: usize = 6;

/// One KML document under construction.
#[derive(Debug, Clone)]
pub struct Kml {
    path: String,
    buf: Buffer,
    coords: CoordinateFormat,
}

impl Kml {
    /// Create an empty document.
    ///
    /// `path` is the output file for [`Kml::write`], or the member name when
    /// the document is stored in a [`Kmz`](crate::Kmz). `precision` is the
    /// number of significant digits every coordinate is written with.
    pub fn new(path: impl Into<String>, precision: usize) -> Self {
        Self {
            path: path.into(),
            buf: Buffer::new(),
            coords: CoordinateFormat::new(precision),
        }
    }

    /// Destination file, or archive member name.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn precision(&self) -> usize {
        self.coords.precision()
    }

    /// Text written so far.
    pub fn buffer(&self) -> &Buffer {
        &self.buf
    }

    /// Raw access for fragments the builder has no operation for.
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buf
    }

    /// True when every header written so far has been closed.
    pub fn is_balanced(&self) -> bool {
        self.buf.indent() == 0
    }

    /// Write the document to [`Kml::path`], replacing any existing file.
    pub fn write(&self) -> Result<()> {
        let mut file = File::create(Path::new(&self.path))?;
        self.write_to(&mut file)?;
        info!("wrote {} ({} bytes)", self.path, self.buf.len());
        Ok(())
    }

    /// Write the document text to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.check_balanced();
        writer.write_all(self.buf.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub(crate) fn check_balanced(&self) {
        if !self.is_balanced() {
            warn!(
                "{}: finalized with {} unclosed element(s)",
                self.path,
                self.buf.indent()
            );
        }
        debug_assert!(
            self.is_balanced(),
            "{}: unbalanced header/footer calls",
            self.path
        );
    }

    /// XML declaration, `<kml>` root and `<Document>` container.
    pub fn header(&mut self) {
        let buf = &mut self.buf;
        bprintf!(buf, "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        bprintf!(buf, "<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n");
        bprintf!(buf, "<Document>\n");
        buf.push_indent();
    }

    pub fn footer(&mut self) {
        let buf = &mut self.buf;
        buf.pop_indent();
        bprintf!(buf, "</Document>\n");
        bprintf!(buf, "</kml>\n");
    }

    /// `<name>` leaf.
    pub fn name(&mut self, name: &str) {
        bprintf!(self.buf, "<name>{}</name>\n", name);
    }

    /// `<description>` leaf.
    pub fn description(&mut self, desc: &str) {
        bprintf!(self.buf, "<description>{}</description>\n", desc);
    }

    /// `<styleUrl>` leaf referencing `id`, optionally in another document.
    pub fn style_url(&mut self, base: Option<&str>, id: &str) {
        match base {
            Some(base) => bprintf!(self.buf, "<styleUrl>{}#{}</styleUrl>\n", base, id),
            None => bprintf!(self.buf, "<styleUrl>#{}</styleUrl>\n", id),
        };
    }

    /// `<NetworkLink>` pointing at `url`.
    pub fn network_link(&mut self, url: &str) {
        let buf = &mut self.buf;
        bprintf!(buf, "<NetworkLink>\n");
        buf.push_indent();
        bprintf!(buf, "<Link>\n");
        buf.push_indent();
        bprintf!(buf, "<href>{}</href>\n", url);
        buf.pop_indent();
        bprintf!(buf, "</Link>\n");
        buf.pop_indent();
        bprintf!(buf, "</NetworkLink>\n");
    }
}

/// Escape `<`, `>`, `&`, `'` and `"` for use in leaf text.
pub fn escape(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_footer() {
        let mut kml = Kml::new("doc.kml", DEFAULT_PRECISION);
        kml.header();
        assert_eq!(kml.buffer().indent(), 1);
        kml.footer();
        assert_eq!(
            kml.buffer().as_str(),
            "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
             <kml xmlns=\"http://www.opengis.net/kml/2.2\">\n\
             <Document>\n\
             </Document>\n\
             </kml>\n"
        );
        assert!(kml.is_balanced());
    }

    #[test]
    fn test_leaves_are_indented_inside_document() {
        let mut kml = Kml::new("doc.kml", DEFAULT_PRECISION);
        kml.header();
        kml.name("Sites");
        kml.description("Survey <b>sites</b>");
        kml.footer();
        let text = kml.buffer().as_str();
        assert!(text.contains("\n  <name>Sites</name>\n"));
        // Written verbatim, no escaping.
        assert!(text.contains("\n  <description>Survey <b>sites</b></description>\n"));
    }

    #[test]
    fn test_style_url_with_and_without_base() {
        let mut kml = Kml::new("doc.kml", DEFAULT_PRECISION);
        kml.style_url(None, "s1");
        kml.style_url(Some("styles.kml"), "s2");
        assert_eq!(
            kml.buffer().as_str(),
            "<styleUrl>#s1</styleUrl>\n<styleUrl>styles.kml#s2</styleUrl>\n"
        );
    }

    #[test]
    fn test_network_link() {
        let mut kml = Kml::new("doc.kml", DEFAULT_PRECISION);
        kml.network_link("http://example.com/feed.kml");
        assert_eq!(
            kml.buffer().as_str(),
            "<NetworkLink>\n  <Link>\n    <href>http://example.com/feed.kml</href>\n  </Link>\n</NetworkLink>\n"
        );
        assert!(kml.is_balanced());
    }

    #[test]
    fn test_escape_helper() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_write_to_vec() {
        let mut kml = Kml::new("doc.kml", DEFAULT_PRECISION);
        kml.header();
        kml.footer();
        let mut out = Vec::new();
        kml.write_to(&mut out).unwrap();
        assert_eq!(out, kml.buffer().as_bytes());
    }
}
