//! KMZ collections: several KML documents in one zip container.
//!
//! # Example
//!
//! ```no_run
//! use kmlkit::{Kmz, DEFAULT_PRECISION};
//!
//! let mut kmz = Kmz::new("overlay.kmz");
//! let doc = kmz.new_kml("doc.kml", DEFAULT_PRECISION);
//! doc.header();
//! doc.network_link("layers/roads.kml");
//! doc.footer();
//!
//! let roads = kmz.new_kml("layers/roads.kml", DEFAULT_PRECISION);
//! roads.header();
//! roads.footer();
//!
//! kmz.write()?;
//! # Ok::<(), kmlkit::Error>(())
//! ```

mod archive;

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::kml::Kml;

pub use archive::{Archive, ZipContainer};

/// Configuration for KMZ output.
#[derive(Debug, Clone)]
pub struct KmzConfig {
    /// Compression level for deflate (0-9, default 6).
    pub compression_level: Option<i64>,
    /// Archive comment, written in the zip end record.
    pub comment: Option<String>,
}

impl Default for KmzConfig {
    fn default() -> Self {
        Self {
            compression_level: None,
            comment: Some(format!("created by {}", env!("CARGO_PKG_NAME"))),
        }
    }
}

/// An ordered set of documents destined for one archive.
///
/// Documents are stored in the order they were appended.
#[derive(Debug, Clone)]
pub struct Kmz {
    path: String,
    kmls: Vec<Kml>,
    config: KmzConfig,
}

impl Kmz {
    /// Create an empty collection that [`Kmz::write`] will save at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kmls: Vec::new(),
            config: KmzConfig::default(),
        }
    }

    /// Configure the archive with custom settings.
    pub fn with_config(mut self, config: KmzConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Take ownership of `kml`; it becomes the last archive member.
    pub fn append(&mut self, kml: Kml) {
        self.kmls.push(kml);
    }

    /// Create a document, append it, and return it for building.
    pub fn new_kml(&mut self, name: impl Into<String>, precision: usize) -> &mut Kml {
        self.kmls.push(Kml::new(name, precision));
        let last = self.kmls.len() - 1;
        &mut self.kmls[last]
    }

    /// Documents in insertion order.
    pub fn kmls(&self) -> &[Kml] {
        &self.kmls
    }

    pub fn kmls_mut(&mut self) -> impl Iterator<Item = &mut Kml> {
        self.kmls.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.kmls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kmls.is_empty()
    }

    /// Write every document into a zip archive at [`Kmz::path`].
    pub fn write(&self) -> Result<()> {
        let file = File::create(Path::new(&self.path))?;
        self.export(file)?;
        info!("wrote {} ({} documents)", self.path, self.kmls.len());
        Ok(())
    }

    /// Write the zip archive to any seekable writer, returning it when done.
    pub fn export<W: Write + Seek>(&self, writer: W) -> Result<W> {
        self.write_to(ZipContainer::new(writer, &self.config))
    }

    /// Store every document in `archive`, in insertion order, then finish it.
    pub fn write_to<A: Archive>(&self, mut archive: A) -> Result<A::Output> {
        for kml in &self.kmls {
            kml.check_balanced();
            archive.store(kml.path(), kml.buffer().as_bytes())?;
        }
        archive.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records store calls instead of writing anything.
    #[derive(Default)]
    struct Recorder {
        stored: Vec<(String, usize)>,
    }

    impl Archive for Recorder {
        type Output = Vec<(String, usize)>;

        fn store(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
            self.stored.push((name.to_string(), bytes.len()));
            Ok(())
        }

        fn finish(self) -> Result<Self::Output> {
            Ok(self.stored)
        }
    }

    fn doc(name: &str, placemarks: usize) -> Kml {
        let mut kml = Kml::new(name, 6);
        kml.header();
        for i in 0..placemarks {
            kml.placemark_header(Some(&format!("p{i}")), None, None);
            kml.placemark_footer();
        }
        kml.footer();
        kml
    }

    #[test]
    fn test_store_follows_insertion_order() {
        let mut kmz = Kmz::new("out.kmz");
        // Sizes deliberately out of order.
        kmz.append(doc("d1.kml", 50));
        kmz.append(doc("d2.kml", 0));
        kmz.append(doc("d3.kml", 10));

        let stored = kmz.write_to(Recorder::default()).unwrap();
        let names: Vec<_> = stored.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["d1.kml", "d2.kml", "d3.kml"]);
        assert_eq!(stored[0].1, kmz.kmls()[0].buffer().len());
    }

    #[test]
    fn test_new_kml_appends() {
        let mut kmz = Kmz::new("out.kmz");
        assert!(kmz.is_empty());
        kmz.new_kml("a.kml", 6).header();
        kmz.new_kml("b.kml", 3);
        assert_eq!(kmz.len(), 2);
        assert_eq!(kmz.kmls()[0].path(), "a.kml");
        assert_eq!(kmz.kmls()[1].precision(), 3);

        for kml in kmz.kmls_mut() {
            if !kml.is_balanced() {
                kml.footer();
            }
        }
        assert!(kmz.kmls().iter().all(Kml::is_balanced));
    }

    #[test]
    fn test_empty_collection_still_finishes() {
        let kmz = Kmz::new("out.kmz");
        let stored = kmz.write_to(Recorder::default()).unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_default_comment_names_crate() {
        let config = KmzConfig::default();
        assert_eq!(config.comment.as_deref(), Some("created by kmlkit"));
        assert_eq!(config.compression_level, None);
    }
}
