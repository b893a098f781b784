//! Archive backends for KMZ output.

use std::io::{Seek, Write};

use log::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;

use super::KmzConfig;

/// A container that stores named byte blobs and is finalized once.
///
/// [`Kmz::write_to`](super::Kmz::write_to) opens nothing itself: it receives
/// an already open archive, calls [`Archive::store`] once per document in
/// insertion order, then [`Archive::finish`].
pub trait Archive {
    /// Value handed back once the archive is complete.
    type Output;

    /// Add a member named `name` holding `bytes`.
    fn store(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Write any trailing structures and close the archive.
    fn finish(self) -> Result<Self::Output>;
}

/// Zip archive with deflate-compressed members.
pub struct ZipContainer<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
    comment: Option<String>,
}

impl<W: Write + Seek> ZipContainer<W> {
    pub fn new(writer: W, config: &KmzConfig) -> Self {
        let compression_level = config.compression_level.unwrap_or(6);
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(compression_level));

        Self {
            zip: ZipWriter::new(writer),
            options,
            comment: config.comment.clone(),
        }
    }
}

impl<W: Write + Seek> Archive for ZipContainer<W> {
    type Output = W;

    fn store(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        debug!("storing {} ({} bytes)", name, bytes.len());
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(bytes)?;
        Ok(())
    }

    fn finish(mut self) -> Result<W> {
        if let Some(comment) = self.comment {
            self.zip.set_comment(comment);
        }
        Ok(self.zip.finish()?)
    }
}
