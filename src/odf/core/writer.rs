//! ODF package writing functionality.
//!
//! This module wraps the ZIP writer with the container rules ODF imposes: the
//! `mimetype` entry comes first and is stored uncompressed, and every entry gets
//! a fixed timestamp so identical documents produce identical bytes.

use crate::common::Result;
use crate::odf::constants::ODF_MIMETYPE;
use std::io::{Seek, Write};
use tracing::trace;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Builder for creating ODF packages (ZIP archives)
///
/// # Examples
///
/// ```
/// # use odpgen::odf::core::PackageWriter;
/// # fn example() -> odpgen::Result<()> {
/// let mut writer = PackageWriter::new();
/// writer.write_mimetype("application/vnd.oasis.opendocument.presentation")?;
/// writer.add_file("content.xml", b"<office:document-content/>")?;
///
/// let bytes = writer.finish_to_bytes()?;
/// assert!(!bytes.is_empty());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct PackageWriter<W: Write + Seek> {
    zip_writer: ZipWriter<W>,
    compress: bool,
    entry_count: usize,
}

impl PackageWriter<std::io::Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory
    pub fn new() -> Self {
        Self::with_writer(std::io::Cursor::new(Vec::new()))
    }

    /// Finish writing and return the bytes
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PackageWriter<std::io::Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek> PackageWriter<W> {
    /// Create a new package writer with a custom writer
    pub fn with_writer(writer: W) -> Self {
        Self {
            zip_writer: ZipWriter::new(writer),
            compress: true,
            entry_count: 0,
        }
    }

    /// Choose between deflated (default) and stored entries for everything
    /// except `mimetype`.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Number of entries written so far.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Write the `mimetype` entry, stored without compression.
    ///
    /// ODF consumers sniff the package type from the first local header, so this
    /// must be called before any other entry is added.
    pub fn write_mimetype(&mut self, mimetype: &str) -> Result<()> {
        debug_assert_eq!(self.entry_count, 0, "mimetype must be the first entry");
        self.write_entry(ODF_MIMETYPE, mimetype.as_bytes(), false)
    }

    /// Add a file to the package
    ///
    /// # Arguments
    ///
    /// * `path` - Path within the ZIP archive (e.g., "content.xml", "Pictures/image1.png")
    /// * `content` - File content as bytes
    pub fn add_file(&mut self, path: &str, content: &[u8]) -> Result<()> {
        self.write_entry(path, content, self.compress)
    }

    fn write_entry(&mut self, path: &str, content: &[u8], deflate: bool) -> Result<()> {
        let method = if deflate {
            zip::CompressionMethod::Deflated
        } else {
            zip::CompressionMethod::Stored
        };
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .last_modified_time(zip::DateTime::default());

        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content)?;
        self.entry_count += 1;

        trace!(path, bytes = content.len(), deflate, "wrote package entry");
        Ok(())
    }

    /// Finish writing the package and return the underlying writer
    pub fn finish(self) -> Result<W> {
        let writer = self.zip_writer.finish()?;
        Ok(writer)
    }
}
