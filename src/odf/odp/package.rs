//! Packaging a presentation into an ODP archive.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::Result;
use crate::odf::constants::{
    ODF_ACCELERATOR, ODF_CONTENT, ODF_MANIFEST, ODF_PRESENTATION, ODF_SETTINGS, ODF_STYLES,
    ODP_EXTENSION,
};
use crate::odf::core::PackageWriter;
use crate::odf::odp::Presentation;
use crate::odf::odp::parts::{
    configurations_xml, content_xml, manifest, media_payloads, settings_xml, styles_xml,
};

impl Presentation {
    /// Serialize the presentation to ODP bytes.
    ///
    /// Entries are written as `mimetype` (stored), `content.xml`,
    /// `styles.xml`, `settings.xml`, the accelerator configuration and
    /// `META-INF/manifest.xml`, followed by the presentation background,
    /// slide backgrounds and slide images. The model is not modified, and two
    /// calls on an unchanged presentation return identical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] or [`crate::Error::Zip`] if the archive
    /// cannot be written.
    pub fn save_stream(&self) -> Result<Vec<u8>> {
        let options = self.write_options();
        debug!(
            slides = self.slide_count(),
            compress = options.compress,
            "writing presentation package"
        );

        let mut writer = PackageWriter::new().with_compression(options.compress);
        writer.write_mimetype(ODF_PRESENTATION)?;
        writer.add_file(ODF_CONTENT, content_xml(self).as_bytes())?;
        writer.add_file(ODF_STYLES, styles_xml(self).as_bytes())?;
        writer.add_file(ODF_SETTINGS, settings_xml(self).as_bytes())?;
        writer.add_file(ODF_ACCELERATOR, configurations_xml().as_bytes())?;
        writer.add_file(ODF_MANIFEST, manifest(self).to_xml().as_bytes())?;

        for payload in media_payloads(self) {
            writer.add_file(payload.name, payload.data)?;
        }

        let entries = writer.entry_count();
        let bytes = writer.finish_to_bytes()?;
        debug!(entries, size = bytes.len(), "presentation package written");
        Ok(bytes)
    }

    /// Write the presentation to `path`, appending `.odp` when the name does
    /// not already end with it.
    ///
    /// # Errors
    ///
    /// Propagates serialization errors and [`crate::Error::Io`] from the
    /// filesystem.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = with_odp_extension(path.as_ref());
        let bytes = self.save_stream()?;
        std::fs::write(&path, bytes)?;
        debug!(path = %path.display(), "presentation saved");
        Ok(path)
    }
}

/// The extension check is a case-sensitive suffix test on the file name.
fn with_odp_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(ODP_EXTENSION));
    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(ODP_EXTENSION);
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_appended() {
        assert_eq!(with_odp_extension(Path::new("deck")), PathBuf::from("deck.odp"));
        assert_eq!(with_odp_extension(Path::new("out/deck.odp")), PathBuf::from("out/deck.odp"));
        assert_eq!(with_odp_extension(Path::new("deck.ODP")), PathBuf::from("deck.ODP.odp"));
        assert_eq!(with_odp_extension(Path::new("v1.2")), PathBuf::from("v1.2.odp"));
    }

    #[test]
    fn test_save_stream_is_pure() {
        let mut presentation = Presentation::new();
        presentation.add_slide("Title", "Body");
        let first = presentation.save_stream().unwrap();
        let second = presentation.save_stream().unwrap();
        assert_eq!(first, second);
        assert_eq!(presentation.slide_count(), 1);
    }
}
