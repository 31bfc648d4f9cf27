//! ODF manifest generation.
//!
//! `META-INF/manifest.xml` lists every member of the package with its media
//! type. Consumers refuse packages whose manifest names members that are missing,
//! so entries are registered from the same model the assembler writes from.

use crate::common::xml::escape_xml;
use crate::odf::constants::media_type_for_path;

/// Entry in the ODF manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub full_path: String,
    pub media_type: String,
}

/// In-memory manifest of an ODF package.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Create a manifest whose root entry (`/`) carries the document MIME type.
    pub fn new(root_media_type: &str) -> Self {
        let mut manifest = Self::default();
        manifest.add("/", root_media_type);
        manifest
    }

    /// Register an entry with an explicit media type.
    pub fn add(&mut self, full_path: impl Into<String>, media_type: impl Into<String>) {
        self.entries.push(ManifestEntry {
            full_path: full_path.into(),
            media_type: media_type.into(),
        });
    }

    /// Register an entry, deriving its media type from the path extension.
    pub fn add_path(&mut self, full_path: &str) {
        self.add(full_path, media_type_for_path(full_path));
    }

    /// Registered entries, in insertion order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Render `META-INF/manifest.xml`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(160 + self.entries.len() * 96);
        xml.push_str(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
"#,
        );
        for entry in &self.entries {
            xml.push_str(&format!(
                " <manifest:file-entry manifest:media-type=\"{}\" manifest:full-path=\"{}\"/>\n",
                escape_xml(&entry.media_type),
                escape_xml(&entry.full_path)
            ));
        }
        xml.push_str("</manifest:manifest>\n");
        xml
    }
}
