//! Core ODF packaging functionality.
//!
//! - `writer` - [`PackageWriter`], the ZIP container with ODF entry rules
//! - `manifest` - [`Manifest`], the `META-INF/manifest.xml` generator

/// ODF manifest generation
mod manifest;
/// ODF package writing
mod writer;

pub use manifest::{Manifest, ManifestEntry};
pub use writer::PackageWriter;
