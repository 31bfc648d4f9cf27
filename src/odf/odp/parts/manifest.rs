//! `META-INF/manifest.xml` for a presentation.

use super::media_payloads;
use crate::odf::constants::{
    ODF_ACCELERATOR, ODF_CONTENT, ODF_PRESENTATION, ODF_SETTINGS, ODF_STYLES, XML_MEDIA_TYPE,
};
use crate::odf::core::Manifest;
use crate::odf::odp::Presentation;

/// Build the manifest listing the XML parts and every embedded image.
pub fn manifest(presentation: &Presentation) -> Manifest {
    let mut manifest = Manifest::new(ODF_PRESENTATION);
    for part in [ODF_CONTENT, ODF_STYLES, ODF_SETTINGS, ODF_ACCELERATOR] {
        manifest.add(part, XML_MEDIA_TYPE);
    }
    for payload in media_payloads(presentation) {
        manifest.add_path(payload.name);
    }
    manifest
}
