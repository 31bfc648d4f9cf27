//! Emitters for the XML members of an ODP package.
//!
//! Each emitter is a pure function of the [`Presentation`]. The media list in
//! [`media_payloads`] is the single source for both the manifest and the binary
//! entries the assembler writes, which keeps the two in agreement.

mod configurations;
mod content;
mod manifest;
mod settings;
mod styles;

pub use configurations::configurations_xml;
pub use content::content_xml;
pub use manifest::manifest;
pub use settings::settings_xml;
pub use styles::styles_xml;

use crate::odf::constants::SLIDE_BACKGROUND_PREFIX;
use crate::odf::odp::Presentation;
use crate::odf::odp::slide::Background;

/// Namespace declarations shared by the content and styles roots.
pub(crate) const DOCUMENT_NAMESPACES: &str = concat!(
    r#"xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" "#,
    r#"xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" "#,
    r#"xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" "#,
    r#"xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" "#,
    r#"xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0" "#,
    r#"xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" "#,
    r#"xmlns:xlink="http://www.w3.org/1999/xlink" "#,
    r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
    r#"xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" "#,
    r#"xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0" "#,
    r#"xmlns:presentation="urn:oasis:names:tc:opendocument:xmlns:presentation:1.0" "#,
    r#"xmlns:svg="urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0" "#,
    r#"xmlns:chart="urn:oasis:names:tc:opendocument:xmlns:chart:1.0" "#,
    r#"xmlns:dr3d="urn:oasis:names:tc:opendocument:xmlns:dr3d:1.0" "#,
    r#"xmlns:math="http://www.w3.org/1998/Math/MathML" "#,
    r#"xmlns:form="urn:oasis:names:tc:opendocument:xmlns:form:1.0" "#,
    r#"xmlns:script="urn:oasis:names:tc:opendocument:xmlns:script:1.0" "#,
    r#"xmlns:ooo="http://openoffice.org/2004/office" "#,
    r#"xmlns:dom="http://www.w3.org/2001/xml-events""#,
);

/// Name shared by a slide's background fill image and its page style.
#[inline]
pub(crate) fn slide_background_name(slide_index: usize) -> String {
    format!("{SLIDE_BACKGROUND_PREFIX}{slide_index}")
}

/// `style:drawing-page-properties` fill attributes for `background`.
///
/// Image backgrounds reference the `draw:fill-image` named `fill_image`.
pub(crate) fn background_fill_attrs(background: &Background, fill_image: &str) -> String {
    match background {
        Background::Image { .. } => format!(
            r#"draw:fill="bitmap" draw:fill-image-name="{fill_image}" style:repeat="stretch" draw:background-size="full""#
        ),
        Background::Color(color) => format!(r#"draw:fill="solid" draw:fill-color="{color}""#),
    }
}

/// A binary member of the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaPayload<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
}

/// Every binary member in archive order: the presentation background, each
/// slide background in slide order, then each slide's images in insertion order.
pub fn media_payloads(presentation: &Presentation) -> Vec<MediaPayload<'_>> {
    let slide_backgrounds = presentation
        .slides()
        .iter()
        .filter_map(|slide| slide.background());
    let backgrounds = presentation
        .background()
        .into_iter()
        .chain(slide_backgrounds)
        .filter_map(|background| match background {
            Background::Image { name, data } => Some(MediaPayload { name, data }),
            Background::Color(_) => None,
        });

    let images = presentation
        .slides()
        .iter()
        .flat_map(|slide| slide.images())
        .map(|image| MediaPayload {
            name: &image.name,
            data: &image.data,
        });

    backgrounds.chain(images).collect()
}
