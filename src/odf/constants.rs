//! ODF constants: MIME types, package part paths, fixed style names and the
//! supported image formats.

use phf::{Map, phf_map};

/// ODF version written on every document root
pub const OFFICE_VERSION: &str = "1.2";

// ============================================================================
// MIME TYPES
// ============================================================================

/// MIME type for OpenDocument Presentation (.odp)
pub const ODF_PRESENTATION: &str = "application/vnd.oasis.opendocument.presentation";

/// Media type of every XML part in the manifest
pub const XML_MEDIA_TYPE: &str = "text/xml";

// ============================================================================
// STANDARD ODF PARTS PATHS
// ============================================================================

/// Path to the mimetype entry (must be the first, stored entry)
pub const ODF_MIMETYPE: &str = "mimetype";

/// Path to content.xml (main document content)
pub const ODF_CONTENT: &str = "content.xml";

/// Path to styles.xml (document styles)
pub const ODF_STYLES: &str = "styles.xml";

/// Path to settings.xml (application settings)
pub const ODF_SETTINGS: &str = "settings.xml";

/// Path to the accelerator configuration
pub const ODF_ACCELERATOR: &str = "configurations2/accelerator/current.xml";

/// Path to manifest.xml (package manifest)
pub const ODF_MANIFEST: &str = "META-INF/manifest.xml";

/// File extension of presentations written to disk
pub const ODP_EXTENSION: &str = ".odp";

// ============================================================================
// STYLE NAMES
// ============================================================================

/// Master page shared by every slide
pub const MASTER_PAGE: &str = "Default";
/// Page layout referenced by the master page
pub const PAGE_LAYOUT: &str = "PM1";
/// Drawing-page style for slides without any background
pub const DEFAULT_PAGE_STYLE: &str = "dp1";
/// Drawing-page style for slides inheriting the presentation background
pub const PRESENTATION_BACKGROUND_STYLE: &str = "backgroundStyle";
/// Fill-image declaration of the presentation background
pub const PRESENTATION_BACKGROUND_IMAGE: &str = "backgroundImage";
/// Prefix of per-slide drawing-page styles and fill-image declarations
pub const SLIDE_BACKGROUND_PREFIX: &str = "slideBackground";
/// Graphic style for frames without vertical alignment (and all images)
pub const DEFAULT_GRAPHIC_STYLE: &str = "gr2";
/// Paragraph style shared by all default paragraph properties
pub const DEFAULT_PARAGRAPH_STYLE: &str = "Pdefault";

// ============================================================================
// IMAGES
// ============================================================================

/// Directory of placed images inside the package
pub const PICTURES_DIR: &str = "Pictures";
/// Directory of background images inside the package
pub const MEDIA_DIR: &str = "media";

/// Supported image extension (lowercase, without dot) to manifest media type
pub static IMAGE_MEDIA_TYPES: Map<&'static str, &'static str> = phf_map! {
    "jpg" => "image/jpeg",
    "jpeg" => "image/jpeg",
    "png" => "image/png",
    "gif" => "image/gif",
    "bmp" => "image/bmp",
    "svg" => "image/svg+xml",
};

/// Normalize a caller-supplied image extension to `.ext` lowercase form.
///
/// Surrounding whitespace is ignored and the leading dot is optional.
///
/// # Errors
///
/// Returns [`crate::Error::UnsupportedFormat`] when the extension is not one of
/// jpg, jpeg, png, gif, bmp or svg.
///
/// # Examples
///
/// ```
/// use odpgen::odf::constants::normalize_image_extension;
///
/// assert_eq!(normalize_image_extension("PNG").unwrap(), ".png");
/// assert_eq!(normalize_image_extension(" .Jpeg ").unwrap(), ".jpeg");
/// assert!(normalize_image_extension(".tiff").is_err());
/// ```
pub fn normalize_image_extension(extension: &str) -> crate::Result<String> {
    let lowered = extension.trim().to_ascii_lowercase();
    let bare = lowered.strip_prefix('.').unwrap_or(&lowered);
    if IMAGE_MEDIA_TYPES.contains_key(bare) {
        Ok(format!(".{bare}"))
    } else {
        Err(crate::Error::UnsupportedFormat(extension.to_string()))
    }
}

/// Media type of a package path, judged by its extension.
///
/// ```
/// use odpgen::odf::constants::media_type_for_path;
///
/// assert_eq!(media_type_for_path("Pictures/slide0_image0.jpg"), "image/jpeg");
/// assert_eq!(media_type_for_path("content.xml"), "text/xml");
/// ```
pub fn media_type_for_path(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if extension == "xml" {
        return XML_MEDIA_TYPE;
    }
    IMAGE_MEDIA_TYPES
        .get(extension.as_str())
        .copied()
        .unwrap_or("application/octet-stream")
}
