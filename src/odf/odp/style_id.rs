//! Deterministic style names derived from style values.
//!
//! Names are a pure function of the formatting they describe, so equal text
//! styles share one definition and repeated saves emit identical documents.

use sha2::{Digest, Sha256};

use crate::common::{ParagraphProperties, TextStyle};
use crate::odf::constants::DEFAULT_PARAGRAPH_STYLE;

const TEXT_STYLE_PREFIX: &str = "T";
const SEPARATOR: &str = "_";
/// Bytes of the field digest appended to text style names
const DIGEST_LEN: usize = 6;

/// Name of the text style definition for `style`.
///
/// The readable part lists the fields that are set: font size (`18.00pt` →
/// `18_00pt`), font family, color (without `#`, lowercase), then the `bold`
/// and `italic` flags. Characters that cannot appear in an XML name become
/// `_`, so the readable part alone may be shared by different styles; a digest
/// of the exact field values follows it and keeps those names apart.
///
/// ```
/// use odpgen::common::TextStyle;
/// use odpgen::odf::odp::text_style_name;
///
/// let style = TextStyle::new(32.0, "Liberation Sans", "#000000").bold();
/// let same = TextStyle::new(32.0, "Liberation Sans", "000000").bold();
/// assert_eq!(text_style_name(&style), text_style_name(&same));
/// assert!(text_style_name(&style).starts_with("T_32_00pt_Liberation_Sans_000000_bold_"));
/// ```
pub fn text_style_name(style: &TextStyle) -> String {
    let size = style.font_size_attr();
    let color = style.normalized_color();

    let mut parts: Vec<String> = vec![TEXT_STYLE_PREFIX.to_string()];
    if let Some(size) = &size {
        parts.push(sanitize(size));
    }
    if !style.font_family.is_empty() {
        parts.push(sanitize(&style.font_family));
    }
    if let Some(color) = &color {
        parts.push(sanitize(&color.trim_start_matches('#').to_lowercase()));
    }
    if style.bold {
        parts.push("bold".to_string());
    }
    if style.italic {
        parts.push("italic".to_string());
    }

    let mut hasher = Sha256::new();
    for field in [size.as_deref(), Some(style.font_family.as_str()), color.as_deref()] {
        match field {
            Some(value) => {
                hasher.update([1u8]);
                hasher.update((value.len() as u64).to_le_bytes());
                hasher.update(value.as_bytes());
            },
            None => hasher.update([0u8]),
        }
    }
    hasher.update([u8::from(style.bold), u8::from(style.italic)]);
    let digest = hasher.finalize();
    parts.push(digest.iter().take(DIGEST_LEN).map(|b| format!("{b:02x}")).collect());

    parts.join(SEPARATOR)
}

/// Name of the paragraph style for a text box.
///
/// Paragraph properties are scoped by slide index and the text box's z-index
/// rather than deduplicated; only properties with no horizontal alignment and
/// zero indents collapse onto the shared default style.
///
/// ```
/// use odpgen::common::{HorizontalAlign, ParagraphProperties, VerticalAlign};
/// use odpgen::odf::odp::paragraph_style_name;
///
/// let props = ParagraphProperties::aligned(HorizontalAlign::Center, VerticalAlign::Middle);
/// assert_eq!(paragraph_style_name(0, 1, &props), "P0_1_hcenter_l0_00_r0_00_f0_00");
/// assert_eq!(paragraph_style_name(4, 9, &ParagraphProperties::default()), "Pdefault");
/// ```
pub fn paragraph_style_name(
    slide_index: usize,
    z_index: u32,
    properties: &ParagraphProperties,
) -> String {
    if properties.is_paragraph_default() {
        return DEFAULT_PARAGRAPH_STYLE.to_string();
    }

    let mut parts: Vec<String> = Vec::with_capacity(4);
    if let Some(align) = properties.horizontal_align {
        parts.push(format!("h{align}"));
    }
    parts.push(format!("l{:.2}", properties.left_indent));
    parts.push(format!("r{:.2}", properties.right_indent));
    parts.push(format!("f{:.2}", properties.first_line_indent));

    sanitize(&format!(
        "P{slide_index}{SEPARATOR}{z_index}{SEPARATOR}{}",
        parts.join(SEPARATOR)
    ))
}

/// Graphic style of a text frame, chosen by vertical alignment.
pub fn frame_style_name(properties: &ParagraphProperties) -> &'static str {
    use crate::common::VerticalAlign;

    match properties.vertical_align {
        Some(VerticalAlign::Top) => "V1",
        Some(VerticalAlign::Middle) => "V2",
        Some(VerticalAlign::Bottom) => "V3",
        None => crate::odf::constants::DEFAULT_GRAPHIC_STYLE,
    }
}

// Keeps '-' so negative indents stay distinct from positive ones.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if is_name_char(c) { c } else { '_' })
        .collect()
}

/// Letters and digits allowed in an XML name after its first character.
fn is_name_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '-';
    }
    c.is_alphanumeric()
        && matches!(c as u32,
            0xC0..=0xD6
            | 0xD8..=0xF6
            | 0xF8..=0x37D
            | 0x37F..=0x1FFF
            | 0x2070..=0x218F
            | 0x2C00..=0x2FEF
            | 0x3001..=0xD7FF
            | 0xF900..=0xFDCF
            | 0xFDF0..=0xFFFD
            | 0x10000..=0xEFFFF)
}
