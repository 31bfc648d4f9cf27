//! Character and paragraph formatting for text boxes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::RGBColor;

/// Character formatting applied to the text of a text box.
///
/// Unset fields are simply omitted from the emitted `style:text-properties`.
/// Two styles with equal field values always share one style definition in the
/// package.
///
/// # Examples
///
/// ```rust
/// use odpgen::common::TextStyle;
///
/// let style = TextStyle::new(24.0, "Liberation Serif", "#333333").bold();
/// assert_eq!(style.font_size_attr().as_deref(), Some("24.00pt"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: Option<f64>,
    /// Font family name; empty means inherit
    pub font_family: String,
    /// Text color as written by the caller; empty means inherit
    pub color: String,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    /// Create a regular (non-bold, non-italic) style.
    pub fn new(font_size: f64, font_family: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            font_size: Some(font_size),
            font_family: font_family.into(),
            color: color.into(),
            bold: false,
            italic: false,
        }
    }

    /// Builder: enable bold.
    #[inline]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: enable italic.
    #[inline]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// `fo:font-size` value, e.g. `18.00pt`.
    pub fn font_size_attr(&self) -> Option<String> {
        self.font_size.map(|size| format!("{size:.2}pt"))
    }

    /// `fo:color` value, or `None` when the color is unset.
    ///
    /// Hex colors are normalized to `#RRGGBB` regardless of case or a missing
    /// `#`; anything else is passed through trimmed.
    pub fn normalized_color(&self) -> Option<String> {
        let raw = self.color.trim();
        if raw.is_empty() {
            return None;
        }
        Some(
            RGBColor::parse(raw)
                .map(|color| color.to_string())
                .unwrap_or_else(|_| raw.to_string()),
        )
    }
}

/// Horizontal text alignment inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl HorizontalAlign {
    /// Value of `fo:text-align`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
            HorizontalAlign::Justify => "justify",
        }
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical anchoring of text inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// Value of `draw:textarea-vertical-align`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

/// Paragraph layout of a text box: alignment and indents (centimeters).
///
/// [`ParagraphProperties::default`] sets nothing at all, which maps to the shared
/// default paragraph style. Text boxes added without explicit properties use
/// [`ParagraphProperties::text_box_default`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParagraphProperties {
    pub horizontal_align: Option<HorizontalAlign>,
    pub vertical_align: Option<VerticalAlign>,
    pub left_indent: f64,
    pub right_indent: f64,
    pub first_line_indent: f64,
}

impl ParagraphProperties {
    /// Left/top aligned with zero indents.
    pub const fn text_box_default() -> Self {
        Self {
            horizontal_align: Some(HorizontalAlign::Left),
            vertical_align: Some(VerticalAlign::Top),
            left_indent: 0.0,
            right_indent: 0.0,
            first_line_indent: 0.0,
        }
    }

    /// Properties with the given alignments and zero indents.
    pub const fn aligned(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal_align: Some(horizontal),
            vertical_align: Some(vertical),
            left_indent: 0.0,
            right_indent: 0.0,
            first_line_indent: 0.0,
        }
    }

    /// Builder: set left, right and first-line indents.
    pub fn with_indents(mut self, left: f64, right: f64, first_line: f64) -> Self {
        self.left_indent = left;
        self.right_indent = right;
        self.first_line_indent = first_line;
        self
    }

    /// No horizontal alignment and all indents zero.
    ///
    /// Vertical alignment is a frame property and does not participate.
    pub fn is_paragraph_default(&self) -> bool {
        self.horizontal_align.is_none()
            && self.left_indent == 0.0
            && self.right_indent == 0.0
            && self.first_line_indent == 0.0
    }
}
