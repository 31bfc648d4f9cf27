//! Slide and drawable element structures for ODP presentations.

use crate::common::{Length, ParagraphProperties, RGBColor, TextStyle};
use crate::odf::odp::zorder::{self, Drawable};
use tracing::warn;

/// Opaque handle to a slide, issued by the presentation that owns it.
///
/// Handles stay valid for the lifetime of their presentation because slides are
/// never removed or reordered. A handle presented to a different presentation is
/// rejected with [`crate::Error::InvalidReference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideRef {
    pub(crate) owner: u64,
    pub(crate) index: usize,
}

impl SlideRef {
    /// 0-based position of the slide in its presentation.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Position and size of a drawable element, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `(svg:x, svg:y, svg:width, svg:height)` attribute values.
    pub fn svg_attrs(&self) -> [String; 4] {
        [
            Length::cm(self.x).to_string(),
            Length::cm(self.y).to_string(),
            Length::cm(self.width).to_string(),
            Length::cm(self.height).to_string(),
        ]
    }
}

/// A text box placed on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    /// Raw text; escaped when the content part is emitted
    pub content: String,
    pub placement: Placement,
    /// Snapshot of the slide's style cursor at insertion time
    pub style: TextStyle,
    pub properties: ParagraphProperties,
    pub z_index: u32,
}

/// An image placed on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub data: Vec<u8>,
    pub placement: Placement,
    /// Archive path, e.g. `Pictures/slide0_image1.png`
    pub name: String,
    pub z_index: u32,
}

/// Fill of a slide (or of every slide, at presentation level).
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// Stretched bitmap stored in the package under `name`
    Image { name: String, data: Vec<u8> },
    /// Solid fill
    Color(RGBColor),
}

impl Background {
    /// Archive path of the payload for image backgrounds.
    pub fn image_name(&self) -> Option<&str> {
        match self {
            Background::Image { name, .. } => Some(name),
            Background::Color(_) => None,
        }
    }
}

/// A slide in an ODP presentation.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    pub(crate) index: usize,
    pub(crate) text_boxes: Vec<TextBox>,
    pub(crate) images: Vec<Image>,
    pub(crate) background: Option<Background>,
    /// Style used by the next text box inserted on this slide
    pub(crate) current_style: TextStyle,
    /// Highest stacking index assigned so far (0 when nothing was placed)
    pub(crate) max_z_index: u32,
}

impl Slide {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Get the slide index.
    ///
    /// Returns the 0-based index of this slide in the presentation.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Text boxes in insertion order.
    pub fn text_boxes(&self) -> &[TextBox] {
        &self.text_boxes
    }

    /// Images in insertion order.
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Slide-level background override, if any.
    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Style that the next text box will be created with.
    pub fn current_style(&self) -> &TextStyle {
        &self.current_style
    }

    /// Text boxes and images merged into paint order.
    pub fn drawables(&self) -> Vec<Drawable<'_>> {
        zorder::resolve(&self.text_boxes, &self.images)
    }

    /// Assign the stacking index of a new element.
    ///
    /// Without an explicit value the element goes on top of everything placed so
    /// far. Explicit values are taken as-is; ties are broken by insertion order at
    /// paint time.
    pub(crate) fn next_z_index(&mut self, explicit: Option<u32>) -> u32 {
        let z_index = match explicit {
            Some(z_index) => {
                let occupied = !self.text_boxes.is_empty() || !self.images.is_empty();
                if occupied && z_index <= self.max_z_index {
                    warn!(
                        slide = self.index,
                        z_index,
                        max_z_index = self.max_z_index,
                        "explicit z-index does not stack above existing elements; insertion order breaks the tie"
                    );
                }
                z_index
            },
            None => self.max_z_index.saturating_add(1),
        };
        self.max_z_index = self.max_z_index.max(z_index);
        z_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_z_index_follows_highest() {
        let mut slide = Slide::new(0);
        assert_eq!(slide.next_z_index(None), 1);
        assert_eq!(slide.next_z_index(Some(7)), 7);
        assert_eq!(slide.next_z_index(Some(2)), 2);
        // highest assigned is still 7
        assert_eq!(slide.next_z_index(None), 8);
    }

    #[test]
    fn test_explicit_zero_on_empty_slide() {
        let mut slide = Slide::new(3);
        assert_eq!(slide.next_z_index(Some(0)), 0);
        assert_eq!(slide.next_z_index(None), 1);
    }

    #[test]
    fn test_svg_attrs() {
        let attrs = Placement::new(2.0, 1.0, 29.867, 3.506).svg_attrs();
        assert_eq!(attrs, ["2.00cm", "1.00cm", "29.87cm", "3.51cm"]);
    }

    #[test]
    fn test_background_image_name() {
        let image = Background::Image {
            name: "media/background.png".into(),
            data: vec![1],
        };
        assert_eq!(image.image_name(), Some("media/background.png"));
        assert_eq!(Background::Color(RGBColor::new(0, 0, 0)).image_name(), None);
    }
}
