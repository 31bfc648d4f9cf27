//! Paint order of a slide's drawable elements.
//!
//! Text boxes and images live in separate lists but share one stacking order.
//! Elements are painted by ascending z-index; equal indices keep the order in
//! which they appear in the concatenated list (text boxes first, then images).

use crate::odf::odp::slide::{Image, TextBox};

/// A text box or image in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drawable<'a> {
    TextBox(&'a TextBox),
    Image(&'a Image),
}

impl Drawable<'_> {
    #[inline]
    pub fn z_index(&self) -> u32 {
        match self {
            Drawable::TextBox(text_box) => text_box.z_index,
            Drawable::Image(image) => image.z_index,
        }
    }
}

/// Merge text boxes and images into a single sequence sorted by z-index.
///
/// The sort is stable, so elements sharing an index keep their relative order.
pub fn resolve<'a>(text_boxes: &'a [TextBox], images: &'a [Image]) -> Vec<Drawable<'a>> {
    let mut drawables: Vec<Drawable<'a>> = text_boxes
        .iter()
        .map(Drawable::TextBox)
        .chain(images.iter().map(Drawable::Image))
        .collect();
    drawables.sort_by_key(Drawable::z_index);
    drawables
}
