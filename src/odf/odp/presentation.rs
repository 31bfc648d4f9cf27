//! The in-memory presentation and its mutation API.

use crate::common::{
    Error, HorizontalAlign, ParagraphProperties, RGBColor, Result, TextStyle, VerticalAlign,
};
use crate::odf::constants::{MEDIA_DIR, PICTURES_DIR, normalize_image_extension};
use crate::odf::odp::options::WriteOptions;
use crate::odf::odp::size::{SlidePreset, SlideSize};
use crate::odf::odp::slide::{Background, Image, Placement, Slide, SlideRef, TextBox};
use std::sync::atomic::{AtomicU64, Ordering};

// Tags slide handles with the presentation that issued them.
static NEXT_PRESENTATION_ID: AtomicU64 = AtomicU64::new(1);

const DEFAULT_FONT_FAMILY: &str = "Liberation Sans";
const DEFAULT_TEXT_COLOR: &str = "#000000";
/// Horizontal margin on each side of the default title and body frames
const LAYOUT_MARGIN: f64 = 2.0;
const TITLE_Y: f64 = 1.0;
const TITLE_HEIGHT: f64 = 3.506;
const TITLE_FONT_SIZE: f64 = 32.0;
const BODY_Y: f64 = 5.5;
const BODY_HEIGHT: f64 = 13.23;
const BODY_FONT_SIZE: f64 = 18.0;

/// An OpenDocument presentation under construction.
///
/// Slides are appended through [`add_slide`](Self::add_slide) or
/// [`add_blank_slide`](Self::add_blank_slide), which return a [`SlideRef`] used
/// by every per-slide operation. Serialization (`save_stream`, `save`) only
/// reads the model.
///
/// # Examples
///
/// ```
/// use odpgen::odf::odp::Presentation;
///
/// # fn main() -> odpgen::Result<()> {
/// let mut presentation = Presentation::new();
/// let slide = presentation.add_slide("Welcome", "First point\nSecond point");
/// presentation.set_slide_background_color(slide, "#1E1E1E")?;
/// let bytes = presentation.save_stream()?;
/// assert!(bytes.starts_with(b"PK"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Presentation {
    id: u64,
    slide_size: SlideSize,
    background: Option<Background>,
    slides: Vec<Slide>,
    options: WriteOptions,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Create an empty 16:9 presentation without background.
    pub fn new() -> Self {
        Self {
            id: NEXT_PRESENTATION_ID.fetch_add(1, Ordering::Relaxed),
            slide_size: SlideSize::default(),
            background: None,
            slides: Vec::new(),
            options: WriteOptions::default(),
        }
    }

    // ------------------------------------------------------------------
    // Size
    // ------------------------------------------------------------------

    /// Set the slide size from a named preset (`"16:9"` or `"4:3"`).
    ///
    /// Unrecognized names fall back to 16:9.
    pub fn set_slide_size(&mut self, preset: &str) {
        let preset: SlidePreset = preset.parse().unwrap_or_default();
        self.slide_size = preset.size();
    }

    /// Set an arbitrary slide size in centimeters.
    ///
    /// The values are not validated here; image placement checks bounds against
    /// whatever size is current.
    pub fn set_custom_slide_size(&mut self, width: f64, height: f64) {
        self.slide_size = SlideSize::new(width, height);
    }

    pub fn slide_size(&self) -> SlideSize {
        self.slide_size
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    pub fn set_write_options(&mut self, options: WriteOptions) {
        self.options = options;
    }

    pub fn write_options(&self) -> &WriteOptions {
        &self.options
    }

    // ------------------------------------------------------------------
    // Slides
    // ------------------------------------------------------------------

    /// Append a slide with an optional title and body.
    ///
    /// A non-empty `title` becomes a centered, bold 32pt frame at (2cm, 1cm)
    /// spanning the slide width minus 4cm. A non-empty `content` becomes a
    /// left/top aligned 18pt frame at (2cm, 5.5cm). The slide's style cursor is
    /// left at the last default style applied.
    pub fn add_slide(&mut self, title: &str, content: &str) -> SlideRef {
        let slide_ref = self.add_blank_slide();
        let frame_width = self.slide_size.width - 2.0 * LAYOUT_MARGIN;
        let slide = &mut self.slides[slide_ref.index];

        if !title.is_empty() {
            slide.current_style =
                TextStyle::new(TITLE_FONT_SIZE, DEFAULT_FONT_FAMILY, DEFAULT_TEXT_COLOR).bold();
            Self::push_text_box(
                slide,
                title,
                Placement::new(LAYOUT_MARGIN, TITLE_Y, frame_width, TITLE_HEIGHT),
                ParagraphProperties::aligned(HorizontalAlign::Center, VerticalAlign::Middle),
                None,
            );
        }

        if !content.is_empty() {
            slide.current_style =
                TextStyle::new(BODY_FONT_SIZE, DEFAULT_FONT_FAMILY, DEFAULT_TEXT_COLOR);
            Self::push_text_box(
                slide,
                content,
                Placement::new(LAYOUT_MARGIN, BODY_Y, frame_width, BODY_HEIGHT),
                ParagraphProperties::aligned(HorizontalAlign::Left, VerticalAlign::Top),
                None,
            );
        }

        slide_ref
    }

    /// Append an empty slide.
    pub fn add_blank_slide(&mut self) -> SlideRef {
        let index = self.slides.len();
        self.slides.push(Slide::new(index));
        SlideRef {
            owner: self.id,
            index,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// All slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Look up a slide by handle.
    pub fn slide(&self, slide: SlideRef) -> Result<&Slide> {
        let index = self.check_ref(slide)?;
        Ok(&self.slides[index])
    }

    /// Presentation-wide background, if any.
    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Replace the style cursor of a slide.
    ///
    /// Only text boxes added afterwards use the new style; existing text boxes
    /// keep the snapshot they were created with.
    pub fn set_text_style(&mut self, slide: SlideRef, style: TextStyle) -> Result<()> {
        let index = self.check_ref(slide)?;
        self.slides[index].current_style = style;
        Ok(())
    }

    /// Add a text box using the slide's current style.
    ///
    /// `properties` defaults to left/top alignment with zero indents. `z_index`
    /// defaults to one above the highest index used on the slide; explicit
    /// values may repeat or go backwards.
    #[allow(clippy::too_many_arguments)]
    pub fn add_text_box(
        &mut self,
        slide: SlideRef,
        content: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        properties: Option<ParagraphProperties>,
        z_index: Option<u32>,
    ) -> Result<()> {
        let index = self.check_ref(slide)?;
        Self::push_text_box(
            &mut self.slides[index],
            content,
            Placement::new(x, y, width, height),
            properties.unwrap_or_else(ParagraphProperties::text_box_default),
            z_index,
        );
        Ok(())
    }

    fn push_text_box(
        slide: &mut Slide,
        content: &str,
        placement: Placement,
        properties: ParagraphProperties,
        z_index: Option<u32>,
    ) {
        let z_index = slide.next_z_index(z_index);
        let style = slide.current_style.clone();
        slide.text_boxes.push(TextBox {
            content: content.to_string(),
            placement,
            style,
            properties,
            z_index,
        });
    }

    // ------------------------------------------------------------------
    // Images
    // ------------------------------------------------------------------

    /// Place an image on a slide.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidReference`] if `slide` was issued by another presentation
    /// - [`Error::UnsupportedFormat`] unless the extension is jpg, jpeg, png, gif,
    ///   bmp or svg (case-insensitive, dot optional)
    /// - [`Error::EmptyPayload`] if `data` is empty
    /// - [`Error::InvalidDimensions`] if `width` or `height` is not positive
    /// - [`Error::OutOfBounds`] if the image does not lie fully on the slide
    #[allow(clippy::too_many_arguments)]
    pub fn add_image(
        &mut self,
        slide: SlideRef,
        data: Vec<u8>,
        extension: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        z_index: Option<u32>,
    ) -> Result<()> {
        let index = self.check_ref(slide)?;
        let extension = validate_payload(&data, extension)?;

        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidDimensions { width, height });
        }

        let SlideSize {
            width: slide_width,
            height: slide_height,
        } = self.slide_size;
        if x < 0.0 || y < 0.0 || x + width > slide_width || y + height > slide_height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
                slide_width,
                slide_height,
            });
        }

        let slide = &mut self.slides[index];
        let name = format!(
            "{PICTURES_DIR}/slide{index}_image{}{extension}",
            slide.images.len()
        );
        let z_index = slide.next_z_index(z_index);
        slide.images.push(Image {
            data,
            placement: Placement::new(x, y, width, height),
            name,
            z_index,
        });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Backgrounds
    // ------------------------------------------------------------------

    /// Use an image as background of every slide without its own background.
    ///
    /// Stored as `media/background.<ext>`.
    pub fn set_background_image(&mut self, data: Vec<u8>, extension: &str) -> Result<()> {
        let extension = validate_payload(&data, extension)?;
        self.background = Some(Background::Image {
            name: format!("{MEDIA_DIR}/background{extension}"),
            data,
        });
        Ok(())
    }

    /// Use an image as background of one slide.
    ///
    /// Stored as `media/slide<N>_background.<ext>`.
    pub fn set_slide_background(
        &mut self,
        slide: SlideRef,
        data: Vec<u8>,
        extension: &str,
    ) -> Result<()> {
        let index = self.check_ref(slide)?;
        let extension = validate_payload(&data, extension)?;
        self.slides[index].background = Some(Background::Image {
            name: format!("{MEDIA_DIR}/slide{index}_background{extension}"),
            data,
        });
        Ok(())
    }

    /// Use a solid `#RRGGBB` color as background of every slide without its own
    /// background. The `#` is optional and hex digits may use either case.
    pub fn set_background_color(&mut self, color: &str) -> Result<()> {
        self.background = Some(Background::Color(RGBColor::parse(color)?));
        Ok(())
    }

    /// Use a solid `#RRGGBB` color as background of one slide.
    pub fn set_slide_background_color(&mut self, slide: SlideRef, color: &str) -> Result<()> {
        let index = self.check_ref(slide)?;
        let color = RGBColor::parse(color)?;
        self.slides[index].background = Some(Background::Color(color));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn check_ref(&self, slide: SlideRef) -> Result<usize> {
        if slide.owner == self.id && slide.index < self.slides.len() {
            Ok(slide.index)
        } else {
            Err(Error::InvalidReference)
        }
    }
}

/// Shared extension and payload checks for images and backgrounds.
fn validate_payload(data: &[u8], extension: &str) -> Result<String> {
    let extension = normalize_image_extension(extension)?;
    if data.is_empty() {
        return Err(Error::EmptyPayload);
    }
    Ok(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_new_presentation() {
        let presentation = Presentation::new();
        assert_eq!(presentation.slide_count(), 0);
        assert_eq!(presentation.slide_size(), SlideSize::new(33.867, 19.05));
        assert!(presentation.background().is_none());
    }

    #[test]
    fn test_slide_size_presets() {
        let mut presentation = Presentation::new();
        presentation.set_slide_size("4:3");
        assert_eq!(presentation.slide_size(), SlideSize::STANDARD);
        presentation.set_slide_size("21:9");
        assert_eq!(presentation.slide_size(), SlideSize::WIDESCREEN);
        presentation.set_custom_slide_size(10.0, 7.5);
        assert_eq!(presentation.slide_size(), SlideSize::new(10.0, 7.5));
    }

    #[test]
    fn test_title_layout() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_slide("T", "");
        let slide = presentation.slide(slide).unwrap();

        assert_eq!(slide.text_boxes().len(), 1);
        let title = &slide.text_boxes()[0];
        assert_eq!(title.placement.x, 2.0);
        assert_eq!(title.placement.y, 1.0);
        assert!((title.placement.width - 29.867).abs() < 1e-9);
        assert_eq!(title.placement.height, 3.506);
        assert!(title.style.bold);
        assert_eq!(title.style.font_size, Some(32.0));
        assert_eq!(title.properties.horizontal_align, Some(HorizontalAlign::Center));
        assert_eq!(title.properties.vertical_align, Some(VerticalAlign::Middle));
    }

    #[test]
    fn test_title_and_body() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_slide("Title", "Body");
        let slide = presentation.slide(slide).unwrap();

        let boxes = slide.text_boxes();
        assert_eq!(boxes.len(), 2);
        assert_eq!((boxes[0].z_index, boxes[1].z_index), (1, 2));
        assert_eq!(boxes[1].placement.y, 5.5);
        assert_eq!(boxes[1].placement.height, 13.23);
        assert_eq!(boxes[1].style.font_size, Some(18.0));
        assert!(!boxes[1].style.bold);
        // cursor left at the body style
        assert_eq!(slide.current_style(), &boxes[1].style);
    }

    #[test]
    fn test_empty_slide() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_slide("", "");
        assert!(presentation.slide(slide).unwrap().text_boxes().is_empty());
        let blank = presentation.add_blank_slide();
        assert_eq!(blank.index(), 1);
    }

    #[test]
    fn test_style_snapshot() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();
        let red = TextStyle::new(20.0, "Arial", "#FF0000");
        presentation.set_text_style(slide, red.clone()).unwrap();
        presentation
            .add_text_box(slide, "one", 1.0, 1.0, 5.0, 1.0, None, None)
            .unwrap();
        presentation
            .set_text_style(slide, TextStyle::new(10.0, "Arial", "#0000FF"))
            .unwrap();

        let boxes = presentation.slide(slide).unwrap().text_boxes();
        assert_eq!(boxes[0].style, red);
        assert_eq!(boxes[0].properties, ParagraphProperties::text_box_default());
    }

    #[test]
    fn test_foreign_slide_ref() {
        let mut a = Presentation::new();
        let mut b = Presentation::new();
        let slide_a = a.add_blank_slide();
        b.add_blank_slide();

        assert!(matches!(
            b.add_image(slide_a, PNG.to_vec(), "png", 0.0, 0.0, 1.0, 1.0, None),
            Err(Error::InvalidReference)
        ));
        assert!(matches!(
            b.set_slide_background_color(slide_a, "#000000"),
            Err(Error::InvalidReference)
        ));
        assert!(matches!(
            b.set_text_style(slide_a, TextStyle::default()),
            Err(Error::InvalidReference)
        ));
        assert!(b.slide(slide_a).is_err());
    }

    #[test]
    fn test_image_bounds() {
        let mut presentation = Presentation::new();
        presentation.set_custom_slide_size(10.0, 10.0);
        let slide = presentation.add_blank_slide();

        assert!(matches!(
            presentation.add_image(slide, PNG.to_vec(), ".png", 9.0, 0.0, 5.0, 5.0, None),
            Err(Error::OutOfBounds { .. })
        ));
        presentation
            .add_image(slide, PNG.to_vec(), ".png", 9.0, 0.0, 1.0, 5.0, None)
            .unwrap();
        assert!(matches!(
            presentation.add_image(slide, PNG.to_vec(), ".png", -0.1, 0.0, 1.0, 1.0, None),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_image_validation_order() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();

        assert!(matches!(
            presentation.add_image(slide, PNG.to_vec(), ".tiff", 0.0, 0.0, 1.0, 1.0, None),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            presentation.add_image(slide, Vec::new(), "png", 0.0, 0.0, 1.0, 1.0, None),
            Err(Error::EmptyPayload)
        ));
        assert!(matches!(
            presentation.add_image(slide, PNG.to_vec(), "png", 0.0, 0.0, 0.0, 1.0, None),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            presentation.add_image(slide, PNG.to_vec(), "png", 0.0, 0.0, 1.0, f64::NAN, None),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(presentation.slide(slide).unwrap().images().is_empty());
    }

    #[test]
    fn test_image_names() {
        let mut presentation = Presentation::new();
        presentation.add_blank_slide();
        let slide = presentation.add_blank_slide();
        presentation
            .add_image(slide, PNG.to_vec(), "PNG", 0.0, 0.0, 1.0, 1.0, None)
            .unwrap();
        presentation
            .add_image(slide, vec![0xFF, 0xD8], ".JPG", 0.0, 0.0, 1.0, 1.0, None)
            .unwrap();

        let names: Vec<_> = presentation
            .slide(slide)
            .unwrap()
            .images()
            .iter()
            .map(|image| image.name.as_str())
            .collect();
        assert_eq!(names, ["Pictures/slide1_image0.png", "Pictures/slide1_image1.jpg"]);
    }

    #[test]
    fn test_z_order_stability() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();
        presentation
            .add_text_box(slide, "a", 0.0, 0.0, 1.0, 1.0, None, Some(2))
            .unwrap();
        presentation
            .add_image(slide, PNG.to_vec(), "png", 0.0, 0.0, 1.0, 1.0, None)
            .unwrap();
        presentation
            .add_text_box(slide, "b", 0.0, 0.0, 1.0, 1.0, None, Some(2))
            .unwrap();

        let slide = presentation.slide(slide).unwrap();
        assert_eq!(slide.images()[0].z_index, 3);
        let order: Vec<u32> = slide.drawables().iter().map(|d| d.z_index()).collect();
        assert_eq!(order, [2, 2, 3]);
        match (slide.drawables()[0], slide.drawables()[1]) {
            (
                crate::odf::odp::Drawable::TextBox(first),
                crate::odf::odp::Drawable::TextBox(second),
            ) => {
                assert_eq!(first.content, "a");
                assert_eq!(second.content, "b");
            },
            other => panic!("unexpected order {other:?}"),
        }
    }

    #[test]
    fn test_backgrounds() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();

        presentation.set_background_image(PNG.to_vec(), "PNG").unwrap();
        assert_eq!(
            presentation.background().and_then(Background::image_name),
            Some("media/background.png")
        );

        presentation.set_slide_background(slide, PNG.to_vec(), "svg").unwrap();
        assert_eq!(
            presentation.slide(slide).unwrap().background().and_then(Background::image_name),
            Some("media/slide0_background.svg")
        );

        assert!(matches!(
            presentation.set_background_image(Vec::new(), "png"),
            Err(Error::EmptyPayload)
        ));
        assert!(matches!(
            presentation.set_slide_background(slide, PNG.to_vec(), "webp"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_background_colors() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();

        assert!(matches!(
            presentation.set_slide_background_color(slide, "FF00GG"),
            Err(Error::InvalidColorFormat(_))
        ));
        assert!(presentation.slide(slide).unwrap().background().is_none());

        presentation.set_slide_background_color(slide, "ff0000").unwrap();
        assert_eq!(
            presentation.slide(slide).unwrap().background(),
            Some(&Background::Color(RGBColor::new(255, 0, 0)))
        );

        presentation.set_background_color("#00ff00").unwrap();
        assert!(presentation.set_background_color("green").is_err());
        assert_eq!(
            presentation.background(),
            Some(&Background::Color(RGBColor::new(0, 255, 0)))
        );
    }
}
