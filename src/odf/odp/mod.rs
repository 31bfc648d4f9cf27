//! OpenDocument Presentation (.odp) generation.
//!
//! A [`Presentation`] is built in memory through its mutation API and
//! serialized with [`Presentation::save_stream`] or [`Presentation::save`].
//! Serialization only reads the model; saving twice without intervening
//! changes yields identical bytes.
//!
//! # Layout of the produced package
//!
//! - `mimetype` (stored, first)
//! - `content.xml`: automatic styles and one `draw:page` per slide
//! - `styles.xml`: fill images, text styles, page layout and master page
//! - `settings.xml` and `configurations2/accelerator/current.xml`
//! - `META-INF/manifest.xml`
//! - background images under `media/`, slide images under `Pictures/`
//!
//! # Example
//!
//! ```
//! use odpgen::common::{HorizontalAlign, ParagraphProperties, TextStyle, VerticalAlign};
//! use odpgen::odf::odp::Presentation;
//!
//! # fn main() -> odpgen::Result<()> {
//! let mut presentation = Presentation::new();
//! presentation.set_slide_size("4:3");
//!
//! let slide = presentation.add_slide("Quarterly review", "Revenue up\nCosts down");
//! presentation.set_text_style(slide, TextStyle::new(14.0, "DejaVu Sans", "#444444").italic())?;
//! presentation.add_text_box(
//!     slide,
//!     "Footnote",
//!     1.0,
//!     17.0,
//!     10.0,
//!     1.0,
//!     Some(ParagraphProperties::aligned(HorizontalAlign::Right, VerticalAlign::Bottom)),
//!     None,
//! )?;
//!
//! let bytes = presentation.save_stream()?;
//! assert_eq!(&bytes[30..38], b"mimetype");
//! # Ok(())
//! # }
//! ```

mod options;
mod package;
mod parts;
mod presentation;
mod size;
mod slide;
mod style_id;
mod zorder;

pub use options::WriteOptions;
pub use parts::{MediaPayload, media_payloads};
pub use presentation::Presentation;
pub use size::{SlidePreset, SlideSize};
pub use slide::{Background, Image, Placement, Slide, SlideRef, TextBox};
pub use style_id::{frame_style_name, paragraph_style_name, text_style_name};
pub use zorder::Drawable;
