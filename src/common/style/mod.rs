//! Common style and formatting types.
//!
//! Geometry and style value types used by the presentation model.

// Submodule declarations
pub mod color;
pub mod len;
pub mod text;

// Re-exports
pub use color::RGBColor;
pub use len::Length;
pub use text::{HorizontalAlign, ParagraphProperties, TextStyle, VerticalAlign};
