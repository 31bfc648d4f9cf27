//! Common types, traits, and utilities shared across the crate.
//!
//! Errors, geometry and style value types, and XML helpers used by the ODF
//! presentation writer.

// Submodule declarations
pub mod error;
pub mod style;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{HorizontalAlign, Length, ParagraphProperties, RGBColor, TextStyle, VerticalAlign};
