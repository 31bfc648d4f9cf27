//! odpgen - Build OpenDocument Presentation (.odp) files
//!
//! This library assembles presentations in memory and writes them as ODF 1.2
//! packages that LibreOffice Impress and other ODF consumers open directly.
//!
//! # Features
//!
//! - **Slides**: title/content slides with default layout, or blank slides
//! - **Text boxes**: per-slide text style cursor, paragraph alignment and indents
//! - **Images**: JPEG, PNG, GIF, BMP and SVG with bounds validation
//! - **Backgrounds**: image or solid color, presentation-wide or per slide
//! - **Stacking**: explicit or automatic z-index, resolved at save time
//! - **Deterministic output**: identical models serialize to identical bytes
//!
//! # Example
//!
//! ```no_run
//! use odpgen::Presentation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut presentation = Presentation::new();
//! let slide = presentation.add_slide("Hello", "From Rust");
//!
//! let logo = std::fs::read("logo.png")?;
//! presentation.add_image(slide, logo, "png", 25.0, 14.0, 6.0, 4.0, None)?;
//! presentation.set_background_color("#F5F5F5")?;
//!
//! let path = presentation.save("hello")?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Serialization emits `tracing` events (`debug` per save, `trace` per archive
//! entry) and a `warn` when an explicit z-index does not stack above the
//! elements already on a slide. No subscriber is installed by the library.

/// Common types shared by the ODF modules
pub mod common;

/// OpenDocument format support
pub mod odf;

pub use common::{Error, Result};
pub use odf::odp::{Presentation, Slide, SlideRef, WriteOptions};
