//! Error type returned by presentation mutation and serialization.
use thiserror::Error;

/// Main error type for odpgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Slide handle was not issued by this presentation
    #[error("Slide reference does not belong to this presentation")]
    InvalidReference,

    /// Image extension outside the supported set
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Zero-length image or background payload
    #[error("Image data is empty")]
    EmptyPayload,

    /// Non-positive width or height for a placed image
    #[error("Invalid image dimensions: {width}cm x {height}cm (both must be positive)")]
    InvalidDimensions { width: f64, height: f64 },

    /// Placement rectangle leaves the slide
    #[error(
        "Image at ({x}, {y}) sized {width} x {height} exceeds slide bounds ({slide_width} x {slide_height})"
    )]
    OutOfBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        slide_width: f64,
        slide_height: f64,
    },

    /// Malformed `#RRGGBB` color
    #[error("Invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),
}

/// Result type for odpgen operations.
pub type Result<T> = std::result::Result<T, Error>;
