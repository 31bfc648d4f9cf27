//! OpenDocument Format support.
//!
//! - [`constants`]: MIME types, part paths and fixed style names
//! - [`core`]: ZIP package writer and manifest
//! - [`odp`]: presentation model and serialization

pub mod constants;
pub mod core;
pub mod odp;

pub use odp::{Presentation, SlideRef};
