//! Unified error types for odpgen.
//!
//! Validation failures raised by the mutation API and I/O failures raised while
//! assembling the package share a single error type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
