//! Configuration options for writing presentations.

use serde::{Deserialize, Serialize};

/// Options controlling how a presentation is serialized.
///
/// # Examples
///
/// ```rust
/// use odpgen::odf::odp::WriteOptions;
///
/// let options = WriteOptions::new()
///     .with_compression(false)
///     .with_locale("en", "US");
/// assert!(!options.compress);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Deflate XML parts and images; `mimetype` is always stored
    pub compress: bool,
    /// Language of the `ForbiddenCharacters` settings block
    pub language: String,
    /// Country of the `ForbiddenCharacters` settings block
    pub country: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            compress: true,
            language: "es".to_string(),
            country: "ES".to_string(),
        }
    }
}

impl WriteOptions {
    /// Create a new `WriteOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether package entries are deflated.
    #[inline]
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the locale written to `settings.xml`.
    #[inline]
    pub fn with_locale(mut self, language: impl Into<String>, country: impl Into<String>) -> Self {
        self.language = language.into();
        self.country = country.into();
        self
    }
}
