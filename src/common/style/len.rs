use std::fmt;

/// Length on a slide, measured in centimeters.
///
/// ODF geometry attributes (`svg:x`, `svg:width`, `fo:margin-left`, ...) are written
/// with two decimals and a `cm` suffix.
///
/// # Examples
///
/// ```rust
/// use odpgen::common::Length;
///
/// assert_eq!(Length::cm(2.0).to_string(), "2.00cm");
/// assert_eq!(Length::cm(29.867).to_string(), "29.87cm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(f64);

impl Length {
    /// Create a length from centimeters.
    #[inline]
    pub const fn cm(value: f64) -> Self {
        Self(value)
    }

    /// Value in centimeters.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Shortest decimal representation with a `cm` suffix, used for page geometry.
    ///
    /// ```rust
    /// use odpgen::common::Length;
    ///
    /// assert_eq!(Length::cm(33.867).to_exact_cm(), "33.867cm");
    /// ```
    pub fn to_exact_cm(&self) -> String {
        let mut buffer = ryu::Buffer::new();
        let mut out = String::from(buffer.format(self.0));
        out.push_str("cm");
        out
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}cm", self.0)
    }
}
