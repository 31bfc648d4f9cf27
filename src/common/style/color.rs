use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// Rendered in ODF attributes as `#RRGGBB`.
///
/// # Examples
///
/// ```rust
/// use odpgen::common::RGBColor;
///
/// let red = RGBColor::new(255, 0, 0);
/// assert_eq!(red.to_string(), "#FF0000");
///
/// let parsed = RGBColor::parse("ff0000").unwrap();
/// assert_eq!(parsed, red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` color, tolerating surrounding whitespace and a missing `#`.
    ///
    /// After normalization the string must be exactly seven characters and every
    /// character after the `#` must be a hex digit (either case).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorFormat`] carrying the caller's input otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use odpgen::common::RGBColor;
    ///
    /// assert_eq!(RGBColor::parse("#0000ff").unwrap(), RGBColor::new(0, 0, 255));
    /// assert!(RGBColor::parse("FF00GG").is_err());
    /// assert!(RGBColor::parse("#FFF").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // "#" + 6 digits; byte length also rejects multi-byte characters
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(input.to_string()));
        }

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| Error::InvalidColorFormat(input.to_string()))
        };

        Ok(Self::new(component(0..2)?, component(2..4)?, component(4..6)?))
    }

    /// Convert to hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
