//! Slide dimensions and named presets.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Slide dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideSize {
    pub width: f64,
    pub height: f64,
}

impl SlideSize {
    /// 16:9 widescreen, equivalent to 1920x1080
    pub const WIDESCREEN: SlideSize = SlideSize::new(33.867, 19.05);
    /// 4:3 standard, equivalent to 1024x768
    pub const STANDARD: SlideSize = SlideSize::new(25.4, 19.05);

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for SlideSize {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

/// Named slide aspect ratio.
///
/// Parsing never fails: anything other than `"4:3"` resolves to 16:9.
///
/// ```
/// use odpgen::odf::odp::{SlidePreset, SlideSize};
///
/// let preset: SlidePreset = "4:3".parse().unwrap();
/// assert_eq!(preset.size(), SlideSize::STANDARD);
/// assert_eq!("A4".parse::<SlidePreset>().unwrap(), SlidePreset::Widescreen);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SlidePreset {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
}

impl SlidePreset {
    /// Aspect-ratio notation of the preset.
    pub const fn name(&self) -> &'static str {
        match self {
            SlidePreset::Widescreen => "16:9",
            SlidePreset::Standard => "4:3",
        }
    }

    pub const fn size(&self) -> SlideSize {
        match self {
            SlidePreset::Widescreen => SlideSize::WIDESCREEN,
            SlidePreset::Standard => SlideSize::STANDARD,
        }
    }
}

impl FromStr for SlidePreset {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "4:3" => SlidePreset::Standard,
            _ => SlidePreset::Widescreen,
        })
    }
}
