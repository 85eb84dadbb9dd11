//! 8-bit sRGB colour type

use std::fmt;
use std::str::FromStr;

use crate::parse::{parse, ParseError};

/// A colour as three 8-bit sRGB channels.
///
/// This is the canonical ground truth: parsed input, colour-picker values and
/// every synthesized scale step end up here. Float results from the transforms
/// are rounded and clamped before they become an `Rgb8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Create a colour from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Render as uppercase `#RRGGBB`.
    ///
    /// ```
    /// use tone_engine::Rgb8;
    /// assert_eq!(Rgb8::new(255, 68, 0).to_hex(), "#FF4400");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = ParseError;

    /// Parse any supported colour notation, see [`parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
