//! Gamma-encoded sRGB colour type
//!
//! sRGB applies a gamma curve to linear light values so that equal steps look
//! roughly equal on a display. Use it for input/output, never for arithmetic.

use super::gamma::{linear_to_srgb, srgb_to_linear};
use super::linear_rgb::LinearRgb;
use super::rgb8::Rgb8;

/// A colour in sRGB colour space with float channels.
///
/// Values are nominally in 0.0..=1.0 (mapping to 0..=255). Values converted
/// from an out-of-gamut [`LinearRgb`] are kept as-is, unclamped, so that the
/// gamut mapper can see how far outside the cube they lie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb colour from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to the 0..=255 range, before rounding.
    #[inline]
    pub fn to_scaled(self) -> [f64; 3] {
        [self.r * 255.0, self.g * 255.0, self.b * 255.0]
    }

    /// Whether every scaled channel lies within `[-tolerance, 255 + tolerance]`.
    ///
    /// # Example
    /// ```
    /// use tone_engine::Srgb;
    /// assert!(Srgb::new(1.0, 0.0, 0.5).fits_gamut(0.5));
    /// assert!(!Srgb::new(1.01, 0.0, 0.5).fits_gamut(0.5));
    /// ```
    pub fn fits_gamut(self, tolerance: f64) -> bool {
        self.to_scaled()
            .iter()
            .all(|&c| c >= -tolerance && c <= 255.0 + tolerance)
    }

    /// Round and clamp to 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use tone_engine::{Rgb8, Srgb};
    /// let color = Srgb::new(1.2, 0.5, -0.1);
    /// assert_eq!(color.to_rgb8(), Rgb8::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn to_rgb8(self) -> Rgb8 {
        let [r, g, b] = self.to_scaled().map(|c| c.round().clamp(0.0, 255.0) as u8);
        Rgb8::new(r, g, b)
    }
}

impl From<Rgb8> for Srgb {
    fn from(rgb: Rgb8) -> Self {
        Self {
            r: rgb.r as f64 / 255.0,
            g: rgb.g as f64 / 255.0,
            b: rgb.b as f64 / 255.0,
        }
    }
}

impl From<LinearRgb> for Srgb {
    /// Encode linear light with the sRGB gamma curve.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode the sRGB gamma curve to linear light.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
