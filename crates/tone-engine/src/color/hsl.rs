//! HSL colour type
//!
//! HSL is a cylindrical re-arrangement of gamma-encoded sRGB. It is not
//! perceptual; it exists here because CSS input and output speak it.

use super::oklch::normalize_hue;
use super::rgb8::Rgb8;

/// A colour in HSL.
///
/// - `h`: hue in degrees, [0, 360)
/// - `s`: saturation in percent, 0..=100
/// - `l`: lightness in percent, 0..=100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL colour. The hue wraps into [0, 360); saturation and
    /// lightness are clamped to 0..=100.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Round every component to an integer, as displayed in `hsl()` strings.
    pub fn rounded(self) -> Self {
        Self::new(self.h.round(), self.s.round(), self.l.round())
    }

    /// Convert to 8-bit sRGB using the six 60-degree hue sectors.
    ///
    /// ```
    /// use tone_engine::{Hsl, Rgb8};
    /// assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb8(), Rgb8::new(255, 0, 0));
    /// assert_eq!(Hsl::new(120.0, 100.0, 25.0).to_rgb8(), Rgb8::new(0, 128, 0));
    /// ```
    pub fn to_rgb8(self) -> Rgb8 {
        let h = normalize_hue(self.h);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb8::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl From<Rgb8> for Hsl {
    fn from(rgb: Rgb8) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: normalize_hue(h * 60.0),
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}
