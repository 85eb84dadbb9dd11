//! Oklch: polar form of Oklab
//!
//! - **L** (Lightness): same as Oklab L
//! - **C** (Chroma): distance from the neutral axis
//! - **H** (Hue): angle in degrees, normalized to [0, 360)
//!
//! Scaling chroma leaves lightness and hue untouched, which is what both the
//! gamut mapper and the scale synthesizer rely on.

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::rgb8::Rgb8;
use super::srgb::Srgb;

/// Oklch: Lightness, Chroma, Hue (degrees).
///
/// For achromatic colours (chroma near zero) the hue is whatever `atan2`
/// makes of the residual noise; it carries no meaning in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colours
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in degrees, [0, 360)
    pub h: f64,
}

impl Oklch {
    /// Create a new Oklch colour. Negative chroma is clamped to zero and the
    /// hue is wrapped into [0, 360).
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c: c.max(0.0),
            h: normalize_hue(h),
        }
    }

    /// Scale chroma by a factor, keeping lightness and hue.
    ///
    /// Chroma is clamped to 0.0 minimum.
    #[inline]
    pub fn scale_chroma(self, factor: f64) -> Self {
        Self {
            l: self.l,
            c: (self.c * factor).max(0.0),
            h: self.h,
        }
    }

    /// Gamma-encoded sRGB, unrounded and unclamped.
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        Srgb::from(LinearRgb::from(Oklab::from(self)))
    }

    /// Round and clamp to 8-bit sRGB.
    #[inline]
    pub fn to_rgb8(self) -> Rgb8 {
        self.to_srgb().to_rgb8()
    }
}

/// Wrap an angle in degrees into [0, 360).
pub(crate) fn normalize_hue(degrees: f64) -> f64 {
    // rem_euclid may yield -0.0, or 360.0 for tiny negative inputs
    let h = degrees.rem_euclid(360.0).abs();
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

impl From<Oklab> for Oklch {
    /// Cartesian to polar.
    fn from(lab: Oklab) -> Self {
        Self {
            l: lab.l,
            c: lab.a.hypot(lab.b),
            h: normalize_hue(lab.b.atan2(lab.a).to_degrees()),
        }
    }
}

impl From<Oklch> for Oklab {
    /// Polar to Cartesian.
    fn from(lch: Oklch) -> Self {
        let (sin, cos) = lch.h.to_radians().sin_cos();
        Self::new(lch.l, lch.c * cos, lch.c * sin)
    }
}

impl From<Rgb8> for Oklch {
    fn from(rgb: Rgb8) -> Self {
        rgb8_to_oklch(rgb)
    }
}

/// 8-bit sRGB -> linear RGB -> Oklab -> Oklch.
pub fn rgb8_to_oklch(rgb: Rgb8) -> Oklch {
    Oklch::from(Oklab::from(LinearRgb::from(Srgb::from(rgb))))
}

/// Oklch -> Oklab -> linear RGB -> 8-bit sRGB, rounded and clamped.
pub fn oklch_to_rgb8(lch: Oklch) -> Rgb8 {
    lch.to_rgb8()
}
