//! sRGB transfer function (IEC 61966-2-1)
//!
//! Exact piecewise formulas. Inputs outside 0.0..=1.0 are accepted: negative
//! values stay on the linear segment and values above 1.0 follow the power
//! segment, which keeps out-of-gamut colours observable downstream.

/// Decode a gamma-encoded sRGB channel to linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear light channel with the sRGB gamma curve.
#[inline]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
