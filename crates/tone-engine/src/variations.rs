//! HSL variation rows
//!
//! Three rows derived from a colour's rounded HSL: a lightness ramp, a
//! saturation ramp and a set of hue harmonies. Unlike [`synthesize`], these
//! are plain HSL edits and make no perceptual promises.
//!
//! [`synthesize`]: crate::synthesize

use crate::color::{Hsl, Rgb8};

/// HSL lightness levels, in percent.
pub const LIGHTNESS_LEVELS: [f64; 9] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// HSL saturation levels, in percent.
pub const SATURATION_LEVELS: [f64; 9] = [0.0, 12.0, 25.0, 37.0, 50.0, 62.0, 75.0, 87.0, 100.0];

/// Hue offsets in degrees: identity, analogous, triadic, complementary and
/// their mirrors.
pub const HARMONY_OFFSETS: [f64; 7] = [0.0, 30.0, 60.0, 120.0, 180.0, 240.0, 300.0];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variations {
    /// One entry per [`LIGHTNESS_LEVELS`] value
    pub lightness: Vec<Rgb8>,
    /// One entry per [`SATURATION_LEVELS`] value
    pub saturation: Vec<Rgb8>,
    /// One entry per [`HARMONY_OFFSETS`] value
    pub harmony: Vec<Rgb8>,
}

pub fn variations(rgb: Rgb8) -> Variations {
    let hsl = Hsl::from(rgb).rounded();

    Variations {
        lightness: LIGHTNESS_LEVELS
            .iter()
            .map(|&l| Hsl::new(hsl.h, hsl.s, l).to_rgb8())
            .collect(),
        saturation: SATURATION_LEVELS
            .iter()
            .map(|&s| Hsl::new(hsl.h, s, hsl.l).to_rgb8())
            .collect(),
        harmony: HARMONY_OFFSETS
            .iter()
            .map(|&offset| Hsl::new(hsl.h + offset, hsl.s, hsl.l).to_rgb8())
            .collect(),
    }
}
