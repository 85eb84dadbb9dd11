//! Linear RGB colour type
//!
//! Linear RGB is the space where light adds physically. It sits between the
//! sRGB gamma curve and the OKLab LMS matrices.

/// A colour in linear RGB colour space.
///
/// Values are nominally in 0.0..=1.0. Colours produced from out-of-gamut
/// [`Oklab`](super::Oklab) values fall outside that range; they are not
/// clamped here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb colour from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Whether every channel lies within 0.0..=1.0.
    #[inline]
    pub fn is_in_unit_cube(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}
