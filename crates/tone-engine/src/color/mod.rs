//! Colour types and conversion utilities
//!
//! Every intermediate colour space has its own type, so a linear value can
//! never be handed to code expecting a gamma-encoded one.
//!
//! # Color Spaces
//!
//! - [`Rgb8`]: 8-bit sRGB, the canonical value for display and hex round-trips.
//! - [`Srgb`]: gamma-encoded sRGB as floats, unrounded.
//! - [`LinearRgb`]: linear light intensity.
//! - [`Oklab`]: perceptual space (Ottosson 2020).
//! - [`Oklch`]: polar form of Oklab; lightness and hue move independently of chroma.
//! - [`Hsl`]: hue/saturation/lightness over sRGB, for CSS input and output.
//!
//! # Example
//!
//! ```
//! use tone_engine::{Oklch, Rgb8};
//!
//! let orange = Rgb8::new(255, 68, 0);
//! let lch = Oklch::from(orange);
//! assert_eq!(lch.to_rgb8(), orange);
//! ```

mod gamma;
mod hsl;
mod linear_rgb;
mod oklab;
mod oklch;
mod rgb8;
mod srgb;

pub use gamma::{linear_to_srgb, srgb_to_linear};
pub use hsl::Hsl;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::{oklch_to_rgb8, rgb8_to_oklch, Oklch};
pub use rgb8::Rgb8;
pub use srgb::Srgb;
