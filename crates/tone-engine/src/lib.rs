//! tone-engine: OKLCH colour conversion and tonal scale synthesis
//!
//! This library parses loosely formatted colour input, converts it between
//! sRGB, linear RGB, OKLab and OKLCH, maps out-of-gamut colours back into
//! sRGB, and builds "50-950" tint/shade scales that keep the input's hue and
//! relative saturation.
//!
//! # Quick Start
//!
//! ```
//! use tone_engine::{export_scale, parse, synthesize, ExportFormat, ScaleName};
//!
//! let input = parse("rgb(255, 68, 0)").unwrap();
//! let scale = synthesize(input);
//!
//! assert_eq!(scale.swatches().len(), 11);
//! assert_eq!(scale.input_swatch().hex(), "#FF4400");
//!
//! let css = export_scale(&scale, &ScaleName::new("brand"), ExportFormat::Css);
//! assert!(css.starts_with(":root {"));
//! ```
//!
//! # Color Spaces
//!
//! Each space is its own type so they cannot be mixed by accident:
//!
//! - [`Rgb8`]: 8-bit sRGB, the canonical form for input and output
//! - [`Srgb`]: gamma-encoded floats, may leave [0, 1] while out of gamut
//! - [`LinearRgb`]: linear light intensity
//! - [`Oklab`]: perceptually uniform Cartesian space
//! - [`Oklch`]: polar OKLab (lightness, chroma, hue in degrees)
//! - [`Hsl`]: CSS hue/saturation/lightness, used by the parser and
//!   [`variations`]
//!
//! ## Pipeline Overview
//!
//! ```text
//! "#ff4400" / "rgb(..)" / "hsl(..)" / "orange"
//!     |
//!     v
//! parse()                  (ordered matcher chain)
//!     |
//!     v
//! Rgb8 ---> Srgb ---> LinearRgb ---> Oklab ---> Oklch
//!                                                 |
//!                          +----------------------+
//!                          |
//!                          v
//!                    synthesize()      (per-step lightness + chroma ratio)
//!                          |
//!                          v
//!                  GamutMapper::clamp  (chroma *= 0.95 until it fits)
//!                          |
//!                          v
//!                 Oklch ---> Rgb8 ---> export_scale()
//! ```
//!
//! ## Gamut Mapping
//!
//! Scaling chroma at a fixed lightness and hue can leave sRGB. The mapper
//! checks the gamma-encoded channels scaled to 0-255 before rounding, and
//! accepts anything within half a unit of the range, i.e. anything that
//! rounds to a valid byte. Only chroma changes; lightness and hue are fixed.
//! The search is capped at 50 steps and never fails: a colour that cannot be
//! brought in range keeps its most reduced chroma and is clamped on output.
//!
//! # Exports
//!
//! [`ColorFormats`] renders one colour in every supported notation;
//! [`export_scale`] renders a whole scale for CSS, Tailwind, SwiftUI or
//! Android.

pub mod color;
pub mod export;
pub mod gamut;
pub mod parse;
pub mod scale;
pub mod variations;


pub use color::{
    linear_to_srgb, oklch_to_rgb8, rgb8_to_oklch, srgb_to_linear, Hsl, LinearRgb, Oklab, Oklch,
    Rgb8, Srgb,
};
pub use export::{
    export_scale, format_android, format_hex, format_hsl, format_oklch, format_rgb, format_swift,
    format_tailwind, ColorFormats, ExportFormat, ScaleName, UnknownFormat,
};
pub use gamut::{clamp_to_gamut, GamutClamp, GamutMapper};
pub use parse::{parse, ParseError};
pub use scale::{find_closest_step, synthesize, ColourScale, Step, Swatch};
pub use variations::{variations, Variations};
