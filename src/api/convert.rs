use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tone_engine::{ColorFormats, Hsl, Oklch, Rgb8};
use utoipa::{IntoParams, ToSchema};

use super::params::resolve_color;
use crate::error::ApiError;
use crate::models::AppConfig;

/// Query for endpoints that take a single colour
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColorQuery {
    /// Colour in hex, rgb(), hsl() or named form (defaults to the configured colour)
    pub color: Option<String>,
}

/// 8-bit sRGB channels
#[derive(Debug, Serialize, ToSchema)]
pub struct RgbValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb8> for RgbValue {
    fn from(rgb: Rgb8) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Rounded HSL (degrees, percent, percent)
#[derive(Debug, Serialize, ToSchema)]
pub struct HslValue {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl From<Rgb8> for HslValue {
    fn from(rgb: Rgb8) -> Self {
        let hsl = Hsl::from(rgb).rounded();
        Self {
            h: hsl.h as u16,
            s: hsl.s as u8,
            l: hsl.l as u8,
        }
    }
}

/// OKLCH (lightness 0..1, chroma, hue in degrees)
#[derive(Debug, Serialize, ToSchema)]
pub struct OklchValue {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl From<Oklch> for OklchValue {
    fn from(lch: Oklch) -> Self {
        Self {
            l: lch.l,
            c: lch.c,
            h: lch.h,
        }
    }
}

/// Ready-to-paste notations for one colour
#[derive(Debug, Serialize, ToSchema)]
pub struct FormatStrings {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub oklch: String,
    /// SwiftUI initializer
    pub swift: String,
    /// Android `Color.rgb` call and ARGB literal
    pub android: String,
    /// Tailwind v4 theme variable and arbitrary-value class
    pub tailwind: String,
}

impl From<ColorFormats> for FormatStrings {
    fn from(f: ColorFormats) -> Self {
        Self {
            hex: f.hex,
            rgb: f.rgb,
            hsl: f.hsl,
            oklch: f.oklch,
            swift: f.swift,
            android: f.android,
            tailwind: f.tailwind,
        }
    }
}

/// Response from the /api/convert endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    /// Canonical uppercase hex
    pub hex: String,
    pub rgb: RgbValue,
    pub hsl: HslValue,
    pub oklch: OklchValue,
    pub formats: FormatStrings,
}

/// Convert a colour to every supported notation
///
/// Accepts hex (`#F40`, `ff4400`), `rgb()`/`rgba()`, `hsl()`/`hsla()` or a
/// basic colour name.
#[utoipa::path(
    get,
    path = "/api/convert",
    params(ColorQuery),
    responses(
        (status = 200, description = "Colour converted", body = ConvertResponse),
        (status = 400, description = "Unrecognized colour"),
    ),
    tag = "Colour"
)]
pub async fn handle_convert(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<ColorQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rgb = resolve_color(&config, query.color.as_deref())?;

    tracing::debug!(input = ?query.color, hex = %rgb, "Converting colour");

    Ok(Json(ConvertResponse {
        hex: rgb.to_hex(),
        rgb: rgb.into(),
        hsl: rgb.into(),
        oklch: Oklch::from(rgb).into(),
        formats: ColorFormats::from_rgb8(rgb).into(),
    }))
}
