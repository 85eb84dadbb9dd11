use axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tone_engine::{export_scale, synthesize, Swatch};
use utoipa::{IntoParams, ToSchema};

use super::convert::{OklchValue, RgbValue};
use super::params::{resolve_color, resolve_format, resolve_name};
use crate::error::ApiError;
use crate::models::AppConfig;

/// Query for /api/scale
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScaleQuery {
    /// Base colour (defaults to the configured colour)
    pub color: Option<String>,
    /// Scale name used in generated identifiers (defaults to the configured name)
    pub name: Option<String>,
}

/// Query for /api/scale/export
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// Base colour (defaults to the configured colour)
    pub color: Option<String>,
    /// Scale name used in generated identifiers (defaults to the configured name)
    pub name: Option<String>,
    /// One of css, tailwind, swift, android (defaults to the configured format)
    pub format: Option<String>,
}

/// One step of a generated scale
#[derive(Debug, Serialize, ToSchema)]
pub struct SwatchValue {
    /// Step label (50, 100, ..., 950)
    pub step: u16,
    pub hex: String,
    pub rgb: RgbValue,
    pub oklch: OklchValue,
    /// True for the step that reproduces the input colour
    pub is_input: bool,
}

impl From<&Swatch> for SwatchValue {
    fn from(swatch: &Swatch) -> Self {
        Self {
            step: swatch.step.value(),
            hex: swatch.hex(),
            rgb: swatch.rgb.into(),
            oklch: swatch.oklch.into(),
            is_input: swatch.is_input,
        }
    }
}

/// Response from the /api/scale endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ScaleResponse {
    /// Normalized scale name
    pub name: String,
    /// Input colour as uppercase hex
    pub input: String,
    /// Step that carries the input colour
    pub input_step: u16,
    /// Input colour in OKLCH
    pub base: OklchValue,
    /// Eleven steps, lightest first
    pub steps: Vec<SwatchValue>,
}

/// Generate a 50-950 tint/shade scale
///
/// Lightness follows a fixed table; hue and relative chroma follow the input.
/// The step nearest the input's lightness reproduces the input exactly.
#[utoipa::path(
    get,
    path = "/api/scale",
    params(ScaleQuery),
    responses(
        (status = 200, description = "Scale generated", body = ScaleResponse),
        (status = 400, description = "Unrecognized colour"),
    ),
    tag = "Scale"
)]
pub async fn handle_scale(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<ScaleQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rgb = resolve_color(&config, query.color.as_deref())?;
    let name = resolve_name(&config, query.name.as_deref());
    let scale = synthesize(rgb);

    tracing::debug!(
        hex = %rgb,
        name = %name,
        input_step = %scale.input_step(),
        "Generated scale"
    );

    Ok(Json(ScaleResponse {
        name: name.to_string(),
        input: rgb.to_hex(),
        input_step: scale.input_step().value(),
        base: scale.base().into(),
        steps: scale.swatches().iter().map(SwatchValue::from).collect(),
    }))
}

/// Export a scale as a code snippet
///
/// Returns plain text: CSS custom properties, Tailwind config, a SwiftUI
/// `Color` extension, or Android resources with a Compose palette.
#[utoipa::path(
    get,
    path = "/api/scale/export",
    params(ExportQuery),
    responses(
        (status = 200, description = "Snippet generated", body = String, content_type = "text/plain"),
        (status = 400, description = "Unrecognized colour or format"),
    ),
    tag = "Scale"
)]
pub async fn handle_scale_export(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rgb = resolve_color(&config, query.color.as_deref())?;
    let name = resolve_name(&config, query.name.as_deref());
    let format = resolve_format(&config, query.format.as_deref())?;

    tracing::debug!(hex = %rgb, name = %name, format = %format, "Exporting scale");

    let snippet = export_scale(&synthesize(rgb), &name, format);
    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], snippet))
}
