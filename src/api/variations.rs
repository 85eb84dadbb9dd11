use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;
use tone_engine::{variations, Rgb8};
use utoipa::ToSchema;

use super::convert::ColorQuery;
use super::params::resolve_color;
use crate::error::ApiError;
use crate::models::AppConfig;

/// Response from the /api/variations endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct VariationsResponse {
    /// Input colour as uppercase hex
    pub input: String,
    /// HSL lightness 10% to 90%
    pub lightness: Vec<String>,
    /// HSL saturation 0% to 100%
    pub saturation: Vec<String>,
    /// Hue rotated by 0, 30, 60, 120, 180, 240 and 300 degrees
    pub harmony: Vec<String>,
}

fn to_hex_row(row: &[Rgb8]) -> Vec<String> {
    row.iter().map(|c| c.to_hex()).collect()
}

/// HSL lightness, saturation and hue-harmony variations of a colour
#[utoipa::path(
    get,
    path = "/api/variations",
    params(ColorQuery),
    responses(
        (status = 200, description = "Variations generated", body = VariationsResponse),
        (status = 400, description = "Unrecognized colour"),
    ),
    tag = "Colour"
)]
pub async fn handle_variations(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<ColorQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rgb = resolve_color(&config, query.color.as_deref())?;
    let rows = variations(rgb);

    tracing::debug!(hex = %rgb, "Generated variations");

    Ok(Json(VariationsResponse {
        input: rgb.to_hex(),
        lightness: to_hex_row(&rows.lightness),
        saturation: to_hex_row(&rows.saturation),
        harmony: to_hex_row(&rows.harmony),
    }))
}
