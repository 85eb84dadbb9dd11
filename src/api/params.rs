//! Query parameter resolution shared by the colour endpoints.
//!
//! A parameter the client sent is validated as client input (400 on error).
//! An omitted parameter falls back to the configured default, and a default
//! that does not parse is a server misconfiguration (500).

use tone_engine::{ExportFormat, Rgb8, ScaleName};

use crate::error::ApiError;
use crate::models::AppConfig;

pub fn resolve_color(config: &AppConfig, requested: Option<&str>) -> Result<Rgb8, ApiError> {
    match requested {
        Some(input) => tone_engine::parse(input).map_err(|e| {
            tracing::debug!(input, %e, "Rejected colour");
            ApiError::from(e)
        }),
        None => tone_engine::parse(&config.default_color)
            .map_err(|e| ApiError::Internal(format!("default_color: {e}"))),
    }
}

pub fn resolve_name(config: &AppConfig, requested: Option<&str>) -> ScaleName {
    ScaleName::new(requested.unwrap_or(&config.default_name))
}

pub fn resolve_format(
    config: &AppConfig,
    requested: Option<&str>,
) -> Result<ExportFormat, ApiError> {
    match requested {
        Some(name) => name.parse().map_err(ApiError::from),
        None => config
            .default_format
            .parse()
            .map_err(|e| ApiError::Internal(format!("default_format: {e}"))),
    }
}
