use axum::{
    http::{header::CACHE_CONTROL, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tone_engine::{ParseError, UnknownFormat};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid colour: {0:?}")]
    InvalidColor(String),

    #[error("Unknown format: {0:?} (expected css, tailwind, swift or android)")]
    UnknownFormat(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ParseError> for ApiError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Unrecognized(input) => ApiError::InvalidColor(input),
        }
    }
}

impl From<UnknownFormat> for ApiError {
    fn from(e: UnknownFormat) -> Self {
        ApiError::UnknownFormat(e.0)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownFormat(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        let mut response = (status, body).into_response();
        if status.is_server_error() {
            // The router only sets Cache-Control when the handler did not
            response
                .headers_mut()
                .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        }
        response
    }
}
