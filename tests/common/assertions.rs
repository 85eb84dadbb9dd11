//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert an error response with the given status and a message containing
/// `fragment`
pub fn assert_error(response: &TestResponse, expected: StatusCode, fragment: &str) {
    assert_status(response, expected);
    assert_json_status(response, expected.as_u16());

    let json: serde_json::Value = response.json();
    let message = json["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(fragment),
        "Expected error containing {fragment:?}, got {message:?}"
    );
}

/// Assert the response is a 7-digit uppercase hex string
pub fn assert_hex(value: &serde_json::Value) {
    let hex = value.as_str().expect("Expected hex string");
    assert_eq!(hex.len(), 7, "Bad hex: {hex}");
    assert!(hex.starts_with('#'), "Bad hex: {hex}");
    assert!(
        hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
        "Bad hex: {hex}"
    );
}
