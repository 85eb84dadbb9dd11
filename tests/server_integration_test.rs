//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and verify behavior that can only
//! be tested with actual network connections.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use tonekit::models::AppConfig;
use tonekit::server::{build_router, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server(config: AppConfig) -> u16 {
    let app = build_router(create_app_state(config));

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

/// Send one request with `Connection: close` and return the raw response.
async fn raw_get(port: u16, path: impl AsRef<str>) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");

    let path = path.as_ref();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(5),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timeout waiting for response")
    .expect("Failed to read response");

    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_server_health() {
    let port = start_test_server(AppConfig::default()).await;

    let response = raw_get(port, "/health").await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with("OK"), "{response}");
    assert!(
        !response.to_lowercase().contains("cache-control"),
        "Health checks must not be cached: {response}"
    );
}

#[tokio::test]
async fn test_server_sends_configured_cache_control() {
    let port = start_test_server(AppConfig {
        cache_max_age: 120,
        ..AppConfig::default()
    })
    .await;

    let response = raw_get(port, "/api/convert?color=blue").await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(
        response
            .to_lowercase()
            .contains("cache-control: public, max-age=120"),
        "{response}"
    );
    assert!(response.contains("\"hex\":\"#0000FF\""), "{response}");
}

#[tokio::test]
async fn test_server_handles_concurrent_requests() {
    let port = start_test_server(AppConfig::default()).await;

    let colors = ["red", "green", "blue", "white", "black", "orange", "pink", "purple"];
    let handles: Vec<_> = colors
        .iter()
        .map(|color| tokio::spawn(raw_get(port, format!("/api/scale?color={color}"))))
        .collect();

    for handle in handles {
        let response = handle.await.expect("Task panicked");
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains("\"input_step\""), "{response}");
    }
}

#[tokio::test]
async fn test_server_unknown_route() {
    let port = start_test_server(AppConfig::default()).await;

    let response = raw_get(port, "/api/nope").await;

    assert!(response.starts_with("HTTP/1.1 404"), "{response}");
}
