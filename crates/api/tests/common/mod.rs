use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use paperdeck_api::config::ServerConfig;
use paperdeck_api::router::build_app_router;
use paperdeck_api::state::AppState;
use paperdeck_core::ai::CannedResponder;

/// Build a test `ServerConfig` with safe defaults and a per-test upload
/// directory under the system temp dir.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: test_upload_dir().to_string_lossy().to_string(),
    }
}

/// A fresh, unique upload directory for one test.
pub fn test_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("paperdeck-test-{}", uuid::Uuid::new_v4()))
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors production router construction so
/// integration tests exercise the same middleware stack.
pub fn build_test_app(pool: PgPool) -> (Router, ServerConfig) {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai: Arc::new(CannedResponder),
    };
    (build_app_router(state, &config), config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Multipart upload helper
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "paperdeck-test-boundary";

/// Build and send a `POST /api/v1/papers/upload` multipart request.
pub async fn upload_paper(
    app: Router,
    title: Option<&str>,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Response<Body> {
    let mut body: Vec<u8> = Vec::new();

    if let Some(title) = title {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n{title}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"pdf\"; \
             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/papers/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert a paper row directly, skipping the upload flow, for tests
/// that only need a foreign-key target.
pub async fn seed_paper(pool: &PgPool, title: &str) -> i64 {
    paperdeck_db::repositories::PaperRepo::create(
        pool,
        title,
        "seed.pdf",
        "/nonexistent/seed.pdf",
        128,
    )
    .await
    .unwrap()
    .id
}

/// Assert an error response: expected status plus a machine-readable
/// code in the JSON body.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code, "unexpected error body: {json}");
}
