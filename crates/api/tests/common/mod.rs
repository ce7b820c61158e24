#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use vitals_api::auth::jwt::{generate_access_token, JwtConfig};
use vitals_api::config::ServerConfig;
use vitals_api::router::build_app_router;
use vitals_api::state::AppState;
use vitals_core::inbox::GenerationPolicy;

/// Build a test `ServerConfig` with safe defaults and the default inbox policy.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
        inbox: GenerationPolicy::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid bearer token for `owner_id`.
pub fn token_for(owner_id: i64) -> String {
    generate_access_token(owner_id, &test_config().jwt).unwrap()
}

/// Send an unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send an authenticated GET.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an authenticated request with a JSON body.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, Method::POST, uri, token, body).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, Method::PUT, uri, token, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a profile for `owner_id` through the API and return its id.
pub async fn create_profile(app: Router, owner_id: i64) -> i64 {
    let response = post_json(
        app,
        "/v1/profiles",
        &token_for(owner_id),
        serde_json::json!({ "display_name": "Test" }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
