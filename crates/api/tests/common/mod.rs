//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full router (including the middleware stack) through
//! `tower::ServiceExt::oneshot`, without binding a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use lumeo_api::auth::jwt::{generate_access_token, JwtConfig};
use lumeo_api::auth::password::hash_password;
use lumeo_api::config::ServerConfig;
use lumeo_api::router::build_app_router;
use lumeo_api::state::AppState;
use lumeo_db::models::user::CreateUser;
use lumeo_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// The JWT config is constructed directly rather than from the
/// environment, so tests never depend on `JWT_SECRET` being set.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 1,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Uses the same `build_app_router` as `main.rs`, so integration tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert an admin user directly and return a valid Bearer token for it.
pub async fn seed_admin(pool: &PgPool) -> String {
    let input = CreateUser {
        name: "Admin de Teste".to_string(),
        email: "admin@teste.com".to_string(),
        password: "senha-forte-123".to_string(),
        role: Some("admin".to_string()),
        can_view_finance: Some(true),
        can_edit_projects: Some(true),
        can_view_all_projects: Some(true),
    };
    let hash = hash_password(&input.password).unwrap();
    let user = UserRepo::create(pool, &input, &hash).await.unwrap();
    generate_access_token(user.id, "admin", &test_config().jwt).unwrap()
}

/// Insert a non-admin (editor) user and return a valid Bearer token for it.
pub async fn seed_editor(pool: &PgPool) -> String {
    let input = CreateUser {
        name: "Editor de Teste".to_string(),
        email: "editor@teste.com".to_string(),
        password: "senha-forte-123".to_string(),
        role: Some("editor".to_string()),
        can_view_finance: None,
        can_edit_projects: None,
        can_view_all_projects: None,
    };
    let hash = hash_password(&input.password).unwrap();
    let user = UserRepo::create(pool, &input, &hash).await.unwrap();
    generate_access_token(user.id, "editor", &test_config().jwt).unwrap()
}

/// Send a GET request to the given path.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request to the given path.
pub async fn delete(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
