#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use migration::MigratorTrait;
use serde_json::Value;
use server::{PageSettings, ServerState};
use service::auth::{repository::hash_password, AuthService, AuthSettings, StaticCredentialStore};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";
pub const ADMIN_PASSWORD: &str = "S3curePass!";

/// Router over a fresh migrated in-memory database.
pub async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    let store = StaticCredentialStore::new("admin", hash_password(ADMIN_PASSWORD)?);
    let auth = AuthService::new(
        Arc::new(store),
        AuthSettings { jwt_secret: TEST_SECRET.into(), token_ttl_minutes: 60 },
    );
    Ok(server::build_router(ServerState::new(db, auth, PageSettings::default())))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<TestResponse> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    Ok(TestResponse { status, headers, body })
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<TestResponse> {
    send(app, Request::builder().uri(uri).body(Body::empty())?).await
}

pub async fn get_with_token(app: &Router, uri: &str, token: &str) -> anyhow::Result<TestResponse> {
    let req = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())?;
    send(app, req).await
}

pub async fn json(app: &Router, method: &str, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    send(app, req).await
}

pub async fn delete(app: &Router, uri: &str) -> anyhow::Result<TestResponse> {
    send(app, Request::builder().method("DELETE").uri(uri).body(Body::empty())?).await
}

/// Log in as the test administrator and return the bearer token.
pub async fn admin_token(app: &Router) -> anyhow::Result<String> {
    let res = json(app, "POST", "/api/auth/login", &serde_json::json!({"username": "admin", "password": ADMIN_PASSWORD})).await?;
    anyhow::ensure!(res.status == StatusCode::OK, "login failed: {}", res.body);
    res.body["access_token"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("no access_token in {}", res.body))
}
