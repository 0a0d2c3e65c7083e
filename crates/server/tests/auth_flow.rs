mod support;

use axum::http::{header, StatusCode};
use serde_json::json;
use support::{admin_token, build_app, get, get_with_token, json, ADMIN_PASSWORD};

#[tokio::test]
async fn test_login_sets_token_and_cookie() -> anyhow::Result<()> {
    let app = build_app().await?;
    let res = json(&app, "POST", "/api/auth/login", &json!({"username": "admin", "password": ADMIN_PASSWORD})).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["token_type"], "bearer");
    assert!(res.body["access_token"].as_str().is_some_and(|t| !t.is_empty()));

    let cookie = res.headers.get(header::SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default();
    assert!(cookie.starts_with("auth_token="));
    assert!(cookie.contains("HttpOnly"));
    Ok(())
}

#[tokio::test]
async fn test_login_wrong_password() -> anyhow::Result<()> {
    let app = build_app().await?;
    let res = json(&app, "POST", "/api/auth/login", &json!({"username": "admin", "password": "wrong"})).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert!(res.body.get("access_token").is_none());
    assert!(res.headers.get(header::SET_COOKIE).is_none());

    let res = json(&app, "POST", "/api/auth/login", &json!({"username": "root", "password": ADMIN_PASSWORD})).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_admin_routes_require_token() -> anyhow::Result<()> {
    let app = build_app().await?;
    assert_eq!(get(&app, "/api/news/admin/all").await?.status, StatusCode::UNAUTHORIZED);
    assert_eq!(get_with_token(&app, "/api/news/admin/all", "garbage").await?.status, StatusCode::UNAUTHORIZED);
    assert_eq!(json(&app, "POST", "/api/techniques/init/default", &json!({})).await?.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_admin_news_listing_includes_drafts() -> anyhow::Result<()> {
    let app = build_app().await?;
    json(&app, "POST", "/api/news/", &json!({"title": "Public", "content": "c", "category": "Awards"})).await?;
    json(&app, "POST", "/api/news/", &json!({"title": "Draft", "content": "c", "category": "Awards", "is_published": false})).await?;

    assert_eq!(get(&app, "/api/news/").await?.body.as_array().map(Vec::len), Some(1));

    let token = admin_token(&app).await?;
    let res = get_with_token(&app, "/api/news/admin/all", &token).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_reset_default_techniques() -> anyhow::Result<()> {
    let app = build_app().await?;
    json(&app, "POST", "/api/techniques/", &json!({"name": "Custom", "description": "d", "features": [], "category": "X"})).await?;

    let token = admin_token(&app).await?;
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/techniques/init/default")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(axum::body::Body::empty())?;
    let res = support::send(&app, req).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().map(Vec::len), Some(6));

    let listed = get(&app, "/api/techniques/").await?.body;
    let names: Vec<&str> = listed.as_array().expect("array").iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names.len(), 6);
    assert!(!names.contains(&"Custom"));
    Ok(())
}
