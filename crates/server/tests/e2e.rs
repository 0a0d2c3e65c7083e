use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

mod support;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = support::build_app().await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn e2e_login_cookie_unlocks_admin_routes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/api/news/admin/all", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = c.post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({"username": "admin", "password": support::ADMIN_PASSWORD}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().get("set-cookie").is_some());

    // Cookie store replays auth_token; no Authorization header
    let res = c.get(format!("{}/api/news/admin/all", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_expired_token_unauthorized() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    use jsonwebtoken::{encode, EncodingKey, Header};
    #[derive(serde::Serialize)]
    struct Claims { sub: String, exp: i64, iat: i64 }
    let now = chrono::Utc::now().timestamp();
    let claims = Claims { sub: "admin".into(), exp: now - 600, iat: now - 1200 };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(support::TEST_SECRET.as_bytes()))?;

    let res = c.get(format!("{}/api/news/admin/all", app.base_url))
        .header("Authorization", format!("Bearer {}", token))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn e2e_contact_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let created = c.post(format!("{}/api/contact", app.base_url))
        .json(&json!({"name": "A", "email": "a@x.com", "message": "hi", "interest": "sales"}))
        .send().await?
        .json::<serde_json::Value>().await?;
    let id = created["id"].as_i64().expect("id");

    let processed = c.put(format!("{}/api/contact/{}/process", app.base_url, id))
        .send().await?
        .json::<serde_json::Value>().await?;
    assert_eq!(processed["is_processed"], true);
    Ok(())
}
