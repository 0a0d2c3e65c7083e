mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{build_app, delete, get, json};

fn product(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "category": "Endpoint Protection",
        "description": "Advanced endpoint security",
        "features": ["Real-time threat detection", "Behavioral analysis"],
        "price": "Starting at $25/user/month"
    })
}

#[tokio::test]
async fn test_health_and_banner() -> anyhow::Result<()> {
    let app = build_app().await?;
    let res = get(&app, "/health").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({"status": "healthy", "service": "content-portal-api"}));

    let res = get(&app, "/").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["docs"], "/docs");

    let res = get(&app, "/api/info").await?;
    assert!(res.body["features"].as_array().is_some_and(|f| !f.is_empty()));
    Ok(())
}

#[tokio::test]
async fn test_product_lifecycle() -> anyhow::Result<()> {
    let app = build_app().await?;

    let res = json(&app, "POST", "/api/products/", &product("Avocado Shield")).await?;
    assert_eq!(res.status, StatusCode::OK);
    let id = res.body["id"].as_i64().expect("generated id");
    assert_eq!(res.body["is_active"], true);
    assert_eq!(res.body["features"], json!(["Real-time threat detection", "Behavioral analysis"]));
    assert!(res.body["created_at"].is_string());

    let res = get(&app, &format!("/api/products/{id}")).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Avocado Shield");

    // Sparse update keeps untouched fields
    let res = json(&app, "PUT", &format!("/api/products/{id}"), &json!({"price": "Contact sales"})).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["price"], "Contact sales");
    assert_eq!(res.body["name"], "Avocado Shield");

    // Both collection paths answer
    assert_eq!(get(&app, "/api/products").await?.body.as_array().map(Vec::len), Some(1));
    assert_eq!(get(&app, "/api/products/").await?.body.as_array().map(Vec::len), Some(1));

    let res = delete(&app, &format!("/api/products/{id}")).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({"message": "Product deleted successfully"}));

    let res = get(&app, &format!("/api/products/{id}")).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["detail"], "Product not found");
    assert_eq!(get(&app, "/api/products/").await?.body, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_unknown_ids_are_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    for base in ["/api/products", "/api/techniques", "/api/cases", "/api/jobs", "/api/news", "/api/contact"] {
        assert_eq!(get(&app, &format!("{base}/4242")).await?.status, StatusCode::NOT_FOUND, "{base}");
        assert_eq!(delete(&app, &format!("{base}/4242")).await?.status, StatusCode::NOT_FOUND, "{base}");
        assert_eq!(json(&app, "PUT", &format!("{base}/4242"), &json!({})).await?.status, StatusCode::NOT_FOUND, "{base}");
    }
    Ok(())
}

#[tokio::test]
async fn test_validation_errors_are_422() -> anyhow::Result<()> {
    let app = build_app().await?;

    // Missing required field: rejected while deserializing
    let res = json(&app, "POST", "/api/products/", &json!({"name": "Shield"})).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);

    // Blank required field: rejected by field validation
    let res = json(&app, "POST", "/api/products/", &product("   ")).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["error"], "Validation Error");

    let res = json(&app, "POST", "/api/contact/", &json!({"name": "A", "email": "nope", "message": "hi", "interest": "sales"})).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn test_pagination_window() -> anyhow::Result<()> {
    let app = build_app().await?;
    let mut ids = Vec::new();
    for name in ["Machine Learning", "Threat Intelligence", "Automated Response"] {
        let res = json(
            &app,
            "POST",
            "/api/techniques/",
            &json!({"name": name, "description": "d", "features": [], "category": "AI/ML"}),
        )
        .await?;
        ids.push(res.body["id"].clone());
    }

    let res = get(&app, "/api/techniques/?skip=1&limit=1").await?;
    let page = res.body.as_array().expect("array");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["id"], ids[1]);

    assert_eq!(get(&app, "/api/techniques/?limit=0").await?.body, json!([]));
    assert_eq!(get(&app, "/api/techniques/?skip=10").await?.body, json!([]));
    assert_eq!(get(&app, "/api/techniques/?limit=100000").await?.body.as_array().map(Vec::len), Some(3));

    // Offsets past the signed 64-bit range still answer with an empty page
    let res = get(&app, &format!("/api/techniques/?skip={}", u64::MAX)).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_contact_submission_and_processing() -> anyhow::Result<()> {
    let app = build_app().await?;
    let res = json(&app, "POST", "/api/contact/", &json!({"name": "A", "email": "a@x.com", "message": "hi", "interest": "sales"})).await?;
    assert_eq!(res.status, StatusCode::OK);
    let id = res.body["id"].as_i64().expect("generated id");
    assert!(res.body["created_at"].is_string());
    assert_eq!(res.body["is_processed"], false);
    assert_eq!(res.body["company"], serde_json::Value::Null);

    let res = json(&app, "PUT", &format!("/api/contact/{id}/process"), &json!({})).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["is_processed"], true);

    // Hard delete
    assert_eq!(delete(&app, &format!("/api/contact/{id}")).await?.body["message"], "Contact deleted successfully");
    assert_eq!(get(&app, &format!("/api/contact/{id}")).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(json(&app, "PUT", &format!("/api/contact/{id}/process"), &json!({})).await?.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_news_keeps_three_images() -> anyhow::Result<()> {
    let app = build_app().await?;
    let images: Vec<String> = (1..=5).map(|i| format!("https://cdn.example.com/{i}.png")).collect();
    let res = json(
        &app,
        "POST",
        "/api/news/",
        &json!({"title": "Launch", "content": "body", "category": "Company News", "images": images, "published_date": "2024-03-01T08:30:00Z"}),
    )
    .await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["images"], json!(images[..3]));
    assert_eq!(res.body["is_published"], true);
    Ok(())
}

#[tokio::test]
async fn test_job_tags_and_type_field() -> anyhow::Result<()> {
    let app = build_app().await?;
    for (title, tags) in [("Analyst", json!(["security", "remote"])), ("Engineer", json!(["ai", "security"]))] {
        let res = json(
            &app,
            "POST",
            "/api/jobs/",
            &json!({
                "title": title, "department": "Engineering", "location": "Remote", "type": "Full-time",
                "salary": "$100k", "description": "d", "requirements": ["Rust"], "benefits": ["Remote"], "tags": tags
            }),
        )
        .await?;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["type"], "Full-time");
        assert!(res.body["posted_date"].is_string());
    }

    let res = get(&app, "/api/jobs/tags").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!(["ai", "remote", "security"]));
    Ok(())
}

#[tokio::test]
async fn test_sample_data_endpoints() -> anyhow::Result<()> {
    let app = build_app().await?;
    for (base, expected) in [("products", 3), ("techniques", 6), ("cases", 3), ("jobs", 3), ("news", 3), ("contact", 1)] {
        let res = get(&app, &format!("/api/{base}/sample/data")).await?;
        assert_eq!(res.status, StatusCode::OK, "{base}");
        assert_eq!(res.body.as_array().map(Vec::len), Some(expected), "{base}");
    }
    // Fixtures never touch storage
    assert_eq!(get(&app, "/api/products/").await?.body, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_docs_and_metrics_are_served() -> anyhow::Result<()> {
    let app = build_app().await?;
    json(&app, "POST", "/api/products/", &product("Avocado Shield")).await?;

    let res = get(&app, "/api-docs/openapi.json").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["paths"]["/api/products/"].is_object());

    let res = get(&app, "/metrics").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.as_str().is_some_and(|text| text.contains("portal_content_operations_total")));
    Ok(())
}
