use axum::{http::StatusCode, Json};
use common::{
    metrics::encode_metrics,
    types::{ApiInfo, Banner, Health},
    SERVICE_NAME,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, description = "Service banner")))]
pub async fn root() -> Json<Banner> {
    Json(Banner { message: "Content Portal API".into(), version: VERSION, docs: "/docs" })
}

#[utoipa::path(get, path = "/health", tag = "meta", responses((status = 200, description = "Healthy", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "healthy", service: SERVICE_NAME })
}

#[utoipa::path(get, path = "/api/info", tag = "meta", responses((status = 200, description = "Service description")))]
pub async fn info() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: "Content Portal API".into(),
        description: "Products, techniques, case studies, jobs, news and contact submissions".into(),
        version: VERSION,
        features: [
            "Product management",
            "Technique showcase",
            "Case studies",
            "Job postings",
            "News publishing",
            "Contact form",
            "Administrator login",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    })
}

pub async fn metrics() -> (StatusCode, String) {
    encode_metrics()
}
