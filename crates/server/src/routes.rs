pub mod auth;
pub mod content;
pub mod meta;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use service::content::{CaseStudies, Contacts, Jobs, NewsItems, Products, Techniques};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::{middleware::require_bearer_token, openapi, state::ServerState};

/// The six CRUD routes of one content table, with and without the trailing
/// slash on the collection path.
macro_rules! content_routes {
    ($router:expr, $base:literal, $resource:ty) => {
        $router
            .route($base, get(content::list::<$resource>).post(content::create::<$resource>))
            .route(concat!($base, "/"), get(content::list::<$resource>).post(content::create::<$resource>))
            .route(concat!($base, "/sample/data"), get(content::sample::<$resource>))
            .route(
                concat!($base, "/:id"),
                get(content::get_one::<$resource>)
                    .put(content::update::<$resource>)
                    .delete(content::delete::<$resource>),
            )
    };
}

/// Build the full application router: meta, auth, content and admin routes
pub fn build_router(state: ServerState) -> Router {
    let public = Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .route("/metrics", get(meta::metrics))
        .route("/api/info", get(meta::info))
        .route("/api/auth/login", post(auth::login));

    let api = content_routes!(Router::new(), "/api/products", Products);
    let api = content_routes!(api, "/api/techniques", Techniques);
    let api = content_routes!(api, "/api/cases", CaseStudies);
    let api = content_routes!(api, "/api/jobs", Jobs);
    let api = content_routes!(api, "/api/news", NewsItems);
    let api = content_routes!(api, "/api/contact", Contacts)
        .route("/api/jobs/tags", get(content::job_tags))
        .route("/api/contact/:id/process", put(content::process_contact));

    // Administrator routes
    let admin = Router::new()
        .route("/api/news/admin/all", get(content::news_admin))
        .route("/api/techniques/init/default", post(content::reset_techniques))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer_token));

    public
        .merge(api)
        .merge(admin)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::api_doc()))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
