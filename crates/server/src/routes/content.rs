//! Handlers shared by every content table, instantiated per resource in
//! [`crate::routes::build_router`].

use axum::{
    extract::{Path, Query, State},
    Json,
};
use common::types::Message;
use serde::Deserialize;
use service::{
    auth::domain::Claims,
    content::{Contacts, Jobs, NewsItems, Techniques},
    ContentResource,
};

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct PageQuery {
    /// Rows to skip (default 0)
    pub skip: Option<u64>,
    /// Page size (default 100, clamped to the configured maximum)
    pub limit: Option<u64>,
}

pub async fn list<R: ContentResource>(
    State(state): State<ServerState>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Vec<R::Model>>, JsonApiError> {
    let page = state.pages.resolve(q.skip, q.limit);
    Ok(Json(state.content::<R>().list(page).await?))
}

pub async fn get_one<R: ContentResource>(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<R::Model>, JsonApiError> {
    Ok(Json(state.content::<R>().get(id).await?))
}

pub async fn create<R: ContentResource>(
    State(state): State<ServerState>,
    Json(input): Json<R::Create>,
) -> Result<Json<R::Model>, JsonApiError> {
    Ok(Json(state.content::<R>().create(input).await?))
}

pub async fn update<R: ContentResource>(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<R::Update>,
) -> Result<Json<R::Model>, JsonApiError> {
    Ok(Json(state.content::<R>().update(id, input).await?))
}

pub async fn delete<R: ContentResource>(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Message>, JsonApiError> {
    Ok(Json(state.content::<R>().delete(id).await?))
}

pub async fn sample<R: ContentResource>(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(state.content::<R>().sample())
}

pub async fn job_tags(State(state): State<ServerState>) -> Result<Json<Vec<String>>, JsonApiError> {
    Ok(Json(state.content::<Jobs>().all_tags().await?))
}

pub async fn news_admin(
    State(state): State<ServerState>,
    axum::Extension(claims): axum::Extension<Claims>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Vec<models::news::Model>>, JsonApiError> {
    let page = state.pages.resolve(q.skip, q.limit);
    let items = state.content::<NewsItems>().list_admin(page).await?;
    tracing::info!(admin = %claims.sub, count = items.len(), "admin news listing");
    Ok(Json(items))
}

pub async fn reset_techniques(
    State(state): State<ServerState>,
    axum::Extension(claims): axum::Extension<Claims>,
) -> Result<Json<Vec<models::technique::Model>>, JsonApiError> {
    let rows = state.content::<Techniques>().reset_defaults().await?;
    tracing::info!(admin = %claims.sub, count = rows.len(), "techniques reset");
    Ok(Json(rows))
}

pub async fn process_contact(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::contact::Model>, JsonApiError> {
    Ok(Json(state.content::<Contacts>().mark_processed(id).await?))
}
