// src/api/http/concepts.rs
// Handlers for the session-scoped concept endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::api::error::ApiResult;
use crate::concept::types::{Concept, CreateConceptRequest, UpdateConceptRequest};
use crate::session::SessionId;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub query: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
}

/// POST /api/concepts
pub async fn create_concept(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Json(payload): Json<CreateConceptRequest>,
) -> ApiResult<(StatusCode, Json<Concept>)> {
    let concept = state.concepts.create(&user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(concept)))
}

/// GET /api/concepts?query=
///
/// Routes to search when `query` is present and non-empty, otherwise lists
/// everything the user owns.
pub async fn list_concepts(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Vec<Concept>>> {
    let started = Instant::now();
    let concepts = state
        .concepts
        .list(&user_id, params.query.as_deref())
        .await?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        query = params.query.as_deref().unwrap_or(""),
        "Listed {} concepts",
        concepts.len()
    );
    Ok(Json(concepts))
}

/// GET /api/concepts/search?keyword=
pub async fn search_concepts(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Concept>>> {
    let results = state.concepts.search(&user_id, &params.keyword).await?;
    Ok(Json(results))
}

/// GET /api/concepts/{id}
pub async fn get_concept(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Path(id): Path<i64>,
) -> ApiResult<Json<Concept>> {
    let concept = state.concepts.get_one(&user_id, id).await?;
    Ok(Json(concept))
}

/// PUT /api/concepts/{id}
pub async fn update_concept(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateConceptRequest>,
) -> ApiResult<Json<Concept>> {
    let concept = state.concepts.update(&user_id, id, payload).await?;
    Ok(Json(concept))
}

/// DELETE /api/concepts/{id}
pub async fn delete_concept(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.concepts.delete(&user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
