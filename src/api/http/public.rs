// src/api/http/public.rs
// Read-only search over the fixed demo dataset. No session cookie consulted.

use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::concepts::SearchQuery;
use crate::api::error::ApiResult;
use crate::concept::types::Concept;
use crate::state::AppState;

/// GET /api/public/demo-concepts/search?keyword=
pub async fn search_demo_concepts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Concept>>> {
    let results = state.concepts.search_public(&params.keyword).await?;
    Ok(Json(results))
}
