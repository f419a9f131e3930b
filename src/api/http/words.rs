// src/api/http/words.rs
// Word endpoints, always addressed through the owning concept so the
// ownership check happens before any word row is touched.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::concept::types::{CreateWordRequest, Word};
use crate::session::SessionId;
use crate::state::AppState;

/// POST /api/concepts/{id}/words
pub async fn add_word(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Path(concept_id): Path<i64>,
    Json(payload): Json<CreateWordRequest>,
) -> ApiResult<(StatusCode, Json<Word>)> {
    let word = state
        .concepts
        .add_word(&user_id, concept_id, &payload.word)
        .await?;
    Ok((StatusCode::CREATED, Json(word)))
}

/// PUT /api/concepts/{id}/words/{word_id}
pub async fn update_word(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Path((concept_id, word_id)): Path<(i64, i64)>,
    Json(payload): Json<CreateWordRequest>,
) -> ApiResult<Json<Word>> {
    let word = state
        .concepts
        .update_word(&user_id, concept_id, word_id, &payload.word)
        .await?;
    Ok(Json(word))
}

/// DELETE /api/concepts/{id}/words/{word_id}
pub async fn delete_word(
    State(state): State<Arc<AppState>>,
    SessionId(user_id): SessionId,
    Path((concept_id, word_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .concepts
        .remove_word(&user_id, concept_id, word_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
