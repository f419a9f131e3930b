// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use super::{concepts, health, public, session, words};
use crate::state::AppState;

/// Full route table. The `/api/concepts` surface requires a session cookie;
/// `/api/public` and `/health` do not.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Anonymous session bootstrap
        .route("/api/session/init", post(session::init_session))
        // Concepts (session-scoped)
        .route(
            "/api/concepts",
            post(concepts::create_concept).get(concepts::list_concepts),
        )
        .route("/api/concepts/search", get(concepts::search_concepts))
        .route(
            "/api/concepts/{id}",
            get(concepts::get_concept)
                .put(concepts::update_concept)
                .delete(concepts::delete_concept),
        )
        // Words, addressed through their owning concept
        .route("/api/concepts/{id}/words", post(words::add_word))
        .route(
            "/api/concepts/{id}/words/{word_id}",
            put(words::update_word).delete(words::delete_word),
        )
        // Public read-only demo search
        .route(
            "/api/public/demo-concepts/search",
            get(public::search_demo_concepts),
        )
}
