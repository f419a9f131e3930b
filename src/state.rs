// src/state.rs

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::concept::service::ConceptService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub concepts: Arc<ConceptService>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let concepts = Arc::new(ConceptService::new(pool.clone()));
        Self { pool, concepts }
    }
}
