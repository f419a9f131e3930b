// src/concept/service.rs
// The caller-facing façade composing the store and the search engine.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use super::search::ConceptSearch;
use super::store::ConceptStore;
use super::types::{Concept, CreateConceptRequest, UpdateConceptRequest, Word};
use crate::config::CONFIG;

#[derive(Debug, Error)]
pub enum ConceptError {
    /// The concept id does not exist for the calling user. Whether the id is
    /// missing entirely or owned by someone else is deliberately not exposed.
    #[error("concept not found")]
    NotFound,
    /// Underlying persistence failure, propagated unmodified. No retries.
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

pub struct ConceptService {
    store: ConceptStore,
    search: ConceptSearch,
    demo_user_id: String,
}

impl ConceptService {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_demo_user(pool, CONFIG.session.demo_user_id.clone())
    }

    pub fn with_demo_user(pool: SqlitePool, demo_user_id: String) -> Self {
        Self {
            store: ConceptStore::new(pool.clone()),
            search: ConceptSearch::new(pool),
            demo_user_id,
        }
    }

    /// Create a concept owned by the calling user. The owner comes from the
    /// session identity; nothing in the request body can reassign it.
    pub async fn create(
        &self,
        user_id: &str,
        draft: CreateConceptRequest,
    ) -> Result<Concept, ConceptError> {
        let concept = self
            .store
            .create_concept(user_id, &draft.name, &draft.notes, &draft.words)
            .await?;
        info!(concept_id = concept.id, "Created concept: {}", concept.name);
        Ok(concept)
    }

    /// List the user's concepts, or search them when a non-empty keyword is
    /// given. This branch is the system's sole query-routing decision.
    pub async fn list(
        &self,
        user_id: &str,
        keyword: Option<&str>,
    ) -> Result<Vec<Concept>, ConceptError> {
        match keyword {
            Some(kw) if !kw.is_empty() => Ok(self.search.search_by_keyword(user_id, kw).await?),
            _ => Ok(self.store.find_all_with_words(user_id).await?),
        }
    }

    pub async fn search(&self, user_id: &str, keyword: &str) -> Result<Vec<Concept>, ConceptError> {
        Ok(self.search.search_by_keyword(user_id, keyword).await?)
    }

    pub async fn get_one(&self, user_id: &str, id: i64) -> Result<Concept, ConceptError> {
        self.store
            .find_by_id_with_words(id, user_id)
            .await?
            .ok_or(ConceptError::NotFound)
    }

    /// Overwrite name and notes from the patch. The id, owner, and word
    /// collection are not alterable through update.
    pub async fn update(
        &self,
        user_id: &str,
        id: i64,
        patch: UpdateConceptRequest,
    ) -> Result<Concept, ConceptError> {
        let mut concept = self.get_one(user_id, id).await?;
        concept.name = patch.name;
        concept.notes = patch.notes;
        self.store.update_concept(&mut concept).await?;
        Ok(concept)
    }

    pub async fn delete(&self, user_id: &str, id: i64) -> Result<(), ConceptError> {
        let concept = self.get_one(user_id, id).await?;
        self.store.delete_concept(concept.id, user_id).await?;
        info!(concept_id = id, "Deleted concept");
        Ok(())
    }

    /// Keyword search pinned to the fixed demo dataset. No session involved.
    pub async fn search_public(&self, keyword: &str) -> Result<Vec<Concept>, ConceptError> {
        Ok(self
            .search
            .search_by_keyword(&self.demo_user_id, keyword)
            .await?)
    }

    // Word lifecycle. Each operation resolves the owning concept first, so
    // the ownership check happens before any word row is touched and a word
    // id outside that concept reads as NotFound.

    pub async fn add_word(
        &self,
        user_id: &str,
        concept_id: i64,
        word: &str,
    ) -> Result<Word, ConceptError> {
        let concept = self.get_one(user_id, concept_id).await?;
        Ok(self.store.add_word(concept.id, word).await?)
    }

    pub async fn update_word(
        &self,
        user_id: &str,
        concept_id: i64,
        word_id: i64,
        word: &str,
    ) -> Result<Word, ConceptError> {
        let concept = self.get_one(user_id, concept_id).await?;
        if !self.store.update_word(word_id, concept.id, word).await? {
            return Err(ConceptError::NotFound);
        }
        Ok(Word {
            id: word_id,
            concept_id: concept.id,
            word: word.to_string(),
        })
    }

    pub async fn remove_word(
        &self,
        user_id: &str,
        concept_id: i64,
        word_id: i64,
    ) -> Result<(), ConceptError> {
        let concept = self.get_one(user_id, concept_id).await?;
        if !self.store.delete_word(word_id, concept.id).await? {
            return Err(ConceptError::NotFound);
        }
        Ok(())
    }
}
