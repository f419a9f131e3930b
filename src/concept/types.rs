// src/concept/types.rs

use serde::{Deserialize, Serialize};

/// A user-owned named note with free-text notes and associated words.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: i64,
    /// Opaque scoping identifier of the owning user. Set once at creation.
    pub user_id: String,
    pub name: String,
    pub notes: String,
    pub words: Vec<Word>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A short text tag belonging to exactly one concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: i64,
    pub concept_id: i64,
    pub word: String,
}

// Request types for the API. Ownership cannot be forged through these: there
// is no user id field to supply, and unknown JSON fields are dropped.

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateConceptRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateConceptRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWordRequest {
    pub word: String,
}
