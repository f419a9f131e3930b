// src/concept/mod.rs

pub mod search;
pub mod service;
pub mod store;
pub mod types;

pub use service::{ConceptError, ConceptService};
pub use types::{Concept, Word};
