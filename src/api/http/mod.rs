// src/api/http/mod.rs

pub mod concepts;
pub mod health;
pub mod public;
pub mod router;
pub mod session;
pub mod words;

pub use router::api_router;
