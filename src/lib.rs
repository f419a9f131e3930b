// src/lib.rs

pub mod api;
pub mod concept;
pub mod config;
pub mod db;
pub mod session;
pub mod state;

// Export commonly used items
pub use config::CONFIG;
pub use state::AppState;
