// src/config/session.rs
// Anonymous session cookie and demo dataset configuration

use serde::{Deserialize, Serialize};

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_max_age_secs: i64,
    pub cookie_secure: bool,
    /// Fixed owner of the public read-only dataset.
    pub demo_user_id: String,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            cookie_name: super::helpers::env_or("MEMO_COOKIE_NAME", "user_id"),
            // One year, matching how long an anonymous identity should survive
            cookie_max_age_secs: super::helpers::env_parsed_or(
                "MEMO_COOKIE_MAX_AGE_SECS",
                365 * 24 * 60 * 60,
            ),
            cookie_secure: super::helpers::env_or("MEMO_COOKIE_SECURE", "false") == "true",
            demo_user_id: super::helpers::env_or("MEMO_DEMO_USER_ID", "demo-user"),
        }
    }
}
