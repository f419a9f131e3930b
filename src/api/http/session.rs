// src/api/http/session.rs
// Anonymous session bootstrap.

use axum::{
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;
use uuid::Uuid;

use crate::config::CONFIG;
use crate::session::{cookie_from_headers, session_cookie};

/// POST /api/session/init
///
/// Returns the caller's existing identity, or mints a new uuid and sets the
/// session cookie. The plain id is echoed in the body either way.
pub async fn init_session(headers: HeaderMap) -> Response {
    if let Some(existing) = cookie_from_headers(&headers, &CONFIG.session.cookie_name) {
        return (StatusCode::OK, existing).into_response();
    }

    let user_id = Uuid::new_v4().to_string();
    info!("Minted new anonymous session");

    (
        StatusCode::OK,
        [(header::SET_COOKIE, session_cookie(&user_id))],
        user_id,
    )
        .into_response()
}
