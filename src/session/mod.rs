//! Anonymous cookie-based identity.
//!
//! A caller's identity is an opaque uuid in a cookie, minted once by
//! `/api/session/init` and sent back by the browser on every request. The
//! value is trusted as the scoping key for all concept operations; there are
//! no credentials. The core never reads ambient request state itself: the
//! identity enters every call as an explicit `SessionId` argument.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

use crate::api::error::ApiError;
use crate::config::CONFIG;

/// The caller's opaque scoping identifier, extracted from the session cookie.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        cookie_from_headers(&parts.headers, &CONFIG.session.cookie_name)
            .map(SessionId)
            .ok_or_else(|| {
                ApiError::unauthorized("No session cookie; call /api/session/init first")
            })
    }
}

/// Pull a cookie value out of the `Cookie` header, if present.
pub fn cookie_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Build the `Set-Cookie` value for a freshly minted session identity.
pub fn session_cookie(user_id: &str) -> String {
    let session = &CONFIG.session;
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        session.cookie_name, user_id, session.cookie_max_age_secs
    );
    if session.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_cookie_parsing() {
        let headers = headers_with_cookie("user_id=abc-123; theme=dark");
        assert_eq!(
            cookie_from_headers(&headers, "user_id").as_deref(),
            Some("abc-123")
        );
        assert_eq!(
            cookie_from_headers(&headers, "theme").as_deref(),
            Some("dark")
        );
        assert!(cookie_from_headers(&headers, "missing").is_none());
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        let headers = headers_with_cookie("xuser_id=evil; user_id=good");
        assert_eq!(
            cookie_from_headers(&headers, "user_id").as_deref(),
            Some("good")
        );
    }

    #[test]
    fn test_missing_cookie_header() {
        assert!(cookie_from_headers(&HeaderMap::new(), "user_id").is_none());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc-123");
        assert!(cookie.starts_with("user_id=abc-123"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }
}
