//! Stateless signed sessions.
//!
//! The whole session lives client-side in a single `sid` cookie: a
//! hex-encoded JSON payload plus an HMAC-SHA256 signature over it, keyed with
//! the server's `SESSION_KEY`. Nothing is tracked server-side. A missing,
//! malformed, or tampered cookie degrades to the anonymous session and never
//! produces an error.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::security;
use crate::AppState;

/// Name of the session cookie
pub const COOKIE_NAME: &str = "sid";

/// Per-request session state carried in the signed cookie
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Id of the signed-in user, if any
    pub user_id: Option<u64>,
    /// One-shot status message, consumed by the next rendered page
    pub flash: Option<String>,
    /// Unix timestamp of the last session change, for log correlation
    pub issued_at: i64,
}

impl Session {
    /// The anonymous session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Bind the session to a user id (login)
    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self.touch();
        self
    }

    /// Drop the bound user id (logout); no-op when already anonymous
    pub fn without_user(mut self) -> Self {
        self.user_id = None;
        self.touch();
        self
    }

    /// Queue a one-shot flash message for the next rendered page
    pub fn with_flash(mut self, message: impl Into<String>) -> Self {
        self.flash = Some(message.into());
        self.touch();
        self
    }

    /// Take the pending flash message, leaving the session without one
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }

    fn touch(&mut self) {
        self.issued_at = chrono::Utc::now().timestamp();
    }

    /// Encode and sign the session as a cookie token
    ///
    /// Token format: `<hex(JSON payload)>.<hex HMAC signature>`.
    pub fn encode(&self, key: &str) -> String {
        // Serializing a plain struct of scalars cannot fail
        let payload = serde_json::to_string(self).unwrap_or_default();
        let encoded = hex::encode(payload);
        let signature = security::sign(&encoded, key);
        format!("{}.{}", encoded, signature)
    }

    /// Verify and decode a cookie token
    ///
    /// Returns `None` for any malformed or tampered token; callers treat
    /// that as the anonymous session.
    pub fn decode(token: &str, key: &str) -> Option<Self> {
        let (encoded, signature) = token.split_once('.')?;
        if !security::verify_signature(encoded, signature, key) {
            tracing::debug!("Session cookie failed signature check");
            return None;
        }
        let payload = hex::decode(encoded).ok()?;
        serde_json::from_slice(&payload).ok()
    }

    /// Render the session as a `Set-Cookie` header value
    pub fn to_set_cookie(&self, key: &str) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            COOKIE_NAME,
            self.encode(key)
        )
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|cookies| cookie_value(cookies, COOKIE_NAME))
            .and_then(|token| Session::decode(token, &state.config.session_key))
            .unwrap_or_else(Session::anonymous);
        Ok(session)
    }
}

/// Extract a named cookie's value from a `Cookie` request header
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}

/// Build a `303 See Other` redirect carrying the refreshed session cookie
pub fn redirect(to: &str, session: &Session, key: &str) -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();
    if let Ok(location) = HeaderValue::from_str(to) {
        response.headers_mut().insert(header::LOCATION, location);
    }
    attach_cookie(response, session, key)
}

/// Attach the session's `Set-Cookie` header to a response
pub fn attach_cookie(mut response: Response, session: &Session, key: &str) -> Response {
    if let Ok(cookie) = HeaderValue::from_str(&session.to_set_cookie(key)) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "test-session-key";

    #[test]
    fn test_encode_decode_roundtrip() {
        let session = Session::anonymous().with_user(42).with_flash("hello");
        let token = session.encode(KEY);

        let decoded = Session::decode(&token, KEY).unwrap();
        assert_eq!(decoded.user_id, Some(42));
        assert_eq!(decoded.flash.as_deref(), Some("hello"));
    }

    #[test]
    fn test_decode_rejects_wrong_key() {
        let token = Session::anonymous().with_user(1).encode(KEY);
        assert!(Session::decode(&token, "other-key").is_none());
    }

    #[test]
    fn test_decode_rejects_tampered_payload() {
        let token = Session::anonymous().with_user(1).encode(KEY);
        let (payload, signature) = token.split_once('.').unwrap();

        // Flip the payload while keeping the old signature
        let other = Session::anonymous().with_user(2).encode(KEY);
        let (other_payload, _) = other.split_once('.').unwrap();
        assert!(Session::decode(&format!("{}.{}", other_payload, signature), KEY).is_none());

        // Garbage signature
        assert!(Session::decode(&format!("{}.deadbeef", payload), KEY).is_none());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Session::decode("", KEY).is_none());
        assert!(Session::decode("no-dot-here", KEY).is_none());
        assert!(Session::decode("zz.zz", KEY).is_none());
    }

    #[test]
    fn test_take_flash_is_one_shot() {
        let mut session = Session::anonymous().with_flash("once");
        assert_eq!(session.take_flash().as_deref(), Some("once"));
        assert_eq!(session.take_flash(), None);
    }

    #[test]
    fn test_without_user_is_idempotent() {
        let session = Session::anonymous().without_user().without_user();
        assert_eq!(session.user_id, None);
    }

    #[test]
    fn test_cookie_value_extraction() {
        let header = "theme=dark; sid=abc.def; lang=en";
        assert_eq!(cookie_value(header, "sid"), Some("abc.def"));
        assert_eq!(cookie_value(header, "theme"), Some("dark"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn test_set_cookie_attributes() {
        let cookie = Session::anonymous().to_set_cookie(KEY);
        assert!(cookie.starts_with("sid="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
    }
}
