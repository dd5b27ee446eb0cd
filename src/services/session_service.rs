//! Server-side session store.
//!
//! A successful `users` login creates a session mapping an opaque random
//! token to the matched user's id. The client carries the token in an
//! HttpOnly `sid` cookie; logout destroys the mapping. The store is a
//! handle injected through application state, not a process-wide global.

use std::{collections::HashMap, sync::Arc};

use axum::http::{HeaderMap, header};
use rand::RngCore;
use tokio::sync::RwLock;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";

/// In-process map of session token -> user id.
///
/// Sessions are ephemeral: a restart drops them all, which matches the
/// server-defined-expiry escape hatch in the session lifecycle.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, i64>>>,
}

impl SessionStore {
    /// Create a session for a user and return its opaque token.
    pub async fn create(&self, user_id: i64) -> String {
        let token = generate_token();
        self.inner.write().await.insert(token.clone(), user_id);
        token
    }

    /// Look up the user id behind a session token.
    pub async fn get(&self, token: &str) -> Option<i64> {
        self.inner.read().await.get(token).copied()
    }

    /// Destroy a session. Returns false if no such session existed.
    pub async fn destroy(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }
}

/// 32 random bytes, hex encoded (64 characters).
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Extract the session token from a request's Cookie header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Set-Cookie value establishing the session cookie.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Set-Cookie value that expires the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn created_session_resolves_to_the_user_id() {
        let store = SessionStore::default();
        let token = store.create(42).await;
        assert_eq!(store.get(&token).await, Some(42));
    }

    #[tokio::test]
    async fn destroy_removes_the_session_exactly_once() {
        let store = SessionStore::default();
        let token = store.create(7).await;
        assert!(store.destroy(&token).await);
        assert!(!store.destroy(&token).await);
        assert_eq!(store.get(&token).await, None);
    }

    #[tokio::test]
    async fn tokens_are_opaque_and_unique() {
        let store = SessionStore::default();
        let first = store.create(1).await;
        let second = store.create(1).await;
        assert_ne!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn session_token_is_parsed_out_of_a_multi_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; sid=abc123; lang=en"),
        );
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn missing_cookie_yields_no_token() {
        let headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
