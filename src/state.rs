//! Shared application state handed to every handler.

use crate::{db::DbPool, services::session_service::SessionStore};

/// Everything a handler can reach: the connection pool and the session
/// store. Cloning is cheap; both members are handles.
///
/// The session store is carried here instead of living in a process-wide
/// global so that the capability is explicitly injected into the
/// request-handling path.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            sessions: SessionStore::default(),
        }
    }
}
