//! Shared application state, passed to every handler behind an `Arc`.

use sqlx::PgPool;

use crate::config::RetryPolicy;
use crate::session::SessionStore;

pub struct AppState {
    /// The Postgres connection pool; accessors check a connection out per
    /// query.
    pub db: PgPool,
    /// Per-user transient sessions (active quiz or add-word wizard).
    pub sessions: SessionStore,
    /// Reconnect delays for the polling loop.
    pub retry: RetryPolicy,
}

impl AppState {
    pub fn new(db: PgPool, retry: RetryPolicy) -> Self {
        Self {
            db,
            sessions: SessionStore::new(),
            retry,
        }
    }
}
