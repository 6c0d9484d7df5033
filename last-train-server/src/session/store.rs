//! Process-wide session store.
//!
//! Sessions live in memory only; restarting the process forgets them
//! all. Unlike the map-that-only-grows it replaces, the store evicts
//! sessions idle past a deadline and caps the total count, so a crawler
//! that never returns a cookie cannot grow the map without bound.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use super::bag::SessionBag;
use super::id::SessionId;

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// Evict a session this long after its last touch.
    pub time_to_idle: Duration,

    /// Maximum number of live sessions.
    pub max_sessions: u64,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            time_to_idle: Duration::from_secs(30 * 60),
            max_sessions: 10_000,
        }
    }
}

/// In-memory mapping from session id to bag.
///
/// Constructed once in `main` and shared through the app state; drops
/// with the process. Bag creation is atomic per id: however many
/// first-contact requests race on the same fresh id, they all end up
/// sharing one bag.
pub struct SessionStore {
    sessions: MokaCache<SessionId, SessionBag>,
}

impl SessionStore {
    /// Create a store with the given configuration.
    pub fn new(config: &SessionStoreConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(config.time_to_idle)
            .max_capacity(config.max_sessions)
            .build();

        Self { sessions }
    }

    /// The bag for this session id, creating an empty one on first
    /// reference. Every call with the same id yields handles to the
    /// same bag until the session is evicted.
    pub async fn bag(&self, id: &SessionId) -> SessionBag {
        self.sessions
            .entry(id.clone())
            .or_insert_with(async { SessionBag::new() })
            .await
            .into_value()
    }

    /// Approximate number of live sessions (for monitoring).
    pub fn session_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}
