//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::StationCatalog;
use crate::session::SessionStore;

/// Shared application state.
///
/// Everything a handler needs: the immutable catalog and the injected
/// session store.
#[derive(Clone)]
pub struct AppState {
    /// Public-station catalog, loaded once at startup.
    pub catalog: Arc<StationCatalog>,

    /// Per-visitor session store.
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: StationCatalog, sessions: SessionStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(sessions),
        }
    }
}
