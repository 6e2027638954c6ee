use std::sync::Arc;

use crate::config::Config;
use crate::drafts::store::DraftStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable draft store. Default: InMemoryDraftStore.
    pub drafts: Arc<dyn DraftStore>,
}
