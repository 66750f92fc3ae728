use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmService;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn LlmService>,
    pub sessions: SessionStore,
    pub config: Config,
}
