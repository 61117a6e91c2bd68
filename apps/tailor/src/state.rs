use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable: submissions share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Remote model used by every pipeline step. `GeminiClient` in production.
    pub llm: Arc<dyn LanguageModel>,
    pub config: Config,
}
