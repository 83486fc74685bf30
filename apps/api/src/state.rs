use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::composer::{PostComposer, TemplateComposer};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable composer. Default: TemplateComposer.
    pub composer: Arc<dyn PostComposer>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            composer: Arc::new(TemplateComposer),
            started_at: Utc::now(),
        }
    }
}
