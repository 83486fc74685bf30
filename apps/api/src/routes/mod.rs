pub mod health;

use std::any::Any;

use axum::{
    http::Uri,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::composer::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/options", get(handlers::handle_options))
        .fallback(not_found)
        .with_state(state)
}

/// Turns a handler panic into the generic 500 body instead of a dropped connection.
pub fn with_panic_guard(router: Router) -> Router {
    router.layer(CatchPanicLayer::custom(|panic: Box<dyn Any + Send + 'static>| {
        let detail = panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        AppError::Internal(anyhow::anyhow!("Handler panicked: {detail}")).into_response()
    }))
}
