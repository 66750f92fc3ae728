pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // One-shot upload + analyze
        .route("/api/v1/analyze", post(handlers::handle_analyze_upload))
        // Session-driven interaction
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/document",
            post(handlers::handle_upload_document),
        )
        .route(
            "/api/v1/sessions/:id/analyze",
            post(handlers::handle_analyze_session),
        )
        .route(
            "/api/v1/sessions/:id/follow-up",
            post(handlers::handle_follow_up),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
