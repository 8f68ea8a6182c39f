pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Oversized bodies are refused by the framework and surface as a 413.
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes());

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze))
        .route("/api/v1/resumes/optimize", post(handlers::handle_optimize))
        .route(
            "/api/v1/resumes/optimized/download",
            get(handlers::handle_download_optimized),
        )
        .layer(body_limit)
        .with_state(state)
}
