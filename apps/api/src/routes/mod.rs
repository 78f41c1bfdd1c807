pub mod analyze;
pub mod health;
pub mod skills;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skills API
        .route("/api/v1/skills", get(skills::handle_list_skills))
        .route("/api/v1/skills/extract", post(skills::handle_extract_skills))
        // Analysis API
        .route("/api/v1/analyze", post(analyze::handle_analyze))
        .route("/api/v1/analyze/upload", post(analyze::handle_analyze_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
