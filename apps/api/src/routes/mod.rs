pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::planner::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Planner API
        .route("/api/v1/plans", post(handlers::handle_generate_plan))
        .route("/api/v1/plans/export", post(handlers::handle_export_plan))
        .route(
            "/api/v1/macros/extract",
            post(handlers::handle_extract_macros),
        )
        .route("/api/v1/targets", get(handlers::handle_get_targets))
        .fallback(not_found)
        .with_state(state)
}
