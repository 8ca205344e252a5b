pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::screening::handlers::{self, MAX_RESUME_BYTES, MAX_RESUME_FILES};
use crate::state::AppState;

/// GET /
/// Welcome pointer for anyone poking the service root.
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Smart Resume Screener API. POST a job description and PDF resumes to /api/v1/screening."
    }))
}

pub fn build_router(state: AppState) -> Router {
    // A full batch of max-size uploads must fit in one request body.
    let body_limit = MAX_RESUME_FILES * MAX_RESUME_BYTES + 1024 * 1024;

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/screening",
            post(handlers::handle_screen_resumes),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
