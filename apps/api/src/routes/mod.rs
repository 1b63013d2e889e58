pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats;
use crate::interview;
use crate::state::AppState;

/// Raised above the framework default so the ATS route's own 5 MiB ceiling
/// is the one a caller actually hits.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/resume",
            get(interview::handlers::handle_probe).post(interview::handlers::handle_upload_resume),
        )
        .route("/ats", post(ats::handlers::handle_score_resume))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
