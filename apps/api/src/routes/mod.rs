pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::job::handlers::handle_parse_job;
use crate::resume::handlers::handle_parse_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/parse", post(handle_parse_resume))
        .route("/api/v1/jobs/parse", post(handle_parse_job))
        .route("/api/v1/analysis", post(handle_analyze))
        .with_state(state)
}
