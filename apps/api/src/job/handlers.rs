//! Axum route handlers for the job-description structurer.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::enrichment::enrich_job;
use crate::errors::AppError;
use crate::job::parse_job_description;
use crate::models::job::ParsedJobDescription;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseJobRequest {
    pub raw_text: String,
    #[serde(default)]
    pub enrich: bool,
}

/// POST /api/v1/jobs/parse
///
/// Structures a pasted job posting.
pub async fn handle_parse_job(
    State(state): State<AppState>,
    Json(request): Json<ParseJobRequest>,
) -> Result<Json<ParsedJobDescription>, AppError> {
    state.check_input("raw_text", &request.raw_text)?;

    let mut jd = parse_job_description(&request.raw_text);

    if request.enrich {
        if let Some(provider) = state.extractor.as_deref() {
            jd = enrich_job(provider, jd).await;
        }
    }

    info!(
        jd_id = %jd.id,
        title = %jd.title,
        required = jd.required_skills.len(),
        preferred = jd.preferred_skills.len(),
        "job description parsed"
    );

    Ok(Json(jd))
}
