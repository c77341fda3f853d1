//! Axum route handlers for the match scorer.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::analyze;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ParsedResume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume: ParsedResume,
    pub job_description: ParsedJobDescription,
}

/// POST /api/v1/analysis
///
/// Scores a structured résumé against a structured posting. Both records are
/// taken as-is; nothing is re-parsed.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    state.check_input("resume.raw_text", &request.resume.raw_text)?;
    state.check_input("job_description.raw_text", &request.job_description.raw_text)?;

    let result = analyze(&request.resume, &request.job_description);

    info!(
        analysis_id = %result.id,
        resume_id = %result.resume_id,
        jd_id = %result.jd_id,
        overall = result.overall_score,
        skill = result.skill_match_score,
        keyword = result.keyword_score,
        experience = result.experience_score,
        ats = result.ats_score,
        "analysis complete"
    );

    Ok(Json(result))
}
