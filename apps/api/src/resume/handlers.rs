//! Axum route handlers for the résumé structurer.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::enrichment::enrich_resume;
use crate::errors::AppError;
use crate::models::resume::{FileType, ParsedResume};
use crate::resume::parse_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub raw_text: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: FileType,
    /// Overlay fields from the configured extraction provider, if any.
    #[serde(default)]
    pub enrich: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Structures extracted résumé text. Heuristic only unless `enrich` is set
/// and a provider is configured.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    state.check_input("raw_text", &request.raw_text)?;

    let mut resume = parse_resume(&request.raw_text, &request.file_name, request.file_type);

    if request.enrich {
        if let Some(provider) = state.extractor.as_deref() {
            resume = enrich_resume(provider, resume).await;
        }
    }

    info!(
        resume_id = %resume.id,
        file_name = %resume.file_name,
        skills = resume.skills.len(),
        experience = resume.experience.len(),
        empty = resume.is_empty(),
        "resume parsed"
    );

    Ok(Json(resume))
}
