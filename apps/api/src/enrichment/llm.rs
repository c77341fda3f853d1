//! LLM-backed extraction provider.

use async_trait::async_trait;

use crate::enrichment::prompts::{render, EXTRACTION_SYSTEM, JOB_EXTRACTION_TEMPLATE, RESUME_EXTRACTION_TEMPLATE};
use crate::enrichment::ExtractionProvider;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ParsedResume;

/// Asks the language model for the same record shapes the heuristics build.
/// The returned records are overlays; ids and provenance are filled by
/// [`crate::enrichment::Merge`].
pub struct LlmExtractionProvider {
    llm: LlmClient,
}

impl LlmExtractionProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ExtractionProvider for LlmExtractionProvider {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn extract_resume(&self, raw_text: &str) -> Result<ParsedResume, AppError> {
        let prompt = render(RESUME_EXTRACTION_TEMPLATE, raw_text);
        self.llm
            .call_json::<ParsedResume>(&prompt, EXTRACTION_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("resume extraction failed: {e}")))
    }

    async fn extract_job(&self, raw_text: &str) -> Result<ParsedJobDescription, AppError> {
        let prompt = render(JOB_EXTRACTION_TEMPLATE, raw_text);
        self.llm
            .call_json::<ParsedJobDescription>(&prompt, EXTRACTION_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("job extraction failed: {e}")))
    }
}
