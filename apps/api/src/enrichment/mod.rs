//! Optional AI extraction. A provider returns its own structured record for
//! the same raw text; that record is merged on top of the heuristic one with
//! [`Merge`], so the heuristic result always stands on its own.
//!
//! `AppState` carries the provider as `Option<Arc<dyn ExtractionProvider>>`.

pub mod llm;
pub mod merge;
pub mod prompts;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ParsedResume;

pub use merge::Merge;

/// An alternative, non-deterministic source of structured fields. Implement
/// this to swap extraction backends without touching handlers.
#[async_trait]
pub trait ExtractionProvider: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    async fn extract_resume(&self, raw_text: &str) -> Result<ParsedResume, AppError>;

    async fn extract_job(&self, raw_text: &str) -> Result<ParsedJobDescription, AppError>;
}

/// Overlays the provider's résumé on `base`. Provider failures are logged and
/// `base` is returned unchanged.
pub async fn enrich_resume(provider: &dyn ExtractionProvider, base: ParsedResume) -> ParsedResume {
    match provider.extract_resume(&base.raw_text).await {
        Ok(overlay) => {
            info!(provider = provider.name(), "resume enriched");
            base.merge(&overlay)
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "resume enrichment failed; using heuristic result");
            base
        }
    }
}

/// Overlays the provider's job description on `base`, falling back to `base`.
pub async fn enrich_job(provider: &dyn ExtractionProvider, base: ParsedJobDescription) -> ParsedJobDescription {
    match provider.extract_job(&base.raw_text).await {
        Ok(overlay) => {
            info!(provider = provider.name(), "job description enriched");
            base.merge(&overlay)
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "job enrichment failed; using heuristic result");
            base
        }
    }
}
