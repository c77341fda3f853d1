use std::sync::Arc;

use crate::config::Config;
use crate::enrichment::ExtractionProvider;
use crate::errors::AppError;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// AI extraction used when a request sets `enrich`. `None` without an API key.
    pub extractor: Option<Arc<dyn ExtractionProvider>>,
}

impl AppState {
    pub fn new(config: Config, extractor: Option<Arc<dyn ExtractionProvider>>) -> Self {
        Self { config, extractor }
    }

    /// Rejects blank input and input over the configured size limit.
    pub fn check_input(&self, field: &str, text: &str) -> Result<(), AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
        let chars = text.chars().count();
        if chars > self.config.max_input_chars {
            return Err(AppError::Validation(format!(
                "{field} is too long ({chars} characters, limit {})",
                self.config.max_input_chars
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(limit: usize) -> AppState {
        AppState::new(
            Config {
                max_input_chars: limit,
                ..Config::default()
            },
            None,
        )
    }

    #[test]
    fn test_blank_input_rejected() {
        let err = state(100).check_input("raw_text", " \n\t").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "raw_text cannot be empty"));
    }

    #[test]
    fn test_limit_counts_characters() {
        let s = state(5);
        assert!(s.check_input("raw_text", "résumé").is_err());
        assert!(s.check_input("raw_text", "héllo").is_ok());
        assert!(s.check_input("raw_text", "héllo!").is_err());
    }
}
