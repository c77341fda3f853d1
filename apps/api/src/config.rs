use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LLM_MODEL: &str = "claude-sonnet-4-5";
const DEFAULT_MAX_INPUT_CHARS: usize = 200_000;

/// Application configuration loaded from environment variables.
/// Nothing is required; without an API key the service runs heuristics only.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
    pub max_input_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v.trim().parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            llm_model: lookup("LLM_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.llm_model),
            max_input_chars: match lookup("MAX_INPUT_CHARS") {
                Some(v) => v
                    .trim()
                    .parse::<usize>()
                    .context("MAX_INPUT_CHARS must be a positive integer")?,
                None => defaults.max_input_chars,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.llm_model, "claude-sonnet-4-5");
        assert_eq!(config.max_input_chars, 200_000);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "3000"),
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("LLM_MODEL", "claude-haiku-4-5"),
            ("MAX_INPUT_CHARS", "5000"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm_model, "claude-haiku-4-5");
        assert_eq!(config.max_input_chars, 5000);
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = load(&[("ANTHROPIC_API_KEY", "  ")]).unwrap();
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
