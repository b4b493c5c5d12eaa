use std::env;

use crate::error::{AppError, Result};

const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_MODEL: &str = "t5-small";
const DEFAULT_MIN_LENGTH: u32 = 20;
const DEFAULT_MAX_LENGTH: u32 = 40;

/// Generation settings for the pretrained summarization model.
///
/// Defaults match the values the model is normally run with: `t5-small`
/// with summaries between 20 and 40 tokens and over-long inputs truncated
/// to the model's context window before generation.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base: String,
    pub model: String,
    pub min_length: u32,
    pub max_length: u32,
    pub truncation: bool,
    pub api_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            truncation: true,
            api_token: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let mut config = Config::default();

        if let Ok(base) = env::var("SUMMARIZER_API_BASE") {
            config.api_base = base;
        }
        if let Ok(model) = env::var("SUMMARIZER_MODEL") {
            config.model = model;
        }
        if let Ok(min) = env::var("SUMMARIZER_MIN_LENGTH") {
            config.min_length = min
                .parse()
                .map_err(|e| AppError::ConfigError(format!("Invalid min length: {}", e)))?;
        }
        if let Ok(max) = env::var("SUMMARIZER_MAX_LENGTH") {
            config.max_length = max
                .parse()
                .map_err(|e| AppError::ConfigError(format!("Invalid max length: {}", e)))?;
        }
        if let Ok(truncation) = env::var("SUMMARIZER_TRUNCATION") {
            config.truncation = truncation
                .parse()
                .map_err(|e| AppError::ConfigError(format!("Invalid truncation flag: {}", e)))?;
        }
        config.api_token = env::var("HF_API_TOKEN").ok();

        Ok(config)
    }

    /// Full URL of the inference endpoint for the configured model.
    pub fn model_url(&self) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_values() {
        let config = Config::default();
        assert_eq!(config.model, "t5-small");
        assert_eq!(config.min_length, 20);
        assert_eq!(config.max_length, 40);
        assert!(config.truncation);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn load_applies_env_overrides_and_rejects_bad_values() {
        // Single test so the process-global env mutations stay sequential
        unsafe {
            env::set_var("SUMMARIZER_TRUNCATION", "false");
            env::set_var("SUMMARIZER_MIN_LENGTH", "25");
        }
        let config = Config::load().unwrap();
        assert!(!config.truncation);
        assert_eq!(config.min_length, 25);

        unsafe {
            env::set_var("SUMMARIZER_TRUNCATION", "not-a-bool");
        }
        let err = Config::load().unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));

        unsafe {
            env::remove_var("SUMMARIZER_TRUNCATION");
            env::remove_var("SUMMARIZER_MIN_LENGTH");
        }
    }

    #[test]
    fn model_url_joins_base_and_model() {
        let config = Config {
            api_base: "http://localhost:8080/models/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.model_url(), "http://localhost:8080/models/t5-small");
    }
}
