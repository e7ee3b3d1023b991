use business::domain::errors::ConfigurationError;
use business::domain::shared::value_objects::ApiKey;

pub const API_KEY_VARIABLE: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Configuration for OpenAI API access.
pub struct OpenAIConfig {
    pub api_key: ApiKey,
    pub model: String,
}

impl OpenAIConfig {
    /// Reads the credential through `lookup`.
    ///
    /// Environment variables:
    /// - OPENAI_API_KEY: API key (required, non-empty)
    ///
    /// The model identifier is fixed to `gpt-4`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(API_KEY_VARIABLE)
            .ok_or_else(|| ConfigurationError::missing_variable(API_KEY_VARIABLE))?;
        let api_key =
            ApiKey::new(raw).map_err(|_| ConfigurationError::empty_variable(API_KEY_VARIABLE))?;

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }
}
