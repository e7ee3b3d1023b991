use business::domain::errors::ConfigurationError;

use super::openai_config::OpenAIConfig;

pub struct AppConfig {
    pub openai: OpenAIConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            openai: OpenAIConfig::from_lookup(&lookup)?,
        })
    }
}
