/// Configuration errors raised while loading settings at startup.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("configuration.missing_variable: {0} must be set")]
    MissingVariable(String),
    #[error("configuration.empty_variable: {0} must not be empty")]
    EmptyVariable(String),
    #[error("configuration.empty_credential")]
    EmptyCredential,
}

impl ConfigurationError {
    pub fn missing_variable(name: impl Into<String>) -> Self {
        ConfigurationError::MissingVariable(name.into())
    }
    pub fn empty_variable(name: impl Into<String>) -> Self {
        ConfigurationError::EmptyVariable(name.into())
    }
}
