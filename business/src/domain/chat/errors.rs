/// Failures of a single chat-completion call. None of them are retried.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("chat.invalid_conversation: {0}")]
    InvalidConversation(String),
    #[error("chat.authentication: {0}")]
    Authentication(String),
    #[error("chat.transport: {0}")]
    Transport(String),
    #[error("chat.provider: {0}")]
    Provider(String),
}

impl ChatError {
    pub fn invalid_conversation(detail: impl Into<String>) -> Self {
        ChatError::InvalidConversation(detail.into())
    }
    pub fn authentication(detail: impl Into<String>) -> Self {
        ChatError::Authentication(detail.into())
    }
    pub fn transport(detail: impl Into<String>) -> Self {
        ChatError::Transport(detail.into())
    }
    pub fn provider(detail: impl Into<String>) -> Self {
        ChatError::Provider(detail.into())
    }
}
