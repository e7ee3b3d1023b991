use async_trait::async_trait;

use super::errors::ChatError;
use super::model::Message;

/// Service port for a remote chat-completion model.
///
/// One call to `invoke` performs at most one request to the provider and
/// yields exactly one assistant message. No retry, caching or streaming.
#[async_trait]
pub trait ChatModelService: Send + Sync {
    async fn invoke(&self, messages: &[Message]) -> Result<Message, ChatError>;
}
