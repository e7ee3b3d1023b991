use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::Message;

#[derive(Debug, Clone)]
pub struct TranslateParams {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

#[async_trait]
pub trait TranslateUseCase: Send + Sync {
    async fn execute(&self, params: TranslateParams) -> Result<Message, ChatError>;
}
