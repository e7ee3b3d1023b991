use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::Message;
use crate::domain::chat::services::ChatModelService;
use crate::domain::chat::use_cases::translate::{TranslateParams, TranslateUseCase};
use crate::domain::logger::Logger;

pub struct TranslateUseCaseImpl {
    pub chat_model: Arc<dyn ChatModelService>,
    pub logger: Arc<dyn Logger>,
}

impl TranslateUseCaseImpl {
    fn build_messages(params: &TranslateParams) -> Vec<Message> {
        vec![
            Message::system(format!(
                "Translate the following from {} into {}",
                params.source_language, params.target_language
            )),
            Message::user(params.text.clone()),
        ]
    }
}

#[async_trait]
impl TranslateUseCase for TranslateUseCaseImpl {
    async fn execute(&self, params: TranslateParams) -> Result<Message, ChatError> {
        self.logger.info(&format!(
            "Translating text from {} into {}",
            params.source_language, params.target_language
        ));

        let messages = Self::build_messages(&params);

        let reply = self
            .chat_model
            .invoke(&messages)
            .await
            .inspect_err(|e| self.logger.error(&format!("Translation failed: {}", e)))?;

        self.logger.debug(&format!(
            "Received {} characters from the chat model",
            reply.content().chars().count()
        ));

        Ok(reply)
    }
}
