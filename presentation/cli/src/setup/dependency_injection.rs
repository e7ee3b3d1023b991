use std::sync::Arc;

use logger::TracingLogger;

use openai::chat_model::OpenAIChatModel;
use openai::client::OpenAIClient;

use business::application::chat::translate::TranslateUseCaseImpl;
use business::domain::chat::services::ChatModelService;
use business::domain::chat::use_cases::translate::TranslateUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub translate_use_case: Arc<dyn TranslateUseCase>,
}

impl DependencyContainer {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        // Infrastructure adapters
        let openai_client = OpenAIClient::new(config.openai.api_key)?;
        let chat_model = OpenAIChatModel::new(openai_client, config.openai.model);
        tracing::debug!(model = chat_model.model(), "OpenAI chat model ready");

        Ok(Self::from_chat_model(Arc::new(chat_model)))
    }

    /// Wires the use cases around an already built chat model adapter.
    pub fn from_chat_model(chat_model: Arc<dyn ChatModelService>) -> Self {
        let logger = Arc::new(TracingLogger);

        // Chat use cases
        let translate_use_case = Arc::new(TranslateUseCaseImpl { chat_model, logger });

        Self { translate_use_case }
    }
}
