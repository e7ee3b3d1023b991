use std::io::Write;

use business::domain::chat::use_cases::translate::TranslateParams;
use business::domain::errors::ConfigurationError;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;

const SOURCE_LANGUAGE: &str = "English";
const TARGET_LANGUAGE: &str = "Italian";
const TEXT: &str = "hi!";

pub struct Runner;

impl Runner {
    /// Loads configuration, wires dependencies and runs a single translation.
    ///
    /// Configuration errors abort before any client is built.
    pub async fn bootstrap<L, W>(load_config: L, out: &mut W) -> anyhow::Result<()>
    where
        L: FnOnce() -> Result<AppConfig, ConfigurationError>,
        W: Write,
    {
        let config = load_config()?;
        let container = DependencyContainer::new(config)?;
        Self::run(container, out).await
    }

    /// Sends the fixed translation request once and writes the reply object to `out`.
    pub async fn run<W: Write>(container: DependencyContainer, out: &mut W) -> anyhow::Result<()> {
        let reply = container
            .translate_use_case
            .execute(TranslateParams {
                source_language: SOURCE_LANGUAGE.to_string(),
                target_language: TARGET_LANGUAGE.to_string(),
                text: TEXT.to_string(),
            })
            .await?;

        writeln!(out, "{}", serde_json::to_string_pretty(&reply)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use business::domain::chat::errors::ChatError;
    use business::domain::chat::model::Message;
    use business::domain::chat::services::ChatModelService;
    use business::domain::chat::use_cases::translate::TranslateUseCase;
    use mockall::mock;
    use openai::chat_model::OpenAIChatModel;
    use openai::test_support::{CIAO_COMPLETION, loopback_client, spawn_stub};

    use super::*;

    mock! {
        pub ChatModel {}

        #[async_trait]
        impl ChatModelService for ChatModel {
            async fn invoke(&self, messages: &[Message]) -> Result<Message, ChatError>;
        }
    }

    mock! {
        pub Translate {}

        #[async_trait]
        impl TranslateUseCase for Translate {
            async fn execute(&self, params: TranslateParams) -> Result<Message, ChatError>;
        }
    }

    fn container_with(chat_model: MockChatModel) -> DependencyContainer {
        DependencyContainer::from_chat_model(Arc::new(chat_model))
    }

    #[tokio::test]
    async fn should_print_translation_returned_by_chat_model() {
        let mut chat_model = MockChatModel::new();
        chat_model
            .expect_invoke()
            .withf(|messages| {
                messages.to_vec()
                    == vec![
                        Message::system("Translate the following from English into Italian"),
                        Message::user("hi!"),
                    ]
            })
            .times(1)
            .returning(|_| Ok(Message::assistant("ciao!")));
        let mut out: Vec<u8> = Vec::new();

        Runner::run(container_with(chat_model), &mut out)
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("ciao!"));
        assert!(printed.contains("\"assistant\""));
    }

    #[tokio::test]
    async fn should_print_ciao_from_chat_completions_endpoint() {
        // Arrange
        let (base_url, recorded) = spawn_stub(200, CIAO_COMPLETION).await;
        let config = AppConfig::from_lookup(|_| Some("test-key".to_string())).unwrap();
        let client = loopback_client(config.openai.api_key, &base_url);
        let chat_model = OpenAIChatModel::new(client, config.openai.model);
        let container = DependencyContainer::from_chat_model(Arc::new(chat_model));
        let mut out: Vec<u8> = Vec::new();

        // Act
        Runner::run(container, &mut out).await.unwrap();

        // Assert
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("ciao!"));

        let requests = recorded.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0]
            .head
            .to_ascii_lowercase()
            .contains("authorization: bearer test-key"));

        let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(body["model"], "gpt-4");
        assert_eq!(
            body["messages"][0]["content"],
            "Translate the following from English into Italian"
        );
        assert_eq!(body["messages"][1]["content"], "hi!");
    }

    #[tokio::test]
    async fn should_not_print_when_transport_fails() {
        let mut chat_model = MockChatModel::new();
        chat_model
            .expect_invoke()
            .times(1)
            .returning(|_| Err(ChatError::transport("connection reset")));
        let mut out: Vec<u8> = Vec::new();

        let error = Runner::run(container_with(chat_model), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<ChatError>(),
            Some(ChatError::Transport(_))
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn should_execute_use_case_exactly_once() {
        let mut translate = MockTranslate::new();
        translate
            .expect_execute()
            .withf(|params| {
                params.source_language == "English"
                    && params.target_language == "Italian"
                    && params.text == "hi!"
            })
            .times(1)
            .returning(|_| Ok(Message::assistant("ciao!")));
        let container = DependencyContainer {
            translate_use_case: Arc::new(translate),
        };
        let mut out: Vec<u8> = Vec::new();

        Runner::run(container, &mut out).await.unwrap();

        assert!(!out.is_empty());
    }

    #[tokio::test]
    async fn should_abort_before_wiring_when_credential_missing() {
        let mut out: Vec<u8> = Vec::new();

        let error = Runner::bootstrap(|| AppConfig::from_lookup(|_| None), &mut out)
            .await
            .unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::MissingVariable(
                "OPENAI_API_KEY".to_string()
            ))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn should_wire_container_when_credential_present() {
        let config = AppConfig::from_lookup(|_| Some("test-key".to_string())).unwrap();

        assert!(DependencyContainer::new(config).is_ok());
    }
}
