use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::{
    Message, ResponseMetadata, Role, TokenUsage, validate_conversation,
};
use business::domain::chat::services::ChatModelService;

use crate::client::OpenAIClient;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    id: Option<String>,
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Chat model backed by the OpenAI chat completions endpoint.
pub struct OpenAIChatModel {
    client: OpenAIClient,
    model: String,
}

impl OpenAIChatModel {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request<'a>(&'a self, messages: &'a [Message]) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role(),
                    content: m.content(),
                })
                .collect(),
        }
    }

    /// Extracts the provider's own error message, falling back to the raw body.
    fn error_detail(status: StatusCode, body: &str) -> String {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.trim().to_string());

        if message.is_empty() {
            status.to_string()
        } else {
            format!("{}: {}", status, message)
        }
    }

    fn parse_response(body: &str) -> Result<Message, ChatError> {
        let data: ChatCompletionResponse = serde_json::from_str(body)
            .map_err(|e| ChatError::provider(format!("malformed response: {}", e)))?;

        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::provider("response contains no choices"))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| ChatError::provider("response message has no content"))?;

        Ok(Message::assistant(content).with_metadata(ResponseMetadata {
            id: data.id,
            model: data.model,
            finish_reason: choice.finish_reason,
            usage: data.usage,
        }))
    }
}

#[async_trait]
impl ChatModelService for OpenAIChatModel {
    async fn invoke(&self, messages: &[Message]) -> Result<Message, ChatError> {
        validate_conversation(messages)?;

        let body = self.build_request(messages);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header(AUTHORIZATION, self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::transport(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ChatError::authentication(Self::error_detail(status, &text)));
        }

        if !status.is_success() {
            return Err(ChatError::provider(Self::error_detail(status, &text)));
        }

        Self::parse_response(&text)
    }
}
