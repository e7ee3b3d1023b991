use reqwest::{Client, ClientBuilder};
use reqwest::redirect::Policy;

use business::domain::chat::errors::ChatError;
use business::domain::shared::value_objects::ApiKey;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Shared OpenAI HTTP client configuration.
///
/// No request timeout is set; whatever reqwest does by default applies.
pub struct OpenAIClient {
    pub client: Client,
    api_key: ApiKey,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: ApiKey) -> Result<Self, ChatError> {
        let client = Self::http_builder()
            .build()
            .map_err(|e| ChatError::transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Builder shared by every client this type owns.
    ///
    /// A redirected POST would reach the endpoint again, so 3xx is surfaced as-is.
    pub(crate) fn http_builder() -> ClientBuilder {
        Client::builder().redirect(Policy::none())
    }

    /// Points the client at another OpenAI-compatible host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the underlying HTTP client, keeping credential and base URL.
    #[cfg(any(test, feature = "test-util"))]
    pub(crate) fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key.expose())
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
