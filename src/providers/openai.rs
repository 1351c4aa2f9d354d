use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{ChatCompletion, ChatRequest, Provider};

/// Client for OpenAI-compatible chat-completions endpoints
#[derive(Debug)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base URL of the endpoint (e.g. "https://api.openai.com/v1")
    endpoint: String,
    /// Model used for connection tests
    model: String,
}

/// Chat-completions wire request
#[derive(Debug, Serialize)]
struct OpenAIRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<OpenAIMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Chat message wire format
#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAIMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct OpenAIUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u64,
    /// Number of completion tokens
    pub completion_tokens: u64,
}

/// A single completion choice
#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    /// The generated message
    pub message: OpenAIMessage,
}

/// Chat-completions wire response
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    /// The completion choices (one, unless n > 1 was requested)
    pub choices: Vec<OpenAIChoice>,
    /// Token usage information
    pub usage: Option<OpenAIUsage>,
}

impl OpenAI {
    /// Create a new client for an OpenAI-compatible endpoint
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }

    fn to_wire(request: &ChatRequest) -> OpenAIRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        // The chat-completions API has no top-level system field; the system
        // prompt travels as the leading message.
        if let Some(system) = &request.system {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        for message in &request.messages {
            messages.push(OpenAIMessage {
                role: message.role.clone(),
                content: message.content.clone(),
            });
        }

        OpenAIRequest {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl Provider for OpenAI {
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError> {
        let response = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&Self::to_wire(&request))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Chat completion API error ({}): {}", status, message);
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(message),
                429 => ProviderError::RateLimitExceeded(message),
                status_code => ProviderError::ApiError {
                    status_code,
                    message,
                },
            });
        }

        let completion = response
            .json::<OpenAIResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let prompt_tokens = completion.usage.as_ref().map(|u| u.prompt_tokens);
        let completion_tokens = completion.usage.as_ref().map(|u| u.completion_tokens);

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ParseError("response contained no choices".to_string()))?;

        Ok(ChatCompletion {
            text: choice.message.content,
            prompt_tokens,
            completion_tokens,
        })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = ChatRequest::new(&self.model)
            .add_message("user", "Hello")
            .max_tokens(10);

        self.complete(request).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
