/*!
 * Provider implementations for chat-completion translation backends.
 *
 * This module contains client implementations for LLM providers:
 * - OpenAI: any OpenAI-compatible chat-completions endpoint
 * - Mock: configurable stand-in for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single chat message
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Role of the message sender (user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Provider-agnostic chat-completion request
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// The model to use
    pub model: String,

    /// The messages for the conversation
    pub messages: Vec<ChatMessage>,

    /// System prompt to guide the model
    pub system: Option<String>,

    /// Temperature for generation
    pub temperature: Option<f32>,

    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new request for the given model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            system: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the system prompt
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Concatenated content of the user messages
    pub fn user_text(&self) -> String {
        self.messages
            .iter()
            .filter(|m| m.role == "user")
            .map(|m| m.content.as_str())
            .collect()
    }
}

/// Completion returned by a provider
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    /// The completion's text content
    pub text: String,

    /// Number of prompt tokens, when the provider reports usage
    pub prompt_tokens: Option<u64>,

    /// Number of completion tokens, when the provider reports usage
    pub completion_tokens: Option<u64>,
}

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be swapped behind the translation service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a chat request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<ChatCompletion, ProviderError>` - The completion or an error
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is usable
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Short identifier of the provider, for logging
    fn name(&self) -> &str;
}

pub mod mock;
pub mod openai;
