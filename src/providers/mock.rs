/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with translated text
 * - `MockProvider::fail_first(n)` - Fails the first n requests, then succeeds
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::empty()` - Returns empty completions
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{ChatCompletion, ChatRequest, Provider};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a marked-up echo of the input
    Working,
    /// Always fails with an error
    Failing,
    /// Fails the first `failures` requests, then succeeds
    FailFirst {
        /// Number of leading requests that fail
        failures: usize,
    },
    /// Succeeds for the first `successes` requests, then fails
    FailAfter {
        /// Number of leading requests that succeed
        successes: usize,
    },
    /// Returns empty completions
    Empty,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of completion requests received
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&ChatRequest) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that fails the first `failures` requests
    pub fn fail_first(failures: usize) -> Self {
        Self::new(MockBehavior::FailFirst { failures })
    }

    /// Create a mock that succeeds `successes` times, then fails
    pub fn fail_after(successes: usize) -> Self {
        Self::new(MockBehavior::FailAfter { successes })
    }

    /// Create a mock that returns empty completions
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&ChatRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Create a mock that uppercases the user text, for end-to-end tests
    pub fn uppercasing() -> Self {
        Self::working().with_custom_response(|request| request.user_text().to_uppercase())
    }

    /// Create a mock that echoes the user text unchanged
    pub fn echoing() -> Self {
        Self::working().with_custom_response(|request| request.user_text())
    }

    /// Number of completion requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, ProviderError> {
        let sequence = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider configured to fail".to_string(),
            )),
            MockBehavior::FailFirst { failures } if sequence < failures => {
                Err(ProviderError::RequestFailed(format!(
                    "mock provider failing request {} of {}",
                    sequence + 1,
                    failures
                )))
            }
            MockBehavior::FailAfter { successes } if sequence >= successes => {
                Err(ProviderError::RequestFailed(format!(
                    "mock provider failing after {} successful requests",
                    successes
                )))
            }
            MockBehavior::Empty => Ok(ChatCompletion {
                text: String::new(),
                prompt_tokens: None,
                completion_tokens: None,
            }),
            _ => {
                let text = match self.custom_response {
                    Some(generator) => generator(&request),
                    None => format!("[TRANSLATED] {}", request.user_text()),
                };
                let input_len = request.user_text().chars().count() as u64;
                Ok(ChatCompletion {
                    text,
                    prompt_tokens: Some(input_len),
                    completion_tokens: Some(input_len),
                })
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "mock provider configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
