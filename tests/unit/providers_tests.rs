/*!
 * Tests for provider request types and the mock provider
 */

use adocai::errors::ProviderError;
use adocai::providers::mock::MockProvider;
use adocai::providers::{ChatRequest, Provider};

/// Test that the request builder accumulates messages and settings
#[test]
fn test_chatRequest_builder_shouldAccumulateFields() {
    let request = ChatRequest::new("test-model")
        .system("instructions")
        .add_message("user", "first")
        .add_message("user", "second")
        .temperature(0.0)
        .max_tokens(128);

    assert_eq!(request.model, "test-model");
    assert_eq!(request.system.as_deref(), Some("instructions"));
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.temperature, Some(0.0));
    assert_eq!(request.max_tokens, Some(128));
}

/// Test that user_text concatenates user messages only
#[test]
fn test_chatRequest_userText_shouldSkipNonUserRoles() {
    let request = ChatRequest::new("m")
        .add_message("user", "keep ")
        .add_message("assistant", "drop ")
        .add_message("user", "this");

    assert_eq!(request.user_text(), "keep this");
}

/// Test that a working mock echoes the input with a marker
#[tokio::test]
async fn test_mockProvider_working_shouldReturnMarkedText() {
    let provider = MockProvider::working();
    let request = ChatRequest::new("m").add_message("user", "hello");

    let completion = provider.complete(request).await.unwrap();

    assert_eq!(completion.text, "[TRANSLATED] hello");
    assert_eq!(provider.request_count(), 1);
}

/// Test that a custom response generator overrides the default
#[tokio::test]
async fn test_mockProvider_withCustomResponse_shouldUseGenerator() {
    let provider = MockProvider::uppercasing();
    let request = ChatRequest::new("m").add_message("user", "make me loud");

    let completion = provider.complete(request).await.unwrap();

    assert_eq!(completion.text, "MAKE ME LOUD");
}

/// Test that a failing mock always errors
#[tokio::test]
async fn test_mockProvider_failing_shouldAlwaysError() {
    let provider = MockProvider::failing();
    let request = ChatRequest::new("m").add_message("user", "hello");

    let result = provider.complete(request).await;

    assert!(matches!(result, Err(ProviderError::RequestFailed(_))));
    assert!(provider.test_connection().await.is_err());
}

/// Test that fail_first errors exactly n times, then recovers
#[tokio::test]
async fn test_mockProvider_failFirst_shouldRecoverAfterFailures() {
    let provider = MockProvider::fail_first(2);

    for _ in 0..2 {
        let request = ChatRequest::new("m").add_message("user", "x");
        assert!(provider.complete(request).await.is_err());
    }

    let request = ChatRequest::new("m").add_message("user", "x");
    assert!(provider.complete(request).await.is_ok());
    assert_eq!(provider.request_count(), 3);
}

/// Test that the empty mock returns a completion with no text
#[tokio::test]
async fn test_mockProvider_empty_shouldReturnEmptyCompletion() {
    let provider = MockProvider::empty();
    let request = ChatRequest::new("m").add_message("user", "hello");

    let completion = provider.complete(request).await.unwrap();

    assert!(completion.text.is_empty());
}
