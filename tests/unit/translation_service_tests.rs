/*!
 * Tests for the glossary-aware translation service
 */

use std::sync::Arc;

use adocai::app_config::TranslationConfig;
use adocai::errors::TranslationError;
use adocai::glossary::{Glossary, GlossaryMode};
use adocai::providers::Provider;
use adocai::providers::mock::MockProvider;
use adocai::translation_service::TranslationService;

fn service_with(
    provider: Arc<dyn Provider>,
    glossary: Glossary,
    mode: GlossaryMode,
) -> TranslationService {
    TranslationService::new(
        provider,
        TranslationConfig::default(),
        glossary,
        mode,
        "zh",
        "en",
    )
    .unwrap()
}

/// Test that post mode replaces leftover source terms in the output
#[tokio::test]
async fn test_translate_withPostMode_shouldEnforceGlossaryOnOutput() {
    let glossary = Glossary::from_terms([("控制台", "console")]);
    let service = service_with(Arc::new(MockProvider::echoing()), glossary, GlossaryMode::Post);

    let translated = service.translate("open the 控制台 now").await.unwrap();

    assert_eq!(translated, "open the console now");
}

/// Test that pre mode substitutes terms before the text reaches the model
#[tokio::test]
async fn test_translate_withPreMode_shouldSubstituteBeforeSending() {
    let glossary = Glossary::from_terms([("控制台", "console")]);
    // The echoing mock returns exactly what the model was sent
    let service = service_with(Arc::new(MockProvider::echoing()), glossary, GlossaryMode::Pre);

    let translated = service.translate("open the 控制台 now").await.unwrap();

    assert_eq!(translated, "open the console now");
}

/// Test that the system prompt lists the glossary pairs
#[tokio::test]
async fn test_translate_shouldListGlossaryPairsInSystemPrompt() {
    let glossary = Glossary::from_terms([("集群", "cluster")]);
    // Leak the system prompt through the completion text; pre mode keeps
    // the output pass from rewriting it.
    let provider =
        MockProvider::working().with_custom_response(|request| {
            request.system.clone().unwrap_or_default()
        });
    let service = service_with(Arc::new(provider), glossary, GlossaryMode::Pre);

    let prompt = service.translate("text").await.unwrap();

    assert!(prompt.contains("集群 -> cluster"));
    assert!(prompt.contains("Chinese"));
    assert!(prompt.contains("English"));
    assert!(prompt.contains("AsciiDoc"));
}

/// Test that an empty glossary adds no mapping section to the prompt
#[tokio::test]
async fn test_translate_withEmptyGlossary_shouldOmitMappingSection() {
    let provider =
        MockProvider::working().with_custom_response(|request| {
            request.system.clone().unwrap_or_default()
        });
    let service = service_with(Arc::new(provider), Glossary::new(), GlossaryMode::Pre);

    let prompt = service.translate("text").await.unwrap();

    assert!(!prompt.contains("glossary mappings"));
}

/// Test that a provider failure propagates as a typed error
#[tokio::test]
async fn test_translate_withFailingProvider_shouldPropagateError() {
    let service = service_with(Arc::new(MockProvider::failing()), Glossary::new(), GlossaryMode::Post);

    let result = service.translate("text").await;

    assert!(matches!(result, Err(TranslationError::Provider(_))));
}

/// Test that an empty completion is rejected rather than written out
#[tokio::test]
async fn test_translate_withEmptyCompletion_shouldFail() {
    let service = service_with(Arc::new(MockProvider::empty()), Glossary::new(), GlossaryMode::Post);

    let result = service.translate("text").await;

    assert!(matches!(result, Err(TranslationError::EmptyCompletion)));
}

/// Test that whitespace-only text returns unchanged without a provider call
#[tokio::test]
async fn test_translate_withWhitespaceOnlyText_shouldSkipProvider() {
    let provider = Arc::new(MockProvider::working());
    let service = service_with(provider.clone(), Glossary::new(), GlossaryMode::Post);

    let translated = service.translate("  \n\n  ").await.unwrap();

    assert_eq!(translated, "  \n\n  ");
    assert_eq!(provider.request_count(), 0);
}
