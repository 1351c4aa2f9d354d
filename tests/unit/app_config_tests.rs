/*!
 * Tests for application configuration loading and validation
 */

use adocai::app_config::Config;
use adocai::glossary::GlossaryMode;

/// Test that the default configuration matches the documented deployment
#[test]
fn test_config_default_shouldUseDocumentedValues() {
    let config = Config::default();

    assert_eq!(config.source_language, "zh");
    assert_eq!(config.target_language, "en");
    assert_eq!(config.translation.model, "DeepSeek-V3.2");
    assert_eq!(config.translation.endpoint, "https://openapi.coreshub.cn/v1");
    assert_eq!(config.translation.max_chars_per_request, 10_000);
    assert_eq!(config.translation.request_delay_ms, 10_000);
    assert_eq!(config.translation.temperature, 0.0);
    assert_eq!(config.files.extension, ".adoc");
    assert_eq!(config.files.progress_file, "translation_progress.json");
    assert_eq!(config.glossary.mode, GlossaryMode::Post);
}

/// Test that an empty JSON object deserializes to the full default config
#[test]
fn test_config_fromEmptyJson_shouldApplyDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.translation.model, Config::default().translation.model);
    assert_eq!(config.files.extension, ".adoc");
}

/// Test that a config survives a serialize/deserialize round trip
#[test]
fn test_config_serdeRoundTrip_shouldPreserveOverrides() {
    let mut config = Config::default();
    config.translation.model = "other-model".to_string();
    config.glossary.mode = GlossaryMode::Both;
    config.files.extension = ".asciidoc".to_string();

    let json = serde_json::to_string_pretty(&config).unwrap();
    let reloaded: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded.translation.model, "other-model");
    assert_eq!(reloaded.glossary.mode, GlossaryMode::Both);
    assert_eq!(reloaded.files.extension, ".asciidoc");
}

/// Test that the default configuration validates
#[test]
fn test_config_validate_withDefaults_shouldPass() {
    assert!(Config::default().validate().is_ok());
}

/// Test that an unknown language code fails validation
#[test]
fn test_config_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.target_language = "xx".to_string();

    assert!(config.validate().is_err());
}

/// Test that a broken endpoint URL fails validation
#[test]
fn test_config_validate_withInvalidEndpoint_shouldFail() {
    let mut config = Config::default();
    config.translation.endpoint = "not a url".to_string();

    assert!(config.validate().is_err());
}

/// Test that a zero chunk size fails validation
#[test]
fn test_config_validate_withZeroChunkSize_shouldFail() {
    let mut config = Config::default();
    config.translation.max_chars_per_request = 0;

    assert!(config.validate().is_err());
}

/// Test that a configured API key wins over the environment
#[test]
fn test_resolveApiKey_withConfiguredKey_shouldReturnIt() {
    let mut config = Config::default();
    config.translation.api_key = "sk-configured".to_string();

    assert_eq!(config.translation.resolve_api_key().unwrap(), "sk-configured");
}

/// Test that glossary mode names deserialize from lowercase
#[test]
fn test_glossaryMode_deserialization_shouldAcceptLowercase() {
    let config: Config =
        serde_json::from_str(r#"{"glossary": {"mode": "pre"}}"#).unwrap();
    assert_eq!(config.glossary.mode, GlossaryMode::Pre);
}
