use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating ISO 639-1 (2-letter) and
/// ISO 639-3 (3-letter) language codes and resolving them to English names
/// for use in translation prompts.
/// Parse a language code into an isolang Language
fn parse_language_code(code: &str) -> Option<Language> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code),
        3 => Language::from_639_3(&normalized_code),
        _ => None,
    }
}

/// Validate that a language code is a known ISO 639 code
pub fn validate_language_code(code: &str) -> Result<()> {
    parse_language_code(code)
        .map(|_| ())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Get the English name of a language from its ISO 639 code
pub fn get_language_name(code: &str) -> Result<String> {
    parse_language_code(code)
        .map(|language| language.to_name().to_string())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}
