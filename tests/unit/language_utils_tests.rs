/*!
 * Tests for ISO language code utilities
 */

use adocai::language_utils::{get_language_name, validate_language_code};

/// Test that two-letter codes resolve to English names
#[test]
fn test_get_language_name_withPart1Code_shouldReturnName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("zh").unwrap(), "Chinese");
}

/// Test that three-letter codes resolve to English names
#[test]
fn test_get_language_name_withPart3Code_shouldReturnName() {
    assert_eq!(get_language_name("fra").unwrap(), "French");
}

/// Test that codes are trimmed and case-insensitive
#[test]
fn test_get_language_name_withMixedCase_shouldNormalize() {
    assert_eq!(get_language_name(" EN ").unwrap(), "English");
}

/// Test that an unknown code is rejected
#[test]
fn test_get_language_name_withUnknownCode_shouldFail() {
    assert!(get_language_name("xx").is_err());
    assert!(get_language_name("").is_err());
    assert!(get_language_name("english").is_err());
}

/// Test validation of known and unknown codes
#[test]
fn test_validate_language_code_shouldAcceptKnownAndRejectUnknown() {
    assert!(validate_language_code("de").is_ok());
    assert!(validate_language_code("deu").is_ok());
    assert!(validate_language_code("q!").is_err());
}
