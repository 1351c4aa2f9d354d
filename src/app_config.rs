use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::env;
use url::Url;

use crate::glossary::GlossaryMode;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Environment variable consulted when the config carries no API key
pub const API_KEY_ENV: &str = "ADOCAI_API_KEY";

/// Legacy environment variable, kept for compatibility with older setups
pub const API_KEY_ENV_FALLBACK: &str = "OPENAI_API_KEY";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// File discovery and progress config
    #[serde(default)]
    pub files: FileConfig,

    /// Glossary config
    #[serde(default)]
    pub glossary: GlossaryConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; falls back to the environment when empty
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum document characters per request chunk
    #[serde(default = "default_max_chars_per_request")]
    pub max_chars_per_request: usize,

    /// Idle delay between consecutive requests in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 1.0)
    /// Zero keeps the translation deterministic
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            max_chars_per_request: default_max_chars_per_request(),
            request_delay_ms: default_request_delay_ms(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
        }
    }
}

impl TranslationConfig {
    /// Get the API key, consulting the environment when the config has none
    pub fn resolve_api_key(&self) -> Result<String> {
        if !self.api_key.is_empty() {
            return Ok(self.api_key.clone());
        }
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        if let Ok(key) = env::var(API_KEY_ENV_FALLBACK) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        Err(anyhow!(
            "No API key configured: set translation.api_key or the {} environment variable",
            API_KEY_ENV
        ))
    }
}

/// File discovery and progress configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FileConfig {
    /// Filename suffix of files to translate (case-sensitive)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Path of the progress file recording completed translations
    #[serde(default = "default_progress_file")]
    pub progress_file: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            progress_file: default_progress_file(),
        }
    }
}

/// Glossary configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GlossaryConfig {
    /// Path of the glossary file (flat JSON object)
    #[serde(default = "default_glossary_file")]
    pub file: String,

    /// When glossary substitution is applied (pre, post, both)
    #[serde(default)]
    pub mode: GlossaryMode,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            file: default_glossary_file(),
            mode: GlossaryMode::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "zh".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_model() -> String {
    "DeepSeek-V3.2".to_string()
}

fn default_endpoint() -> String {
    "https://openapi.coreshub.cn/v1".to_string()
}

fn default_max_chars_per_request() -> usize {
    crate::chunker::DEFAULT_MAX_CHARS
}

fn default_request_delay_ms() -> u64 {
    10_000 // 10 second idle delay between requests
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.0
}

fn default_extension() -> String {
    ".adoc".to_string()
}

fn default_progress_file() -> String {
    crate::progress::DEFAULT_PROGRESS_FILE.to_string()
}

fn default_glossary_file() -> String {
    "glossary.json".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        // Validate the endpoint URL
        Url::parse(&self.translation.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", self.translation.endpoint, e))?;

        if self.translation.max_chars_per_request == 0 {
            return Err(anyhow!("max_chars_per_request must be positive"));
        }

        if self.files.extension.is_empty() {
            return Err(anyhow!("File extension must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            files: FileConfig::default(),
            glossary: GlossaryConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
