/*!
 * Glossary-aware translation of text chunks through a chat-completion provider.
 *
 * One chunk goes out per request, accompanied by a system instruction that
 * directs verbatim markup preservation and lists every glossary pair. The
 * glossary is then re-applied to the output as a best-effort enforcement
 * pass; the model may paraphrase, so the listing in the prompt does the
 * heavy lifting and the substitution pass catches untranslated leftovers.
 */

use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::app_config::TranslationConfig;
use crate::errors::{ProviderError, TranslationError};
use crate::glossary::{Glossary, GlossaryMode};
use crate::language_utils;
use crate::providers::{ChatRequest, Provider};

/// Translates single text units through a provider, enforcing the glossary
pub struct TranslationService {
    /// Provider implementation
    provider: Arc<dyn Provider>,

    /// Configuration for the translation service
    config: TranslationConfig,

    /// Term mapping enforced on every unit
    glossary: Glossary,

    /// When the substitution pass runs
    glossary_mode: GlossaryMode,

    /// English name of the source language, for the prompt
    source_language_name: String,

    /// English name of the target language, for the prompt
    target_language_name: String,
}

impl TranslationService {
    /// Create a new translation service over the given provider
    pub fn new(
        provider: Arc<dyn Provider>,
        config: TranslationConfig,
        glossary: Glossary,
        glossary_mode: GlossaryMode,
        source_language: &str,
        target_language: &str,
    ) -> Result<Self> {
        let source_language_name = language_utils::get_language_name(source_language)?;
        let target_language_name = language_utils::get_language_name(target_language)?;

        Ok(Self {
            provider,
            config,
            glossary,
            glossary_mode,
            source_language_name,
            target_language_name,
        })
    }

    /// Model this service sends requests to
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Provider identifier, for logging
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Build the system instruction: markup preservation, literal
    /// translation, and the full glossary listing.
    fn system_prompt(&self) -> String {
        let mut prompt = format!(
            "You are an expert technical translator. Translate the user's AsciiDoc content from {} to {}. \
             Keep every AsciiDoc tag, attribute, macro and block delimiter intact, and translate the prose literally. \
             Only respond with the translated document, without any explanations or notes.",
            self.source_language_name, self.target_language_name
        );

        if !self.glossary.is_empty() {
            prompt.push_str("\nAlways respect the following glossary mappings:\n");
            prompt.push_str(&self.glossary.prompt_lines());
        }

        prompt
    }

    /// Translate a single unit of text.
    ///
    /// Transport and API errors propagate typed to the caller, which decides
    /// whether to skip the file, retry, or abort the run.
    pub async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        // Whitespace-only chunks carry nothing to translate
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let prepared = if self.glossary_mode.applies_before() {
            self.glossary.apply(text)
        } else {
            text.to_string()
        };

        let request = ChatRequest::new(&self.config.model)
            .system(self.system_prompt())
            .add_message("user", prepared)
            .temperature(self.config.temperature);

        let completion = self.provider.complete(request).await?;
        if completion.text.is_empty() {
            return Err(TranslationError::EmptyCompletion);
        }

        if let (Some(prompt_tokens), Some(completion_tokens)) =
            (completion.prompt_tokens, completion.completion_tokens)
        {
            debug!(
                "Completion used {} prompt + {} completion tokens",
                prompt_tokens, completion_tokens
            );
        }

        let translated = if self.glossary_mode.applies_after() {
            self.glossary.apply(&completion.text)
        } else {
            completion.text
        };

        Ok(translated)
    }

    /// Test the connection to the underlying provider
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.test_connection().await
    }
}
