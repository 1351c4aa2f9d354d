/*!
 * Glossary loading and enforcement for terminology consistency.
 *
 * A glossary is a fixed source-term to target-term mapping loaded from a
 * flat JSON object. It is listed in the translation prompt and re-applied
 * as a best-effort substitution pass, so domain terms come out the same
 * way in every file.
 */

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// When glossary substitution runs relative to the model call.
///
/// The prompt always lists the glossary pairs; this controls the
/// additional literal replacement pass on the chunk text.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlossaryMode {
    /// Replace terms in the source text before sending it to the model
    Pre,
    /// Replace terms in the model output after translation
    #[default]
    Post,
    /// Replace terms both before and after
    Both,
}

impl GlossaryMode {
    /// Whether substitution runs on the text sent to the model
    pub fn applies_before(self) -> bool {
        matches!(self, Self::Pre | Self::Both)
    }

    /// Whether substitution runs on the model output
    pub fn applies_after(self) -> bool {
        matches!(self, Self::Post | Self::Both)
    }
}

/// Fixed source-term to target-term mapping, immutable during a run
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    // Sorted map so substitution order is deterministic across runs
    terms: BTreeMap<String, String>,
}

impl Glossary {
    /// Create an empty glossary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a glossary from term pairs
    pub fn from_terms<I, S, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|(source, target)| (source.into(), target.into()))
                .collect(),
        }
    }

    /// Load a glossary from a JSON object file.
    ///
    /// A missing or unreadable file degrades to an empty glossary with a
    /// logged warning; malformed JSON is fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            warn!("Glossary file {} not found, skipping glossary", path.display());
            return Ok(Self::new());
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Glossary file {} could not be read ({}), skipping glossary", path.display(), e);
                return Ok(Self::new());
            }
        };

        let terms: BTreeMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Malformed glossary file: {}", path.display()))?;

        Ok(Self { terms })
    }

    /// Whether the glossary has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of term pairs
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Replace every occurrence of each source term with its target term.
    ///
    /// Idempotent as long as no target term re-introduces a source term.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (source, target) in &self.terms {
            result = result.replace(source, target);
        }
        result
    }

    /// Render the glossary as "source -> target" lines for the system prompt
    pub fn prompt_lines(&self) -> String {
        self.terms
            .iter()
            .map(|(source, target)| format!("{} -> {}", source, target))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
