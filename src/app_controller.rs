use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::app_config::Config;
use crate::chunker;
use crate::errors::TranslationError;
use crate::file_utils::FileManager;
use crate::glossary::Glossary;
use crate::pacing::{FixedDelayPacer, Pacer};
use crate::progress::ProgressStore;
use crate::providers::Provider;
use crate::providers::openai::OpenAI;
use crate::translation_service::TranslationService;

// @module: Application controller for the translation walk

/// Outcome counters for a directory run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    /// Files translated and recorded during this run
    pub translated: usize,
    /// Files skipped because the progress set already lists them
    pub skipped: usize,
    /// Files whose translation failed; they stay eligible for the next run
    pub failed: usize,
}

/// Main application controller for in-place document translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Chunk translation service
    service: TranslationService,
    // @field: Idle delay between remote requests
    pacer: Arc<dyn Pacer>,
}

impl Controller {
    // @method: Create a controller wired to the configured remote endpoint
    pub fn with_config(config: Config, glossary: Glossary) -> Result<Self> {
        let api_key = config.translation.resolve_api_key()?;
        let provider: Arc<dyn Provider> = Arc::new(OpenAI::new(
            api_key,
            &config.translation.endpoint,
            &config.translation.model,
            config.translation.timeout_secs,
        ));
        let pacer = Arc::new(FixedDelayPacer::from_millis(config.translation.request_delay_ms));
        Self::with_parts(config, glossary, provider, pacer)
    }

    /// Create a controller from explicit collaborators.
    ///
    /// This is the seam tests use to substitute a mock provider and a
    /// zero-delay pacer for the real endpoint and its pacing.
    pub fn with_parts(
        config: Config,
        glossary: Glossary,
        provider: Arc<dyn Provider>,
        pacer: Arc<dyn Pacer>,
    ) -> Result<Self> {
        let service = TranslationService::new(
            provider,
            config.translation.clone(),
            glossary,
            config.glossary.mode,
            &config.source_language,
            &config.target_language,
        )?;

        Ok(Self {
            config,
            service,
            pacer,
        })
    }

    /// Walk the source directory and translate every matching file in place.
    ///
    /// Files listed in the progress set are skipped; a file that fails is
    /// logged and left untouched, and the walk continues.
    pub async fn run_folder(&self, source_dir: &Path) -> Result<RunSummary> {
        if !FileManager::dir_exists(source_dir) {
            return Err(anyhow!("{} is not a valid directory", source_dir.display()));
        }

        let mut progress = ProgressStore::load(&self.config.files.progress_file)
            .context("Failed to load translation progress")?;

        let files =
            FileManager::find_files_with_suffix(source_dir, &self.config.files.extension)?;
        if files.is_empty() {
            warn!(
                "No {} files found under {}",
                self.config.files.extension,
                source_dir.display()
            );
            return Ok(RunSummary::default());
        }

        info!(
            "🚀 adocai: {} - {} ({} files)",
            self.service.provider_name(),
            self.service.model(),
            files.len()
        );

        // Progress bar over the file walk
        let folder_pb = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Translating files");

        let mut summary = RunSummary::default();
        let mut requests_sent: u64 = 0;

        for file in &files {
            if progress.contains(file) {
                info!("⏩ Skipping already translated {}", file.display());
                summary.skipped += 1;
                folder_pb.inc(1);
                continue;
            }

            info!(
                "Translating {} with {} (in place, glossary applied)",
                file.display(),
                self.service.model()
            );

            match self.translate_file(file, &mut requests_sent).await {
                Ok(()) => {
                    progress.mark_done(file);
                    if let Err(e) = progress.save() {
                        warn!("Failed to persist translation progress: {}", e);
                    }
                    info!("✅ Successfully translated {}", file.display());
                    summary.translated += 1;
                }
                Err(e) => {
                    // The failed file stays out of the progress set and keeps
                    // its original content, so the next run retries it.
                    error!("❌ {}", e);
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        info!(
            "Finished: {} translated, {} skipped, {} failed",
            summary.translated, summary.skipped, summary.failed
        );

        Ok(summary)
    }

    /// Translate one file: read, chunk, translate each chunk in order, then
    /// write the joined result back in a single atomic replacement.
    ///
    /// All chunk results are buffered before anything is written, so a
    /// failure partway through the chunk sequence leaves the on-disk
    /// original untouched.
    async fn translate_file(
        &self,
        file: &Path,
        requests_sent: &mut u64,
    ) -> Result<(), TranslationError> {
        let content = FileManager::read_to_string(file)
            .map_err(|e| TranslationError::for_file(file, e))?;

        let chunks = chunker::split_text(&content, self.config.translation.max_chars_per_request);
        let total = chunks.len();

        let mut translated_chunks = Vec::with_capacity(total);
        for (index, chunk) in chunks.iter().enumerate() {
            // Idle between consecutive requests, never before the first
            if *requests_sent > 0 {
                self.pacer.pause().await;
            }

            debug!("Translating chunk {}/{} of {}", index + 1, total, file.display());
            let result = self.service.translate(chunk).await;
            *requests_sent += 1;

            translated_chunks.push(result.map_err(|e| TranslationError::for_file(file, e))?);
        }

        // Chunks carry their own separators, so the join is plain concatenation
        let translated = translated_chunks.concat();
        FileManager::write_atomic(file, &translated)
            .map_err(|e| TranslationError::for_file(file, e))?;

        Ok(())
    }
}
