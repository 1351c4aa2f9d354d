/*!
 * Persistent progress tracking for resumable runs.
 *
 * The progress store is a set of file paths already translated, persisted
 * as a JSON array after every completed file. Re-runs consult it to skip
 * finished work, so an interrupted run loses at most the in-flight file.
 */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::file_utils::FileManager;

/// Default progress file name, relative to the working directory
pub const DEFAULT_PROGRESS_FILE: &str = "translation_progress.json";

/// Set of already-translated file paths, backed by a JSON file
#[derive(Debug, Clone)]
pub struct ProgressStore {
    /// Where the set is persisted
    path: PathBuf,
    /// Paths already translated
    done: HashSet<String>,
}

impl ProgressStore {
    /// Load the persisted set, or start empty when no file exists yet.
    /// A present but malformed file is a fatal error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            return Ok(Self {
                path,
                done: HashSet::new(),
            });
        }

        let content = FileManager::read_to_string(&path)?;
        let entries: Vec<String> = serde_json::from_str(&content)
            .with_context(|| format!("Malformed progress file: {}", path.display()))?;

        Ok(Self {
            path,
            done: entries.into_iter().collect(),
        })
    }

    /// Whether a file was already translated
    pub fn contains<P: AsRef<Path>>(&self, file: P) -> bool {
        self.done.contains(&Self::key(file.as_ref()))
    }

    /// Record a file as translated
    pub fn mark_done<P: AsRef<Path>>(&mut self, file: P) {
        self.done.insert(Self::key(file.as_ref()));
    }

    /// Forget a file, making it eligible for retranslation
    pub fn remove<P: AsRef<Path>>(&mut self, file: P) -> bool {
        self.done.remove(&Self::key(file.as_ref()))
    }

    /// Number of recorded files
    pub fn len(&self) -> usize {
        self.done.len()
    }

    /// Whether no file has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Persist the whole set, sorted for a stable file layout
    pub fn save(&self) -> Result<()> {
        let mut entries: Vec<&String> = self.done.iter().collect();
        entries.sort();

        let json = serde_json::to_string_pretty(&entries)
            .context("Failed to serialize translation progress")?;
        FileManager::write_atomic(&self.path, &json)
    }

    fn key(file: &Path) -> String {
        file.to_string_lossy().into_owned()
    }
}
