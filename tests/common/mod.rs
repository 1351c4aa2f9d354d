/*!
 * Common test utilities for the adocai test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use adocai::app_config::Config;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample AsciiDoc file for testing
pub fn create_test_adoc(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"= Cluster Guide

This guide explains cluster administration.

== Nodes

Each node runs the agent.

[source,shell]
----
systemctl status agent
----
"#;
    create_test_file(dir, filename, content)
}

/// Configuration suitable for tests: progress file inside the temp
/// directory and no pacing delay.
pub fn test_config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.files.progress_file = dir
        .join("translation_progress.json")
        .to_string_lossy()
        .into_owned();
    config.translation.request_delay_ms = 0;
    config
}
