//! Analyzer configuration
//!
//! Settings come from an optional JSON file. Anything missing from the file
//! falls back to the defaults below; command-line flags override both.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::core::scanner::WordBoundary;

/// Number of ranked words shown per file in reports
pub const DEFAULT_TOP_WORDS: usize = 5;

/// Extension that marks a plain-text file
pub const DEFAULT_EXTENSION: &str = "txt";

/// Configuration options for an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// File extension to pick up, without the leading dot
    pub extension: String,

    /// How many of the most common words each report lists
    pub top_words: usize,

    /// What ends a word during the scan
    pub word_boundary: WordBoundary,

    /// File shown by the "display" menu option
    pub sample_file: PathBuf,

    /// Number of parallel workers (0 = auto, 1 = sequential)
    pub parallel: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            top_words: DEFAULT_TOP_WORDS,
            word_boundary: WordBoundary::Whitespace,
            sample_file: PathBuf::from("Files/data.txt"),
            parallel: 1,
        }
    }
}

impl AnalyzerConfig {
    /// Extension with any leading dot removed, so ".txt" and "txt" agree
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Load configuration from file if provided
///
/// A missing or malformed file is reported and the defaults are used instead.
/// Only an unreadable existing file is an error.
pub fn load_config(config_path: Option<&Path>) -> Result<AnalyzerConfig> {
    let config = match config_path {
        Some(path) => {
            if !path.exists() {
                error!("Configuration file not found: {}", path.display());
                AnalyzerConfig::default()
            } else {
                let config_str = std::fs::read_to_string(path)?;
                match serde_json::from_str(&config_str) {
                    Ok(config) => {
                        info!("Loaded configuration from {}", path.display());
                        config
                    }
                    Err(e) => {
                        error!("Invalid JSON in configuration file: {}", e);
                        AnalyzerConfig::default()
                    }
                }
            }
        }
        None => AnalyzerConfig::default(),
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = load_config(Some(Path::new("does/not/exist.json"))).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analyzer.json");
        std::fs::write(&path, r#"{ "top_words": 3, "word_boundary": "line" }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.top_words, 3);
        assert_eq!(config.word_boundary, WordBoundary::Line);
        assert_eq!(config.extension, DEFAULT_EXTENSION);
        assert_eq!(config.parallel, 1);
    }

    #[test]
    fn test_invalid_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_normalized_extension() {
        let config = AnalyzerConfig {
            extension: ".log".to_string(),
            ..AnalyzerConfig::default()
        };
        assert_eq!(config.normalized_extension(), "log");
    }
}
