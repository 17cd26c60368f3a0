//! Core file analyzer implementation
//!
//! This file contains the FileAnalyzer, which discovers the text files in a
//! directory and turns each one into a FileAnalysis record.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use indicatif::ProgressBar;
use log::{debug, error, info};
use rayon::prelude::*;

use crate::config::AnalyzerConfig;
use crate::core::scanner::{ScanOutput, WordBoundary, WordScanner};
use crate::core::stop_words;
use crate::utils::file_utils;

/// Errors raised while analyzing a single file or listing a directory
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("File could not be opened: {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Lexical statistics for one text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAnalysis {
    /// File name only, not the full path
    pub file_name: String,
    pub line_count: usize,
    /// Words emitted by the scan, stop words and empty words included
    pub word_count: usize,
    /// Letters, digits and other non-whitespace characters
    pub char_count: usize,
    pub vowel_count: usize,
    pub consonant_count: usize,
    pub avg_word_length: usize,
    /// Non-stop words, most frequent first
    pub common_words: Vec<(String, usize)>,
}

impl FileAnalysis {
    /// Build the record for `file_name` from a finished scan
    pub fn from_scan(file_name: impl Into<String>, scan: ScanOutput) -> Self {
        let common_words = stop_words::rank_words(scan.words.iter().map(String::as_str));
        let totals = scan.totals;

        Self {
            file_name: file_name.into(),
            line_count: totals.lines,
            word_count: totals.words,
            char_count: totals.chars,
            vowel_count: totals.vowels,
            consonant_count: totals.consonants,
            avg_word_length: average_word_length(totals.chars, totals.words),
            common_words,
        }
    }

    /// Consonants per vowel, integer division. 0 when there are no vowels.
    pub fn vowel_consonant_ratio(&self) -> usize {
        self.consonant_count.checked_div(self.vowel_count).unwrap_or(0)
    }

    /// The `n` most common words
    pub fn top_words(&self, n: usize) -> &[(String, usize)] {
        &self.common_words[..n.min(self.common_words.len())]
    }
}

/// Characters per word, integer division. 0 when there are no words.
pub fn average_word_length(char_count: usize, word_count: usize) -> usize {
    char_count.checked_div(word_count).unwrap_or(0)
}

/// Core file analyzer structure
#[derive(Debug, Clone)]
pub struct FileAnalyzer {
    /// Extension of the files to analyze, without the dot
    extension: String,

    /// What ends a word during the scan
    word_boundary: WordBoundary,
}

impl Default for FileAnalyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl FileAnalyzer {
    /// Create a new FileAnalyzer instance from the run configuration
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            extension: config.normalized_extension().to_string(),
            word_boundary: config.word_boundary,
        }
    }

    /// List the text files directly inside `dir`.
    ///
    /// An unreadable directory is reported and yields no files, so the run
    /// carries on with zero results.
    pub fn discover_files(&self, dir: &Path) -> Vec<String> {
        match file_utils::list_files_with_extension(dir, &self.extension) {
            Ok(names) => names,
            Err(e) => {
                error!("{}", e);
                Vec::new()
            }
        }
    }

    /// Analyze a single file `file_name` found in `dir`
    pub fn analyze_file(&self, dir: &Path, file_name: &str) -> Result<FileAnalysis, AnalysisError> {
        let path = dir.join(file_name);
        debug!("Analyzing file: {}", path.display());

        let file = File::open(&path).map_err(|source| AnalysisError::Open {
            path: path.clone(),
            source,
        })?;

        self.analyze_source(&path, file_name, BufReader::new(file))
    }

    /// Analyze an opened source for `path`, mapping read failures to
    /// [`AnalysisError::Read`]
    pub fn analyze_source<R: BufRead>(
        &self,
        path: &Path,
        file_name: &str,
        reader: R,
    ) -> Result<FileAnalysis, AnalysisError> {
        self.analyze_reader(file_name, reader)
            .map_err(|source| AnalysisError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Analyze text from any buffered reader, recording it under `file_name`
    pub fn analyze_reader<R: BufRead>(&self, file_name: &str, reader: R) -> io::Result<FileAnalysis> {
        let scan = WordScanner::scan_reader(reader, self.word_boundary)?;
        Ok(FileAnalysis::from_scan(file_name, scan))
    }

    /// Analyze every text file in `dir`, one after another.
    ///
    /// Files that cannot be opened or read are reported and skipped. Results
    /// keep the directory listing order.
    pub fn analyze_directory(&self, dir: &Path) -> Vec<FileAnalysis> {
        info!("Performing file analysis on: {}", dir.display());
        let file_names = self.discover_files(dir);
        self.analyze_files(dir, &file_names)
    }

    /// Analyze the named files in `dir` in order, skipping any that fail
    pub fn analyze_files(&self, dir: &Path, file_names: &[String]) -> Vec<FileAnalysis> {
        file_names
            .iter()
            .filter_map(|name| self.analyze_logged(dir, name, None))
            .collect()
    }

    /// Analyze every text file in `dir` on a local thread pool.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory to scan (not recursive)
    /// * `workers` - Number of threads, 0 picks the available parallelism
    /// * `progress` - Optional progress bar, advanced once per file
    ///
    /// # Returns
    ///
    /// Results in directory listing order. Only building the pool can fail.
    pub fn analyze_directory_parallel(
        &self,
        dir: &Path,
        workers: usize,
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<FileAnalysis>> {
        let start_time = Instant::now();
        info!("Performing file analysis on: {}", dir.display());
        let file_names = self.discover_files(dir);

        if let Some(pb) = progress {
            pb.set_length(file_names.len() as u64);
        }

        let num_workers = if workers == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            workers
        };

        // Create a local thread pool instead of using the global one
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build thread pool: {}", e))?;

        let results: Vec<FileAnalysis> = pool.install(|| {
            file_names
                .par_iter()
                .filter_map(|name| self.analyze_logged(dir, name, progress))
                .collect()
        });

        info!(
            "Analyzed {} of {} files with {} workers in {:?}",
            results.len(),
            file_names.len(),
            num_workers,
            start_time.elapsed()
        );

        Ok(results)
    }

    fn analyze_logged(&self, dir: &Path, name: &str, progress: Option<&ProgressBar>) -> Option<FileAnalysis> {
        info!("Found text file: {}", name);
        let result = self.analyze_file(dir, name);

        if let Some(pb) = progress {
            pb.inc(1);
        }

        match result {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_text(text: &str) -> FileAnalysis {
        FileAnalyzer::default()
            .analyze_reader("sample.txt", text.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_quick_brown_fox() {
        let analysis = analyze_text("the quick brown fox");

        assert_eq!(analysis.file_name, "sample.txt");
        assert_eq!(analysis.line_count, 1);
        assert_eq!(analysis.word_count, 4);
        assert_eq!(analysis.common_words.len(), 3);
        assert!(analysis.common_words.iter().all(|(_, count)| *count == 1));
        assert!(!analysis.common_words.iter().any(|(word, _)| word == "the"));
    }

    #[test]
    fn test_average_word_length() {
        assert_eq!(average_word_length(20, 4), 5);
        assert_eq!(average_word_length(22, 4), 5);
        assert_eq!(average_word_length(7, 0), 0);
    }

    #[test]
    fn test_ratio_without_vowels_is_zero() {
        let analysis = analyze_text("rhythm 123");

        assert_eq!(analysis.vowel_count, 0);
        assert_eq!(analysis.consonant_count, 6);
        assert_eq!(analysis.vowel_consonant_ratio(), 0);
    }

    #[test]
    fn test_ratio_is_integer_division() {
        let analysis = analyze_text("strength");

        assert_eq!(analysis.vowel_count, 1);
        assert_eq!(analysis.consonant_count, 7);
        assert_eq!(analysis.vowel_consonant_ratio(), 7);
    }

    #[test]
    fn test_word_count_includes_filtered_words() {
        let analysis = analyze_text("the cat and the hat ");

        assert_eq!(analysis.word_count, 5);
        assert_eq!(
            analysis.common_words,
            vec![("cat".to_string(), 1), ("hat".to_string(), 1)]
        );
    }

    #[test]
    fn test_top_words_clamps_to_available() {
        let analysis = analyze_text("red red blue");

        assert_eq!(analysis.top_words(5).len(), 2);
        assert_eq!(analysis.top_words(1), &[("red".to_string(), 2)]);
    }

    #[test]
    fn test_line_boundary_config() {
        let config = AnalyzerConfig {
            word_boundary: WordBoundary::Line,
            ..AnalyzerConfig::default()
        };
        let analysis = FileAnalyzer::new(&config)
            .analyze_reader("lines.txt", "alpha\nbeta".as_bytes())
            .unwrap();

        assert_eq!(analysis.word_count, 2);
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileAnalyzer::default()
            .analyze_file(dir.path(), "missing.txt")
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Open { .. }));
    }

    struct BrokenReader;

    impl io::Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device went away"))
        }
    }

    #[test]
    fn test_failing_reader_is_read_error() {
        let analyzer = FileAnalyzer::default();

        let io_err = analyzer
            .analyze_reader("broken.txt", BufReader::new(BrokenReader))
            .unwrap_err();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);

        let err = analyzer
            .analyze_source(Path::new("dir/broken.txt"), "broken.txt", BufReader::new(BrokenReader))
            .unwrap_err();
        match err {
            AnalysisError::Read { path, source } => {
                assert_eq!(path, Path::new("dir/broken.txt"));
                assert_eq!(source.to_string(), "device went away");
            }
            other => panic!("Expected a read error, got {:?}", other),
        }
    }

    #[test]
    fn test_failing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "alpha beta").unwrap();
        std::fs::write(dir.path().join("c.txt"), "gamma").unwrap();
        let names = vec!["a.txt".to_string(), "b.txt".to_string(), "c.txt".to_string()];

        let results = FileAnalyzer::default().analyze_files(dir.path(), &names);

        let analyzed: Vec<_> = results.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(analyzed, vec!["a.txt", "c.txt"]);
        assert_eq!(results[0].word_count, 2);
    }
}
