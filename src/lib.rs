//! File Analyzer - lexical statistics for directories of plain-text files
//!
//! This library scans text files, counting lines, words, letters and digits,
//! ranks the most frequent non-stop words, and writes the results as a text
//! report or one of several export formats. It also carries a small prefix
//! expression evaluator.

// Re-export core modules
pub mod config;
pub mod core;
pub mod utils;

// Re-export main analyzer types for convenience
pub use crate::config::{load_config, AnalyzerConfig};
pub use crate::core::analyzer::{AnalysisError, FileAnalysis, FileAnalyzer};
pub use crate::core::prefix::evaluate_prefix;
pub use crate::core::scanner::WordBoundary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze every text file in a directory with the default settings
///
/// This is a convenience function for simple use cases. An unreadable
/// directory yields an empty list.
///
/// # Arguments
///
/// * `dir` - Directory holding `.txt` files
///
/// # Returns
///
/// One FileAnalysis per readable text file
pub fn analyze_directory<P: AsRef<std::path::Path>>(dir: P) -> Vec<FileAnalysis> {
    FileAnalyzer::default().analyze_directory(dir.as_ref())
}

/// Command-line application functionality
pub mod app {
    use crate::config::AnalyzerConfig;
    use crate::core::analyzer::FileAnalyzer;
    use crate::utils::output_formatter;
    use std::path::Path;

    /// Analyze a directory and write the text report
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory to analyze
    /// * `report_path` - Where the text report is written
    /// * `config` - Configuration options
    ///
    /// # Returns
    ///
    /// The analysis results, whether or not the report could be written
    pub fn run_analyzer(
        dir: &Path,
        report_path: &Path,
        config: &AnalyzerConfig,
    ) -> Vec<crate::FileAnalysis> {
        let analyzer = FileAnalyzer::new(config);
        let results = analyzer.analyze_directory(dir);

        match output_formatter::write_report(&results, report_path, config.top_words) {
            Ok(()) => log::info!("Report generated at: {}", report_path.display()),
            Err(e) => log::error!("{:#}", e),
        }

        results
    }
}
