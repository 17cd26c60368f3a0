//! File Analyzer - lexical statistics for directories of plain-text files
//!
//! The main entry point for the file analyzer application. With `--dir` or
//! `--sample` it runs non-interactively; otherwise it shows a small menu.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, LevelFilter};

use file_analyzer::config::{load_config, AnalyzerConfig};
use file_analyzer::core::analyzer::{FileAnalysis, FileAnalyzer};
use file_analyzer::core::scanner::WordBoundary;
use file_analyzer::utils::{file_utils, logging, output_formatter};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "file_analyzer",
    version,
    about = "Lexical statistics for directories of plain-text files",
    long_about = "Scans every text file in a directory and reports, per file:
- line, word and character counts
- vowel and consonant counts and their ratio
- average word length
- the most common words, stop words excluded

Run without --dir or --sample for the interactive menu."
)]
struct Args {
    /// Directory whose text files are analyzed (not recursive)
    #[arg(long = "dir")]
    dir: Option<PathBuf>,

    /// Path of the text report (default: report.txt)
    #[arg(long = "report", default_value = "report.txt")]
    report: PathBuf,

    /// Display the sample file and exit
    #[arg(long = "sample", action = ArgAction::SetTrue)]
    sample: bool,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export results to HTML report
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Export results to CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Number of common words listed per file (default: 5)
    #[arg(long = "top")]
    top: Option<usize>,

    /// Extension of the files to analyze (default: txt)
    #[arg(long = "extension")]
    extension: Option<String>,

    /// End words at line breaks as well as at whitespace
    #[arg(long = "line-ends-words", action = ArgAction::SetTrue)]
    line_ends_words: bool,

    /// Number of parallel workers (0=auto, default: 1)
    #[arg(long = "parallel")]
    parallel: Option<usize>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Show only summary information
    #[arg(long = "summary-only", action = ArgAction::SetTrue)]
    summary_only: bool,

    /// Path to JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Write log records to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::setup_logging(args.log_level, args.log_file.as_deref()) {
        eprintln!("{} {:#}", "Warning:".yellow(), e);
    }

    let config = apply_overrides(load_config(args.config.as_deref())?, &args);

    if args.sample {
        display_sample(&config);
    } else if let Some(dir) = &args.dir {
        run_analysis(dir, &args.report, &config, &args)?;
    } else {
        run_menu(&config, &args)?;
    }

    Ok(())
}

/// Command-line flags take precedence over the configuration file
fn apply_overrides(mut config: AnalyzerConfig, args: &Args) -> AnalyzerConfig {
    if let Some(top) = args.top {
        config.top_words = top;
    }
    if let Some(extension) = &args.extension {
        config.extension = extension.clone();
    }
    if args.line_ends_words {
        config.word_boundary = WordBoundary::Line;
    }
    if let Some(parallel) = args.parallel {
        config.parallel = parallel;
    }
    config
}

/// Interactive menu: display the sample file, analyze a directory, or exit
fn run_menu(config: &AnalyzerConfig, args: &Args) -> Result<()> {
    let options = ["Read from file and Display", "File Analysis", "Exit"];

    let choice = Select::new()
        .with_prompt("Choose an option")
        .items(&options)
        .default(0)
        .interact()?;

    match choice {
        0 => display_sample(config),
        1 => {
            let dir: String = Input::new()
                .with_prompt("Enter the folder path for analysis (absolute)")
                .interact_text()?;
            let report: String = Input::new()
                .with_prompt("Enter the file path for report (absolute)")
                .interact_text()?;

            run_analysis(Path::new(dir.trim()), Path::new(report.trim()), config, args)?;
        }
        _ => println!("Exiting the program."),
    }

    Ok(())
}

/// Print the configured sample file
fn display_sample(config: &AnalyzerConfig) {
    let mut stdout = io::stdout();

    if let Err(e) = file_utils::display_file(&config.sample_file, &mut stdout) {
        error!("{:#}", e);
        eprintln!("{} {:#}", "Error:".red(), e);
    }
}

/// Analyze a directory, write the report and any requested exports
fn run_analysis(dir: &Path, report_path: &Path, config: &AnalyzerConfig, args: &Args) -> Result<()> {
    let start_time = Instant::now();
    let analyzer = FileAnalyzer::new(config);

    // Set up progress bar if not in quiet mode
    let progress_bar = if !args.quiet {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let results = analyzer.analyze_directory_parallel(dir, config.parallel, progress_bar.as_ref())?;

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Analysis complete");
    }

    report_results(&results, report_path, config, args);

    if !args.quiet {
        print!(
            "{}",
            output_formatter::format_summary(&results, start_time.elapsed(), args.summary_only)
        );
    }

    Ok(())
}

/// Write the text report and every requested export. Failures are reported
/// and do not stop the remaining outputs.
fn report_results(results: &[FileAnalysis], report_path: &Path, config: &AnalyzerConfig, args: &Args) {
    let top = config.top_words;

    let mut outputs: Vec<(&str, &Path, Result<()>)> = vec![(
        "Report",
        report_path,
        output_formatter::write_report(results, report_path, top),
    )];

    if let Some(path) = &args.json {
        outputs.push(("JSON export", path.as_path(), output_formatter::export_results_json(results, path, top)));
    }
    if let Some(path) = &args.html {
        outputs.push(("HTML report", path.as_path(), output_formatter::create_html_report(results, path, top)));
    }
    if let Some(path) = &args.csv {
        outputs.push(("CSV report", path.as_path(), output_formatter::create_csv_report(results, path, top)));
    }

    for (kind, path, outcome) in outputs {
        match outcome {
            Ok(()) => {
                info!("{} generated at: {}", kind, path.display());
                if !args.quiet {
                    println!("{} {}", format!("{} generated at:", kind).green(), path.display());
                }
            }
            Err(e) => {
                error!("{:#}", e);
                eprintln!("{} {:#}", "Error:".red(), e);
            }
        }
    }
}
