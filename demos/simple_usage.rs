//! Simple example demonstrating how to use the File Analyzer library

use anyhow::Result;
use file_analyzer::utils::output_formatter;
use file_analyzer::{analyze_directory, evaluate_prefix};

fn main() -> Result<()> {
    // Directory for the sample files
    let dir = tempfile::tempdir()?;

    std::fs::write(
        dir.path().join("sample_data.txt"),
        "This is a simple example file.\nIt has a few lines, and a few repeated words: simple, simple!\n",
    )?;
    std::fs::write(dir.path().join("numbers.txt"), "one 1 two 2 three 3\n")?;

    println!("Analyzing directory: {}", dir.path().display());

    let results = analyze_directory(dir.path());

    // Display results
    print!("{}", output_formatter::format_report(&results, 5));

    println!("\nPrefix example: - * 2 3 1 = {}", evaluate_prefix("- * 2 3 1"));

    Ok(())
}
