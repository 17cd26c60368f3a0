//! Output formatter for analysis results
//!
//! This module handles formatting and exporting analysis results in various
//! formats: the brace-delimited text report, console summary, JSON, HTML and
//! CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::core::analyzer::FileAnalysis;

/// Render the ranked words as `{"word",count}` pairs joined by commas
fn format_common_words(analysis: &FileAnalysis, top_n: usize) -> String {
    analysis
        .top_words(top_n)
        .iter()
        .map(|(word, count)| format!("{{\"{}\",{}}}", word, count))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format the text report for a set of analyzed files
///
/// The layout is brace-delimited for readability only; it is not JSON.
///
/// # Arguments
///
/// * `results` - Per-file analysis results, in report order
/// * `top_n` - How many common words to list for each file
///
/// # Returns
///
/// The complete report text
pub fn format_report(results: &[FileAnalysis], top_n: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Total Number of Files: {}\n", results.len()));
    output.push_str("{\n");

    for analysis in results {
        output.push_str(&format!("{{ File Name: {},\n", analysis.file_name));
        output.push_str(&format!(" Line Count: {},\n", analysis.line_count));
        output.push_str(&format!(" Word Count: {},\n", analysis.word_count));
        output.push_str(&format!(" Most Common Words: {},\n", format_common_words(analysis, top_n)));
        output.push_str(&format!(" Average Word Length: {},\n", analysis.avg_word_length));
        output.push_str(&format!(" Vowel to Consonant Ratio: 1 : {}\n", analysis.vowel_consonant_ratio()));
        output.push_str(&format!(" Consonant Count: {},\n", analysis.consonant_count));
        output.push_str(&format!(" Character Count: {},\n", analysis.char_count));
        output.push_str("},\n");
    }

    output.push_str("}\n");
    output
}

/// Write the text report to `report_path`
pub fn write_report(results: &[FileAnalysis], report_path: &Path, top_n: usize) -> Result<()> {
    let mut file = File::create(report_path)
        .context(format!("Report file could not be created: {}", report_path.display()))?;

    file.write_all(format_report(results, top_n).as_bytes())
        .context("Failed to write report data")?;

    for analysis in results {
        log::info!("Reporting analysis for file: {}", analysis.file_name);
    }

    Ok(())
}

/// Format analysis results for console output
///
/// # Arguments
///
/// * `results` - Per-file analysis results
/// * `elapsed` - Time the analysis took
/// * `summary_only` - Skip the per-file blocks
pub fn format_summary(results: &[FileAnalysis], elapsed: Duration, summary_only: bool) -> String {
    let mut output = String::new();

    let total_lines: usize = results.iter().map(|a| a.line_count).sum();
    let total_words: usize = results.iter().map(|a| a.word_count).sum();

    output.push_str(&format!("\n{}\n", "Analysis Complete".bold()));
    output.push_str(&format!("{} {}\n", "Files analyzed:".green(), results.len()));
    output.push_str(&format!("{} {}\n", "Total lines:".green(), total_lines));
    output.push_str(&format!("{} {}\n", "Total words:".green(), total_words));
    output.push_str(&format!("{} {:.2} seconds\n", "Time elapsed:".green(), elapsed.as_secs_f64()));

    if summary_only {
        return output;
    }

    for analysis in results {
        output.push_str(&format!("\n{}\n", "=".repeat(60).bold()));
        output.push_str(&format!("{} {}\n", "Results for:".cyan(), analysis.file_name));
        output.push_str(&format!("{}\n", "=".repeat(60).bold()));
        output.push_str(&format!("  {} {}\n", "Lines:".yellow(), analysis.line_count));
        output.push_str(&format!("  {} {}\n", "Words:".yellow(), analysis.word_count));
        output.push_str(&format!("  {} {}\n", "Characters:".yellow(), analysis.char_count));
        output.push_str(&format!(
            "  {} {} / {}\n",
            "Vowels / consonants:".yellow(),
            analysis.vowel_count,
            analysis.consonant_count
        ));
        output.push_str(&format!("  {} {}\n", "Average word length:".yellow(), analysis.avg_word_length));

        for (word, count) in analysis.top_words(5) {
            output.push_str(&format!("    - {} ({})\n", word, count));
        }
    }

    output
}

/// Serializable view of one file, including the derived ratio
fn analysis_to_json(analysis: &FileAnalysis, top_n: usize) -> Value {
    let common_words: Vec<Value> = analysis
        .top_words(top_n)
        .iter()
        .map(|(word, count)| json!({ "word": word, "count": count }))
        .collect();

    json!({
        "file_name": analysis.file_name,
        "line_count": analysis.line_count,
        "word_count": analysis.word_count,
        "char_count": analysis.char_count,
        "vowel_count": analysis.vowel_count,
        "consonant_count": analysis.consonant_count,
        "avg_word_length": analysis.avg_word_length,
        "vowel_consonant_ratio": analysis.vowel_consonant_ratio(),
        "common_words": common_words,
    })
}

/// Export results to a JSON file
pub fn export_results_json(results: &[FileAnalysis], output_path: &Path, top_n: usize) -> Result<()> {
    let json_output: Vec<Value> = results.iter().map(|a| analysis_to_json(a, top_n)).collect();

    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, &json_output).context("Failed to write JSON data")?;

    Ok(())
}

/// Create an HTML report from analysis results
pub fn create_html_report(results: &[FileAnalysis], output_path: &Path, top_n: usize) -> Result<()> {
    let mut handlebars = Handlebars::new();

    const HTML_TEMPLATE: &str = r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Text File Analysis Report</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                line-height: 1.6;
                color: #333;
                max-width: 1200px;
                margin: 0 auto;
                padding: 20px;
            }
            h1 {
                color: #2c3e50;
                border-bottom: 2px solid #3498db;
                padding-bottom: 10px;
            }
            .timestamp {
                color: #7f8c8d;
                font-size: 0.9em;
                margin-bottom: 30px;
            }
            .file {
                background-color: #f8f9fa;
                border-radius: 5px;
                padding: 15px;
                margin-bottom: 20px;
                box-shadow: 0 2px 5px rgba(0,0,0,0.1);
            }
            table td {
                padding: 2px 12px 2px 0;
            }
        </style>
    </head>
    <body>
        <h1>Text File Analysis Report</h1>
        <div class="timestamp">Generated on: {{timestamp}}</div>
        <p>Total Number of Files: {{total_files}}</p>

        {{#each files}}
        <div class="file">
            <h2>{{file_name}}</h2>
            <table>
                <tr><td>Line Count</td><td>{{line_count}}</td></tr>
                <tr><td>Word Count</td><td>{{word_count}}</td></tr>
                <tr><td>Character Count</td><td>{{char_count}}</td></tr>
                <tr><td>Consonant Count</td><td>{{consonant_count}}</td></tr>
                <tr><td>Average Word Length</td><td>{{avg_word_length}}</td></tr>
                <tr><td>Vowel to Consonant Ratio</td><td>1 : {{vowel_consonant_ratio}}</td></tr>
            </table>
            <h3>Most Common Words</h3>
            <ul>
                {{#each common_words}}
                <li>{{word}} ({{count}})</li>
                {{/each}}
            </ul>
        </div>
        {{/each}}
    </body>
    </html>
    "#;

    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    let files: Vec<Value> = results.iter().map(|a| analysis_to_json(a, top_n)).collect();
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let template_data = json!({
        "timestamp": timestamp,
        "total_files": results.len(),
        "files": files,
    });

    let html = handlebars
        .render("report", &template_data)
        .context("Failed to render HTML template")?;

    let mut file = File::create(output_path)
        .context(format!("Failed to create HTML output file: {}", output_path.display()))?;

    file.write_all(html.as_bytes()).context("Failed to write HTML data")?;

    Ok(())
}

/// Create a CSV report from analysis results, one row per file
pub fn create_csv_report(results: &[FileAnalysis], output_path: &Path, top_n: usize) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record([
            "File Name",
            "Line Count",
            "Word Count",
            "Character Count",
            "Vowel Count",
            "Consonant Count",
            "Average Word Length",
            "Vowel to Consonant Ratio",
            "Most Common Words",
        ])
        .context("Failed to write CSV header")?;

    for analysis in results {
        let common_words = analysis
            .top_words(top_n)
            .iter()
            .map(|(word, count)| format!("{}:{}", word, count))
            .collect::<Vec<_>>()
            .join(";");

        writer
            .write_record([
                analysis.file_name.clone(),
                analysis.line_count.to_string(),
                analysis.word_count.to_string(),
                analysis.char_count.to_string(),
                analysis.vowel_count.to_string(),
                analysis.consonant_count.to_string(),
                analysis.avg_word_length.to_string(),
                analysis.vowel_consonant_ratio().to_string(),
                common_words,
            ])
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}
