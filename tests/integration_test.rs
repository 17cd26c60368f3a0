//! Integration tests for the file analyzer
//!
//! These tests run the analyzer against temporary directories and check the
//! per-file statistics and the generated report.

use std::fs;
use std::path::Path;

use regex::Regex;

use file_analyzer::app::run_analyzer;
use file_analyzer::config::AnalyzerConfig;
use file_analyzer::core::analyzer::{FileAnalysis, FileAnalyzer};
use file_analyzer::utils::output_formatter;
use file_analyzer::{analyze_directory, evaluate_prefix};

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write test file");
}

fn find<'a>(results: &'a [FileAnalysis], name: &str) -> &'a FileAnalysis {
    results
        .iter()
        .find(|a| a.file_name == name)
        .unwrap_or_else(|| panic!("No result for {}", name))
}

#[test]
fn test_empty_directory_reports_zero_files() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.out");

    let results = run_analyzer(temp_dir.path(), &report_path, &AnalyzerConfig::default());

    assert!(results.is_empty());
    let report = fs::read_to_string(&report_path).expect("Report was not written");
    assert!(report.starts_with("Total Number of Files: 0"));
}

#[test]
fn test_unreadable_directory_yields_no_results() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does-not-exist");
    let report_path = temp_dir.path().join("report.out");

    let results = run_analyzer(&missing, &report_path, &AnalyzerConfig::default());

    assert!(results.is_empty());
    let report = fs::read_to_string(&report_path).expect("Report was not written");
    assert!(report.contains("Total Number of Files: 0"));
}

#[test]
fn test_results_survive_unwritable_report() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "fox.txt", "the quick brown fox");
    let report_dir = temp_dir.path().join("reports");
    fs::create_dir(&report_dir).expect("Failed to create report dir");

    let results = run_analyzer(temp_dir.path(), &report_dir, &AnalyzerConfig::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word_count, 4);
    assert!(report_dir.is_dir());
}

#[test]
fn test_file_path_instead_of_directory() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "plain.txt", "just a file");

    let results = analyze_directory(temp_dir.path().join("plain.txt"));

    assert!(results.is_empty());
}

#[test]
fn test_only_text_files_are_analyzed() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "fox.txt", "the quick brown fox");
    write_file(temp_dir.path(), "notes.md", "ignored entirely");
    fs::create_dir(temp_dir.path().join("sub")).unwrap();
    write_file(&temp_dir.path().join("sub"), "deep.txt", "not scanned");

    let results = analyze_directory(temp_dir.path());

    assert_eq!(results.len(), 1);
    let fox = &results[0];
    assert_eq!(fox.file_name, "fox.txt");
    assert_eq!(fox.line_count, 1);
    assert_eq!(fox.word_count, 4);

    let mut words: Vec<_> = fox.common_words.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    words.sort();
    assert_eq!(words, vec![("brown", 1), ("fox", 1), ("quick", 1)]);
}

#[test]
fn test_statistics_hold_together() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(
        temp_dir.path(),
        "mixed.txt",
        "Call 555-0100, ask for Ada!\nShe said: rust rust RUST.\n\n",
    );

    let results = analyze_directory(temp_dir.path());
    let mixed = find(&results, "mixed.txt");

    assert_eq!(mixed.line_count, 3);
    assert!(mixed.vowel_count + mixed.consonant_count <= mixed.char_count);
    assert_eq!(mixed.avg_word_length, mixed.char_count / mixed.word_count);
    assert_eq!(mixed.common_words[0], ("rust".to_string(), 2));
    assert!(mixed.common_words.iter().any(|(w, _)| w == "RUST"));
    assert!(!mixed.common_words.iter().any(|(w, _)| w == "for"));
}

#[test]
fn test_whitespace_only_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "blank.txt", "  \t \n   \n");

    let results = analyze_directory(temp_dir.path());
    let blank = find(&results, "blank.txt");

    assert_eq!(blank.line_count, 2);
    assert!(blank.word_count >= 1);
    assert_eq!(blank.char_count, 0);
    assert_eq!(blank.avg_word_length, 0);
    assert!(blank.common_words.is_empty());
}

#[test]
fn test_no_vowels_ratio_is_zero_in_report() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "rhythm.txt", "rhythm myths 42");
    let report_path = temp_dir.path().join("report.out");

    run_analyzer(temp_dir.path(), &report_path, &AnalyzerConfig::default());

    let report = fs::read_to_string(&report_path).expect("Report was not written");
    assert!(report.contains(" Vowel to Consonant Ratio: 1 : 0\n"));
}

#[test]
fn test_report_layout() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "a.txt", "apple apple banana cherry date elder fig grape\n");
    write_file(temp_dir.path(), "b.txt", "one two three\nfour five six\n");
    let report_path = temp_dir.path().join("report.out");

    let results = run_analyzer(temp_dir.path(), &report_path, &AnalyzerConfig::default());
    assert_eq!(results.len(), 2);

    let report = fs::read_to_string(&report_path).expect("Report was not written");
    assert!(report.starts_with("Total Number of Files: 2\n{\n"));
    assert!(report.ends_with("},\n}\n"));

    let block = Regex::new(
        r#"\{ File Name: [ab]\.txt,\n Line Count: \d+,\n Word Count: \d+,\n Most Common Words: (\{"\w+",\d+\},?)*,\n Average Word Length: \d+,\n Vowel to Consonant Ratio: 1 : \d+\n Consonant Count: \d+,\n Character Count: \d+,\n\},\n"#,
    )
    .unwrap();
    assert_eq!(block.find_iter(&report).count(), 2);

    // Only the top five words are listed
    let a_block = report
        .split("{ File Name: ")
        .find(|block| block.starts_with("a.txt"))
        .unwrap();
    assert!(a_block.contains("{\"apple\",2}"));
    assert_eq!(a_block.matches("\",1}").count(), 4);
}

#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    for i in 0..8 {
        write_file(
            temp_dir.path(),
            &format!("file{}.txt", i),
            &"lorem ipsum dolor sit amet ".repeat(i + 1),
        );
    }

    let analyzer = FileAnalyzer::default();
    let sequential = analyzer.analyze_directory(temp_dir.path());
    let parallel = analyzer
        .analyze_directory_parallel(temp_dir.path(), 4, None)
        .expect("Failed to build thread pool");

    assert_eq!(sequential, parallel);
}

#[test]
fn test_json_export_round_trip_of_counts() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "fox.txt", "the quick brown fox");
    let json_path = temp_dir.path().join("out.json");

    let results = analyze_directory(temp_dir.path());
    output_formatter::export_results_json(&results, &json_path, 5).expect("Failed to export JSON");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value[0]["word_count"], 4);
    assert_eq!(value[0]["common_words"].as_array().unwrap().len(), 3);
}

#[test]
fn test_prefix_evaluator_is_exported() {
    assert_eq!(evaluate_prefix("- * 2 3 1"), 5.0);
}
