//! File handling utilities
//!
//! Directory listing and whole-file reading used by the analyzer and the
//! interactive menu.

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use walkdir::WalkDir;

use crate::core::analyzer::AnalysisError;

/// List the regular files directly inside a directory that carry an extension.
///
/// # Arguments
///
/// * `dir` - Directory to list (not recursive)
/// * `extension` - Extension to match exactly, without the leading dot
///
/// # Returns
///
/// File names (not paths) in directory listing order, or an error when the
/// directory itself cannot be read
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<String>, AnalysisError> {
    // A missing path is left to the walk below, which reports it
    if let Ok(metadata) = fs::metadata(dir) {
        if !metadata.is_dir() {
            return Err(AnalysisError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
    }

    let mut file_names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(AnalysisError::Directory {
                    path: dir.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.path().extension() == Some(OsStr::new(extension)) {
            file_names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(file_names)
}

/// Read the content of a file, replacing invalid UTF-8 sequences
pub fn read_file_content(file_path: &Path) -> Result<String> {
    let bytes = fs::read(file_path)
        .with_context(|| format!("File could not be opened: {}", file_path.display()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the contents of a file to `out` under a short heading
pub fn display_file<W: Write>(file_path: &Path, out: &mut W) -> Result<()> {
    let content = read_file_content(file_path)?;

    writeln!(out, "Contents of the file are:")?;
    writeln!(out)?;
    out.write_all(content.as_bytes())?;
    out.flush()?;

    Ok(())
}
