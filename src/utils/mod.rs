//! Utility modules for file analyzer
//!
//! This module contains utility functions for file handling, logging setup and
//! output formatting.

pub mod file_utils;
pub mod logging;
pub mod output_formatter;
