//! Core module for text file analysis
//!
//! This module contains the per-byte scanner, the stop-word frequency ranking,
//! the file analyzer that ties them together, and the unrelated prefix
//! expression evaluator.

pub mod analyzer;
pub mod prefix;
pub mod scanner;
pub mod stop_words;
