//! Character classification scan
//!
//! Walks a text source line by line, sorting every byte into one of the
//! classification buckets and collecting the words found between whitespace
//! boundaries.

use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};

/// Decides what terminates the word buffer during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordBoundary {
    /// Only whitespace ends a word. A word with no whitespace at a line
    /// break continues onto the next line.
    #[default]
    Whitespace,
    /// Whitespace ends a word, and so does the end of every line.
    Line,
}

/// Bucket a single byte falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Vowel,
    Consonant,
    Digit,
    Whitespace,
    Other,
}

impl CharClass {
    /// Classify one byte using single-byte ASCII rules
    pub fn of(byte: u8) -> Self {
        match byte {
            b'a' | b'e' | b'i' | b'o' | b'u' | b'A' | b'E' | b'I' | b'O' | b'U' => CharClass::Vowel,
            b if b.is_ascii_alphabetic() => CharClass::Consonant,
            b if b.is_ascii_digit() => CharClass::Digit,
            // Same set as C `isspace`, vertical tab included
            b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => CharClass::Whitespace,
            _ => CharClass::Other,
        }
    }

    /// Whether bytes of this class are kept in the word buffer
    pub fn is_word_char(self) -> bool {
        matches!(self, CharClass::Vowel | CharClass::Consonant | CharClass::Digit)
    }
}

/// Counters accumulated over one scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanTotals {
    pub lines: usize,
    pub words: usize,
    /// Every non-whitespace byte
    pub chars: usize,
    pub vowels: usize,
    pub consonants: usize,
    pub digits: usize,
    /// Punctuation, symbols and non-ASCII bytes
    pub others: usize,
}

/// Everything a finished scan produced
#[derive(Debug, Default, Clone)]
pub struct ScanOutput {
    pub totals: ScanTotals,
    /// Words in the order they were emitted, empty words included
    pub words: Vec<String>,
}

/// Single-pass, per-byte scanner
#[derive(Debug)]
pub struct WordScanner {
    boundary: WordBoundary,
    totals: ScanTotals,
    buffer: String,
    words: Vec<String>,
}

impl WordScanner {
    pub fn new(boundary: WordBoundary) -> Self {
        Self {
            boundary,
            totals: ScanTotals::default(),
            buffer: String::new(),
            words: Vec::new(),
        }
    }

    /// Scan every line of `reader` and return the finished output.
    ///
    /// Lines are split on `\n`, which is not itself part of the line. A final
    /// line without a trailing newline still counts as a line.
    pub fn scan_reader<R: BufRead>(reader: R, boundary: WordBoundary) -> io::Result<ScanOutput> {
        let mut scanner = Self::new(boundary);
        for line in reader.split(b'\n') {
            scanner.scan_line(&line?);
        }
        Ok(scanner.finish())
    }

    /// Feed one line, without its newline, through the scanner
    pub fn scan_line(&mut self, line: &[u8]) {
        self.totals.lines += 1;

        for &byte in line {
            self.push_byte(byte);
        }

        if self.boundary == WordBoundary::Line && !self.buffer.is_empty() {
            self.emit_word();
        }
    }

    fn push_byte(&mut self, byte: u8) {
        let class = CharClass::of(byte);

        match class {
            CharClass::Vowel => self.totals.vowels += 1,
            CharClass::Consonant => self.totals.consonants += 1,
            CharClass::Digit => self.totals.digits += 1,
            CharClass::Other => self.totals.others += 1,
            CharClass::Whitespace => {
                // An empty buffer still counts as a word
                self.emit_word();
                return;
            }
        }

        self.totals.chars += 1;
        if class.is_word_char() {
            self.buffer.push(char::from(byte));
        }
    }

    fn emit_word(&mut self) {
        self.words.push(std::mem::take(&mut self.buffer));
        self.totals.words += 1;
    }

    /// End the scan. A word still in the buffer at end of input is emitted.
    pub fn finish(mut self) -> ScanOutput {
        if !self.buffer.is_empty() {
            self.emit_word();
        }

        ScanOutput {
            totals: self.totals,
            words: self.words,
        }
    }
}
