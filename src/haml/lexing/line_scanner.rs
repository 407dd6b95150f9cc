//! Line Scanner
//!
//! Splits raw template text into physical lines and measures the
//! indentation depth of each one. Lines are separated by `\r\n`, `\n`, or
//! `\r`; depth is the count of leading tab characters only.

use once_cell::sync::Lazy;
use regex::Regex;

/// Line separators accepted by the scanner. `\r\n` must be tried before
/// the lone `\r` or every Windows line ending would split twice.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

/// One physical line of a template.
///
/// The content is stored trimmed; the raw text is never needed after the
/// indentation depth has been measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// 0-based line index
    pub number: usize,
    /// Count of leading tabs
    pub indent: usize,
    /// The line with leading/trailing whitespace removed
    pub content: String,
}

/// Count the leading tab characters of a raw line.
///
/// Spaces never contribute to depth; mixing tabs and spaces for
/// indentation is unsupported.
pub fn indent_depth(raw: &str) -> usize {
    raw.chars().take_while(|c| *c == '\t').count()
}

/// Split a template into its scanned lines.
///
/// An empty template still produces one (empty) line, matching the
/// splitting behavior the rest of the compiler is built around.
pub fn scan_lines(source: &str) -> Vec<Line> {
    LINE_BREAK
        .split(source)
        .enumerate()
        .map(|(number, raw)| Line {
            number,
            indent: indent_depth(raw),
            content: raw.trim().to_string(),
        })
        .collect()
}
