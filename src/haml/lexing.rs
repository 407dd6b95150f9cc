//! Line scanner and classifier
//!
//! This module turns raw template text into the ordered line stream the
//! compiler consumes.
//!
//! The pipeline consists of:
//! 1. Line splitting and indentation measurement (./lexing/line_scanner.rs)
//! 2. Per-line kind classification against the shorthand sub-grammars
//!    (./lexing/line_classification.rs)
//!
//! Indentation Handling
//!
//!     Depth is the count of leading tab characters only; spaces never
//!     contribute. A line may open at most one level deeper than its
//!     parent, but may dedent by any number of levels at once. The depth
//!     *validity* check lives in the compiler, not here, because it needs
//!     the nesting-stack state: the scanner only computes per-line facts.

pub mod line_classification;
pub mod line_scanner;

pub use line_classification::{classify, CodeLine, DoctypeLine, LineKind, TagLine, TagMarker};
pub use line_scanner::{indent_depth, scan_lines, Line};

use serde::Serialize;

/// One classified line of a template, suitable for serialization by the
/// formats module and the CLI `classify` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannedLine {
    /// 0-based line index
    pub line: usize,
    /// Count of leading tabs
    pub indent: usize,
    /// Classified kind with its parsed payload
    pub kind: LineKind,
}

/// Scan and classify every line of a template without compiling it.
pub fn scan(source: &str) -> Vec<ScannedLine> {
    scan_lines(source)
        .into_iter()
        .map(|line| ScannedLine {
            line: line.number,
            indent: line.indent,
            kind: classify(&line.content),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_classifies_each_line() {
        let scanned = scan("%div\n\t- if $ok\n\t\ttext");

        assert_eq!(scanned.len(), 3);
        assert_eq!(scanned[0].line, 0);
        assert_eq!(scanned[0].indent, 0);
        assert!(matches!(scanned[0].kind, LineKind::Tag(_)));
        assert_eq!(scanned[1].indent, 1);
        assert!(matches!(scanned[1].kind, LineKind::Code(_)));
        assert_eq!(scanned[2].indent, 2);
        assert_eq!(scanned[2].kind, LineKind::Literal("text".to_string()));
    }
}
