//! Line Classification
//!
//! Core classification logic for determining line kinds from trimmed line
//! content. The compiler dispatches on the resulting [`LineKind`].
//!
//! Classification follows this specific order (important for correctness):
//! 1. Else-continuation lines (a lone `- else`)
//! 2. Tag shorthand lines (`%tag`, `#id`, `.class` runs)
//! 3. Code lines (`=` echo, `-` execute)
//! 4. Doctype lines (`!!!` with an optional keyword)
//! 5. Default to literal
//!
//! The classifier performs no validation: a line that matches no grammar
//! is a literal, and a tag line with trailing junk keeps whatever the
//! pattern rules could extract. The only two hard errors of the compiler
//! (indentation jumps, unknown doctype keywords) are raised downstream.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A lone `- else`, which continues an open `if` block instead of closing it.
static ELSE_CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s*else\s*$").unwrap());

/// Tag shorthand: a run of `%name`/`#id`/`.class` tokens, an optional `/`
/// or `=` marker, an optional whitespace-preceded `{ ... }` attribute
/// block, and optional whitespace-preceded trailing content.
static TAG_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([%#.][a-z#.0-9]+)(/|=)?(?:\s+\{(.*?)\})?(?:\s+(.*))?").unwrap());

/// Code line: `=` renders the expression result, `-` executes for effect.
static CODE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([=-])(.*)").unwrap());

/// Doctype line: `!!!` followed by an optional keyword.
static DOCTYPE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!!!\s*(.*)").unwrap());

/// The classified kind of one template line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LineKind {
    /// A lone `- else` continuing the enclosing `if` block
    ElseContinuation,
    /// Tag shorthand with its raw sub-grammar captures
    Tag(TagLine),
    /// An echo (`=`) or execute (`-`) code directive
    Code(CodeLine),
    /// A `!!!` doctype selector
    Doctype(DoctypeLine),
    /// Anything else, emitted verbatim
    Literal(String),
}

/// Marker immediately following the shorthand run of a tag line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TagMarker {
    /// `/` forces a self-closing tag
    SelfClose,
    /// `=` treats the trailing content as an echoed expression
    Echo,
}

/// Raw captures of a tag shorthand line, before attribute resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagLine {
    /// The `%name`/`#id`/`.class` run, unsplit
    pub shorthand: String,
    /// Optional `/` or `=` marker
    pub marker: Option<TagMarker>,
    /// Body of the `{ ... }` attribute block, if present
    pub attributes: Option<String>,
    /// Trailing inline content (empty when absent)
    pub content: String,
}

/// A code line with its marker already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeLine {
    /// True for `=` (render the result), false for `-` (run for effect)
    pub echo: bool,
    /// The code text, trimmed
    pub code: String,
}

/// A doctype line with its keyword lowercased and defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctypeLine {
    /// Lowercased keyword; `transitional` when none was given
    pub keyword: String,
}

/// Classify one trimmed line.
pub fn classify(content: &str) -> LineKind {
    if ELSE_CONTINUATION.is_match(content) {
        return LineKind::ElseContinuation;
    }

    if let Some(caps) = TAG_LINE.captures(content) {
        let marker = match caps.get(2).map(|m| m.as_str()) {
            Some("/") => Some(TagMarker::SelfClose),
            Some("=") => Some(TagMarker::Echo),
            _ => None,
        };
        return LineKind::Tag(TagLine {
            shorthand: caps[1].to_string(),
            marker,
            attributes: caps.get(3).map(|m| m.as_str().to_string()),
            content: caps.get(4).map(|m| m.as_str()).unwrap_or("").to_string(),
        });
    }

    if let Some(caps) = CODE_LINE.captures(content) {
        return LineKind::Code(CodeLine {
            echo: &caps[1] == "=",
            code: caps[2].trim().to_string(),
        });
    }

    if let Some(caps) = DOCTYPE_LINE.captures(content) {
        let keyword = caps[1].trim();
        return LineKind::Doctype(DoctypeLine {
            keyword: if keyword.is_empty() {
                "transitional".to_string()
            } else {
                keyword.to_lowercase()
            },
        });
    }

    LineKind::Literal(content.to_string())
}
