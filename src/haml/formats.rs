//! Output formats for scanned-line serialization
//!
//! Serializes the classified line stream produced by `lexing::scan` so the
//! CLI (and tooling built on it) can inspect how the compiler reads a
//! template. Compiled HTML itself needs no format layer; it is already a
//! string.

use std::fmt;

use crate::haml::lexing::ScannedLine;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not known to this module
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Names of the supported formats, for CLI help and error messages.
pub static FORMATS: &[&str] = &["json", "yaml"];

/// Serialize scanned lines into the named format.
pub fn serialize_scanned_lines(lines: &[ScannedLine], format: &str) -> Result<String, FormatError> {
    match format {
        "json" => serde_json::to_string_pretty(lines)
            .map_err(|e| FormatError::SerializationError(e.to_string())),
        "yaml" => {
            serde_yaml::to_string(lines).map_err(|e| FormatError::SerializationError(e.to_string()))
        }
        other => Err(FormatError::FormatNotFound(other.to_string())),
    }
}
