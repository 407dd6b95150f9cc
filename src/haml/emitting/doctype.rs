//! Doctype literals
//!
//! Three fixed XHTML 1.0 doctype strings, selected by a case-insensitive
//! keyword after `!!!`. Each literal spans two physical lines; they are
//! reproduced verbatim, second line unindented.

pub const STRICT: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\"\n\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">";

pub const TRANSITIONAL: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\"\n\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">";

pub const FRAMESET: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\"\n\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">";

/// Look up the doctype literal for an already-lowercased keyword.
pub fn lookup(keyword: &str) -> Option<&'static str> {
    match keyword {
        "strict" => Some(STRICT),
        "transitional" => Some(TRANSITIONAL),
        "frameset" => Some(FRAMESET),
        _ => None,
    }
}
