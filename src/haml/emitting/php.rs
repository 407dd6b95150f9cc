//! PHP directive wrappers
//!
//! The `<?php ... ?>` delimiters are a compatibility contract with the
//! downstream execution engine and must be reproduced byte for byte,
//! including the single space on each side of the code text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Block-opening statements. The keyword doubles as the closer suffix:
/// `if` closes with `endif`, `foreach` with `endforeach`, and so on.
static BLOCK_STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<statement>if|foreach|while|for)\s*(?P<params>.*)").unwrap());

/// Wrap code in an execute directive: run for effect only.
pub fn code_directive(code: &str) -> String {
    format!("<?php {} ?>", code)
}

/// Wrap an expression in an echo directive: render its value.
pub fn echo_directive(expression: &str) -> String {
    code_directive(&format!("echo {}", expression))
}

/// Split a code line into a block-opening statement and its parameters,
/// when it starts with one of the block keywords.
pub fn block_statement(code: &str) -> Option<(&str, &str)> {
    BLOCK_STATEMENT.captures(code).map(|caps| {
        let statement = caps.name("statement").map(|m| m.as_str()).unwrap_or("");
        let params = caps.name("params").map(|m| m.as_str()).unwrap_or("");
        (statement, params)
    })
}

/// Opening wrapper for a block statement: `<?php if ($cond): ?>`.
pub fn block_open(statement: &str, params: &str) -> String {
    code_directive(&format!("{} ({}):", statement, params))
}

/// Matching closer for a block statement: `<?php endif ?>`.
pub fn block_closer(statement: &str) -> String {
    code_directive(&format!("end{}", statement))
}
