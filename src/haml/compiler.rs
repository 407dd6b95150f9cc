//! Compiler
//!
//! The single compilation pass: scan lines, track nesting with an explicit
//! closer stack, transform each line by kind, flush the stack, trim.
//!
//! All state lives in one [`Writer`] created per call; `compile` is a pure
//! function of its input and may run concurrently without coordination.

use std::fmt;

use crate::haml::emitting::tags::build_tag;
use crate::haml::emitting::writer::Writer;
use crate::haml::emitting::{doctype, php};
use crate::haml::lexing::line_classification::{classify, CodeLine, LineKind, TagLine};
use crate::haml::lexing::line_scanner::{scan_lines, Line};

/// Errors that can occur during compilation
///
/// Both kinds are fatal: there is no partial output or recovery. The line
/// index is 0-based.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A line is indented more than one level deeper than its parent
    Indentation { line: usize },
    /// The keyword after `!!!` names no known doctype
    Doctype { line: usize, keyword: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Indentation { line } => {
                write!(f, "Invalid indentation level at line {}", line)
            }
            CompileError::Doctype { line, keyword } => {
                write!(f, "Invalid doctype {} at line {}", keyword, line)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Compile a haml template into HTML interleaved with PHP directives.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let lines = scan_lines(source);
    let mut writer = Writer::new();

    for (index, line) in lines.iter().enumerate() {
        // Depth may only grow one level per container-opening line, and
        // every opener already deepened the writer when it was processed.
        if line.indent > writer.depth() {
            return Err(CompileError::Indentation { line: index });
        }

        let kind = classify(&line.content);

        // Else-continuations bypass the pop loop entirely: the `else:`
        // marker renders at the depth of its `if` while the end closer
        // pushed by the `if` stays on the stack.
        if matches!(kind, LineKind::ElseContinuation) {
            writer.write_shallower(&php::code_directive("else:"));
            continue;
        }

        while line.indent < writer.depth() {
            writer.pop_closer();
        }

        match kind {
            LineKind::ElseContinuation => {}
            LineKind::Tag(tag_line) => {
                transform_tag(&mut writer, &tag_line, next_indent(&lines, index));
            }
            LineKind::Code(code_line) => transform_code(&mut writer, &code_line),
            LineKind::Doctype(doctype_line) => match doctype::lookup(&doctype_line.keyword) {
                Some(literal) => writer.write(literal),
                None => {
                    return Err(CompileError::Doctype {
                        line: index,
                        keyword: doctype_line.keyword,
                    })
                }
            },
            LineKind::Literal(text) => writer.write(&text),
        }
    }

    Ok(writer.finish())
}

/// Indentation depth of the next physical line; a missing line counts as
/// depth 0 so the last tag of a document never becomes a container.
fn next_indent(lines: &[Line], index: usize) -> usize {
    lines.get(index + 1).map(|line| line.indent).unwrap_or(0)
}

fn transform_tag(writer: &mut Writer, line: &TagLine, next_indent: usize) {
    let tag = build_tag(line);
    let multiline = !tag.autoclose && next_indent > writer.depth();

    if multiline {
        writer.write(&tag.open());
        writer.push_closer(tag.closer());
    } else {
        writer.write(&tag.render_inline());
    }
}

fn transform_code(writer: &mut Writer, line: &CodeLine) {
    if let Some((statement, params)) = php::block_statement(&line.code) {
        writer.write(&php::block_open(statement, params));
        writer.push_closer(php::block_closer(statement));
    } else if line.code.starts_with("else") {
        // Reached by `=`-marked else lines and malformed else variants the
        // continuation rule rejected; they produce no output.
    } else if line.echo {
        writer.write(&php::echo_directive(&line.code));
    } else {
        writer.write(&php::code_directive(&line.code));
    }
}
