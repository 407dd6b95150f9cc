//! Output emission
//!
//! Everything that appends to the compiled document lives here.
//!
//! Structure:
//! - The writer (./emitting/writer.rs) owns the output buffer, the current
//!   depth, and the stack of pending closers. Depth and stack length move
//!   together: pushing a closer deepens by one, popping shallows by one.
//! - Tag construction (./emitting/tags.rs) resolves shorthand runs and
//!   attribute blocks into renderable tags.
//! - PHP directive wrappers (./emitting/php.rs) and the fixed doctype
//!   literals (./emitting/doctype.rs) produce the remaining output tokens.

pub mod attributes;
pub mod doctype;
pub mod php;
pub mod tags;
pub mod writer;

pub use attributes::AttributeMap;
pub use tags::{build_tag, Tag};
pub use writer::Writer;
