//! # haml
//!
//! A compiler for the haml indentation markup shorthand.
//!
//! The compiler turns an indentation-significant template like
//!
//! ```text
//! %div#content
//!     %h1 Welcome
//!     - if $user
//!         = $user->name
//! ```
//!
//! into an HTML document interleaved with `<?php ... ?>` directives, ready
//! to be handed to the PHP execution engine at request time.
//!
//! ## Testing
//!
//! Unit tests live next to each module; the `tests/` directory holds
//! integration tests split by element kind (tags, code, doctype) plus
//! whole-document fixtures.

pub mod haml;

pub use haml::compiler::{compile, CompileError};
