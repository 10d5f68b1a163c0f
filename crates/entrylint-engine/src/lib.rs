//! # entrylint-engine
//!
//! Checks that the entries of curated markdown link lists follow one
//! grammar: a link, a `" - "` separator, and a description that starts with
//! acceptable casing and ends with acceptable punctuation.
//!
//! ```rust
//! use entrylint_engine::Linter;
//!
//! let diagnostics = Linter::new().lint_str("- [Foo](https://example.com) - a tool.\n");
//! assert_eq!(diagnostics[0].message, "List item description must start with valid casing");
//! ```

pub mod diagnostic;
pub mod error;
pub mod linter;
pub mod rules;
pub mod scope;
pub mod text;
pub mod tree;

// Re-export key types for easier usage
pub use diagnostic::{Diagnostic, DiagnosticSink, LineIndex};
pub use error::LintError;
pub use linter::Linter;
pub use rules::{Violation, ViolationKind};
pub use text::Identifiers;
pub use tree::{Document, parse_markdown};
