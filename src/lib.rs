#![allow(clippy::module_inception)]

//! Semantic-analysis core for nanoLang.
//!
//! The crate consumes a syntactically valid abstract syntax tree (built by
//! an external parser) and runs three checking passes over it:
//!
//! - binding: builds the scope chain and inserts symbols as definitions
//!   are encountered
//! - type checking: infers and checks the type of every expression
//!   bottom-up, validating calls and operators
//! - return/entry-point validation: verifies return statements against the
//!   enclosing function's declared type, warns about bodies that cannot
//!   guarantee a return, and validates the `main` entry point
//!
//! Diagnostics are accumulated, never thrown; each pass reports an overall
//! success flag so a caller can decide whether to proceed to code
//! generation.

use std::fmt::{self, Display};

use crate::errors::errors::Diagnostic;

pub mod ast;
pub mod errors;
pub mod semantic;
pub mod symbols;
pub mod types;

/// A line/column source position, as reported in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Renders accumulated diagnostics one per line, in the order they were
/// emitted.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&diagnostic.to_string());
        out.push('\n');
    }
    out
}
