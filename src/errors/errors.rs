use std::fmt::{self, Display};

use thiserror::Error;

use crate::Position;

/// Diagnostic severity. Errors make the emitting pass fail; warnings are
/// reported but do not affect the pass result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic produced by a checking pass.
///
/// The position is optional because a few program-level findings (a missing
/// `main` function) have no source location to point at.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    position: Option<Position>,
    kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, position: Position) -> Self {
        Diagnostic {
            severity: Severity::Error,
            position: Some(position),
            kind,
        }
    }

    pub fn warning(kind: DiagnosticKind, position: Position) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            position: Some(position),
            kind,
        }
    }

    /// An error with no source position.
    pub fn unpositioned(kind: DiagnosticKind) -> Self {
        Diagnostic {
            severity: Severity::Error,
            position: None,
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    /// Short name of the diagnostic kind, independent of its payload.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            DiagnosticKind::DuplicateSymbol { .. } => "DuplicateSymbol",
            DiagnosticKind::UndefinedIdentifier { .. } => "UndefinedIdentifier",
            DiagnosticKind::TypeMismatch { .. } => "TypeMismatch",
            DiagnosticKind::ArityMismatch { .. } => "ArityMismatch",
            DiagnosticKind::MissingReturn { .. } => "MissingReturn",
            DiagnosticKind::InvalidEntryPoint { .. } => "InvalidEntryPoint",
            DiagnosticKind::TableCapacityExceeded { .. } => "TableCapacityExceeded",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{}: {}: {}", position, self.severity, self.kind),
            None => write!(f, "{}: {}", self.severity, self.kind),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("symbol '{name}' doubly defined (previous definition at {previous})")]
    DuplicateSymbol { name: String, previous: Position },
    #[error("undefined identifier {name}")]
    UndefinedIdentifier { name: String },
    #[error("wrong type of expression - expected '{expected}', found '{found}'")]
    TypeMismatch { expected: String, found: String },
    #[error("wrong number of arguments to call of function '{function}' - expected {expected}, found {found}")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },
    #[error("cannot guarantee proper return value for function {function}()")]
    MissingReturn { function: String },
    #[error("{violation}")]
    InvalidEntryPoint { violation: EntryPointViolation },
    #[error("{table} capacity exceeded (limit {limit})")]
    TableCapacityExceeded { table: &'static str, limit: usize },
}

/// The ways a program can fail entry-point validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPointViolation {
    Missing,
    NotAFunction,
    ReturnNotInteger,
    ParameterNotString,
}

impl Display for EntryPointViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryPointViolation::Missing => write!(f, "no main() function"),
            EntryPointViolation::NotAFunction => write!(f, "main should be a function"),
            EntryPointViolation::ReturnNotInteger => write!(f, "main() should return Integer"),
            EntryPointViolation::ParameterNotString => {
                write!(f, "all arguments to main() should be String")
            }
        }
    }
}
