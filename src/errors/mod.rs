//! Diagnostic types for the semantic checker.
//!
//! This module defines the diagnostics emitted during semantic analysis.
//! It includes:
//!
//! - Diagnostic structures with source position information
//! - Specific diagnostic variants for the checking passes
//! - Severity levels (error vs. warning)
//! - Diagnostic formatting as `line:col: <severity>: <message>`

pub mod errors;
