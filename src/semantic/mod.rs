//! Semantic checking passes.
//!
//! This module runs the three analysis passes over a parsed tree:
//!
//! - binding: attaches scopes to nodes and inserts symbols as
//!   definitions are encountered
//! - type checking: infers every expression type bottom-up and validates
//!   operators and calls
//! - return validation: checks return statements against the enclosing
//!   function's declared type, warns when a body cannot guarantee a
//!   return, and validates the `main` entry point
//!
//! The checker owns the type table, the scope arena and the accumulated
//! diagnostics for one session; diagnostics never halt a traversal.

pub mod semantic;
