//! Lexically scoped symbol tables.
//!
//! This module implements the scope chain used for name resolution. It
//! handles:
//!
//! - Flat per-scope symbol storage in declaration order
//! - A scope arena, so AST nodes can reference scopes by index after the
//!   traversal that created them has moved on
//! - Chain lookup with standard lexical shadowing
//! - Duplicate-definition rejection local to one scope

pub mod symbols;

#[cfg(test)]
mod tests;
