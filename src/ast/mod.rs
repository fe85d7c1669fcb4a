//! Abstract syntax tree for nanoLang.
//!
//! Submodules:
//! - ast: node and node-kind definitions, child iteration, annotations
//! - print: DOT, s-expression and infix renderings for debugging
//!
//! The tree is built by an external parser; its shape is fixed at
//! construction. The semantic passes only fill in the two annotation
//! fields (active scope, inferred type) on each node.

pub mod ast;
pub mod print;

#[cfg(test)]
mod tests;
