//! Structural type representation and interning.
//!
//! This module contains the type table that catalogs every distinct type
//! seen during a checking session. It handles:
//!
//! - Atomic types (NoType, String, Integer) and first-order function types
//! - Structural interning: equal types always share one handle
//! - Return-type retrieval that is uniform for variables and functions
//! - Human-readable rendering of types and the whole table

pub mod types;

#[cfg(test)]
mod tests;
