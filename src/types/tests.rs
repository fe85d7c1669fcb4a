//! Unit tests for the type table.
//!
//! This module covers structural interning, the reserved built-in
//! handles, return-type retrieval, rendering and the optional capacity
//! limit.

use super::types::{NanoType, TableFull, TypeTable, INTEGER, NO_TYPE, STRING};

#[test]
fn test_builtin_handles_are_reserved() {
    let table = TypeTable::new();
    assert_eq!(table.len(), 3);
    assert_eq!(NO_TYPE.0, 0);
    assert_eq!(STRING.0, 1);
    assert_eq!(INTEGER.0, 2);
}

#[test]
fn test_intern_returns_same_handle_for_equal_types() {
    let mut table = TypeTable::new();
    let first = table
        .intern(NanoType::function(INTEGER, vec![STRING, STRING]))
        .unwrap();
    // A distinct instance with the same structure.
    let second = table
        .intern(NanoType::function(INTEGER, vec![STRING, STRING]))
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(table.len(), 4);
}

#[test]
fn test_intern_distinguishes_different_types() {
    let mut table = TypeTable::new();
    let two_strings = table
        .intern(NanoType::function(INTEGER, vec![STRING, STRING]))
        .unwrap();
    let one_string = table
        .intern(NanoType::function(INTEGER, vec![STRING]))
        .unwrap();
    let other_return = table
        .intern(NanoType::function(STRING, vec![STRING]))
        .unwrap();
    assert_ne!(two_strings, one_string);
    assert_ne!(one_string, other_return);
}

#[test]
fn test_return_type_is_uniform_for_atomics_and_functions() {
    let mut table = TypeTable::new();
    assert_eq!(table.return_type(INTEGER), INTEGER);
    assert_eq!(table.return_type(STRING), STRING);

    let function = table
        .intern(NanoType::function(STRING, vec![INTEGER]))
        .unwrap();
    assert_eq!(table.return_type(function), STRING);
}

#[test]
fn test_render_atomic_and_function() {
    let mut table = TypeTable::new();
    assert_eq!(table.render(NO_TYPE), "NoType");
    assert_eq!(table.render(INTEGER), "Integer");

    let function = table
        .intern(NanoType::function(INTEGER, vec![STRING, INTEGER]))
        .unwrap();
    assert_eq!(table.render(function), "(String, Integer) -> Integer");

    let no_params = table.intern(NanoType::function(INTEGER, vec![])).unwrap();
    assert_eq!(table.render(no_params), "() -> Integer");
}

#[test]
fn test_dump_lists_entries_in_insertion_order() {
    let mut table = TypeTable::new();
    table
        .intern(NanoType::function(INTEGER, vec![STRING]))
        .unwrap();
    assert_eq!(
        table.dump(),
        "0: NoType\n1: String\n2: Integer\n3: (String) -> Integer\n"
    );
}

#[test]
fn test_limit_rejects_without_losing_entries() {
    let mut table = TypeTable::with_limit(Some(3));
    let result = table.intern(NanoType::function(INTEGER, vec![]));
    assert_eq!(result, Err(TableFull { limit: 3 }));
    assert_eq!(table.len(), 3);

    // Structurally known types are still found below the limit.
    let existing = NanoType {
        kind: super::types::TypeKind::Atomic,
        args: vec![INTEGER],
    };
    assert_eq!(table.intern(existing), Ok(INTEGER));
}
