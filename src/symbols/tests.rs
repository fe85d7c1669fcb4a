//! Unit tests for the scope arena.
//!
//! Covers insertion, duplicate rejection, shadowing, chain lookup,
//! return-type resolution and the dump helpers.

use super::symbols::{InsertError, SymbolTable};
use crate::types::types::{NanoType, TypeTable, INTEGER, NO_TYPE, STRING};
use crate::Position;

fn pos(line: u32, column: u32) -> Position {
    Position::new(line, column)
}

#[test]
fn test_insert_and_lookup_local() {
    let mut table = SymbolTable::new();
    let root = table.enter_scope(None);
    table.insert(root, "x", INTEGER, pos(1, 1)).unwrap();

    let symbol = table.lookup_local(root, "x").unwrap();
    assert_eq!(symbol.name, "x");
    assert_eq!(symbol.ty, INTEGER);
    assert_eq!(symbol.position, pos(1, 1));
    assert!(table.lookup_local(root, "y").is_none());
}

#[test]
fn test_duplicate_in_same_scope_is_rejected() {
    let mut table = SymbolTable::new();
    let root = table.enter_scope(None);
    table.insert(root, "x", INTEGER, pos(1, 1)).unwrap();

    let result = table.insert(root, "x", STRING, pos(3, 5));
    assert_eq!(
        result,
        Err(InsertError::Duplicate {
            name: "x".to_string(),
            previous: pos(1, 1),
        })
    );
    // The rejected insert leaves the scope untouched.
    assert_eq!(table.scope(root).symbols().len(), 1);
    assert_eq!(table.lookup_local(root, "x").unwrap().ty, INTEGER);
}

#[test]
fn test_shadowing_in_inner_scope() {
    let mut table = SymbolTable::new();
    let root = table.enter_scope(None);
    table.insert(root, "x", INTEGER, pos(1, 1)).unwrap();

    let inner = table.enter_scope(Some(root));
    table.insert(inner, "x", STRING, pos(4, 3)).unwrap();

    // The inner binding wins from the inner scope, the outer one is
    // unaffected.
    assert_eq!(table.lookup_chain(inner, "x").unwrap().ty, STRING);
    assert_eq!(table.lookup_chain(root, "x").unwrap().ty, INTEGER);
}

#[test]
fn test_lookup_chain_walks_outwards() {
    let mut table = SymbolTable::new();
    let root = table.enter_scope(None);
    table.insert(root, "global", STRING, pos(1, 1)).unwrap();
    let middle = table.enter_scope(Some(root));
    let inner = table.enter_scope(Some(middle));
    table.insert(inner, "local", INTEGER, pos(5, 1)).unwrap();

    assert_eq!(table.lookup_chain(inner, "global").unwrap().ty, STRING);
    assert_eq!(table.lookup_chain(inner, "local").unwrap().ty, INTEGER);
    assert!(table.lookup_chain(middle, "local").is_none());
    assert!(table.lookup_chain(inner, "missing").is_none());
}

#[test]
fn test_leave_scope_keeps_scope_readable() {
    let mut table = SymbolTable::new();
    let root = table.enter_scope(None);
    let inner = table.enter_scope(Some(root));
    table.insert(inner, "x", INTEGER, pos(2, 1)).unwrap();

    assert_eq!(table.leave_scope(inner), Some(root));
    assert_eq!(table.leave_scope(root), None);
    // Left scopes stay readable for later passes.
    assert_eq!(table.lookup_local(inner, "x").unwrap().ty, INTEGER);
}

#[test]
fn test_return_type_of_resolves_through_the_table() {
    let mut types = TypeTable::new();
    let signature = types
        .intern(NanoType::function(INTEGER, vec![STRING]))
        .unwrap();

    let mut table = SymbolTable::new();
    let root = table.enter_scope(None);
    table.insert(root, "f", signature, pos(1, 1)).unwrap();
    table.insert(root, "s", STRING, pos(2, 1)).unwrap();

    // Functions yield their return type, variables their own type.
    assert_eq!(table.return_type_of(root, "f", &types), INTEGER);
    assert_eq!(table.return_type_of(root, "s", &types), STRING);
    assert_eq!(table.return_type_of(root, "missing", &types), NO_TYPE);
}

#[test]
fn test_scope_limit_rejects_insert() {
    let mut table = SymbolTable::with_limit(Some(1));
    let root = table.enter_scope(None);
    table.insert(root, "x", INTEGER, pos(1, 1)).unwrap();

    let result = table.insert(root, "y", INTEGER, pos(2, 1));
    assert_eq!(result, Err(InsertError::ScopeFull { limit: 1 }));
    assert_eq!(table.scope(root).symbols().len(), 1);

    // The limit is per scope, not global.
    let inner = table.enter_scope(Some(root));
    assert!(table.insert(inner, "y", INTEGER, pos(3, 1)).is_ok());
}

#[test]
fn test_dump_chain_lists_innermost_first() {
    let types = TypeTable::new();
    let mut table = SymbolTable::new();
    let root = table.enter_scope(None);
    table.insert(root, "outer", STRING, pos(1, 1)).unwrap();
    let inner = table.enter_scope(Some(root));
    table.insert(inner, "inner", INTEGER, pos(3, 1)).unwrap();

    let dump = table.dump_chain(inner, &types);
    let inner_at = dump.find("inner").unwrap();
    let outer_at = dump.find("outer").unwrap();
    assert!(inner_at < outer_at);
    assert_eq!(dump.matches("-----------------------").count(), 2);
    assert!(dump.contains(&format!("{:<20}: Integer", "inner")));
}
