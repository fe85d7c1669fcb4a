//! Unit tests for the syntax tree and its debug renderings.

use super::ast::{Node, NodeKind};
use super::print;
use crate::types::types::NO_TYPE;
use crate::Position;

fn node(kind: NodeKind, line: u32, column: u32) -> Node {
    Node::new(kind, Position::new(line, column))
}

fn ident(name: &str, line: u32, column: u32) -> Node {
    node(NodeKind::Ident(name.to_string()), line, column)
}

fn intlit(value: i64, line: u32, column: u32) -> Node {
    node(NodeKind::IntLit(value), line, column)
}

/// `x = (1 + 2);` as a tree.
fn assign_fixture() -> Node {
    let sum = node(
        NodeKind::Add {
            left: Box::new(intlit(1, 1, 5)),
            right: Box::new(intlit(2, 1, 9)),
        },
        1,
        7,
    );
    node(
        NodeKind::Assign {
            target: Box::new(ident("x", 1, 1)),
            value: Box::new(sum),
        },
        1,
        3,
    )
}

#[test]
fn test_new_node_starts_unannotated() {
    let leaf = intlit(7, 2, 4);
    assert_eq!(leaf.position, Position::new(2, 4));
    assert!(leaf.scope.is_none());
    assert_eq!(leaf.ty, NO_TYPE);
}

#[test]
fn test_children_follow_slot_order() {
    let fundef = node(
        NodeKind::FunDef {
            return_type: Box::new(node(NodeKind::TypeInteger, 1, 1)),
            name: Box::new(ident("f", 1, 9)),
            params: vec![node(
                NodeKind::Param {
                    param_type: Box::new(node(NodeKind::TypeString, 1, 11)),
                    name: Box::new(ident("s", 1, 18)),
                },
                1,
                11,
            )],
            body: Box::new(node(
                NodeKind::Body {
                    defs: vec![],
                    stmts: vec![],
                },
                1,
                21,
            )),
        },
        1,
        1,
    );
    let kinds: Vec<&str> = fundef.children().iter().map(|c| c.kind_name()).collect();
    assert_eq!(kinds, vec!["Integer", "ident", "param", "body"]);
}

#[test]
fn test_children_mut_matches_children() {
    let mut tree = assign_fixture();
    let immutable: Vec<String> = tree
        .children()
        .iter()
        .map(|c| c.kind_name().to_string())
        .collect();
    let mutable: Vec<String> = tree
        .children_mut()
        .iter()
        .map(|c| c.kind_name().to_string())
        .collect();
    assert_eq!(immutable, mutable);
}

#[test]
fn test_if_without_else_has_two_children() {
    let branch = node(
        NodeKind::If {
            condition: Box::new(intlit(1, 1, 5)),
            then_branch: Box::new(node(
                NodeKind::Body {
                    defs: vec![],
                    stmts: vec![],
                },
                1,
                8,
            )),
            else_branch: None,
        },
        1,
        1,
    );
    assert_eq!(branch.children().len(), 2);
}

#[test]
fn test_literal_text() {
    assert_eq!(ident("x", 1, 1).literal_text(), Some("x".to_string()));
    assert_eq!(intlit(42, 1, 1).literal_text(), Some("42".to_string()));
    assert_eq!(
        node(NodeKind::StringLit("hi".to_string()), 1, 1).literal_text(),
        Some("hi".to_string())
    );
    assert_eq!(node(NodeKind::TypeInteger, 1, 1).literal_text(), None);
}

#[test]
fn test_dot_rendering() {
    let tree = assign_fixture();
    assert_eq!(
        print::dot(&tree),
        "digraph ast {\n\
         \x20  ordering=out\n\
         \x20  ast0 [label=\"assign\"]\n\
         \x20  ast0 -> ast1\n\
         \x20  ast1 [label=\"ident\\nx\"]\n\
         \x20  ast0 -> ast2\n\
         \x20  ast2 [label=\"add\"]\n\
         \x20  ast2 -> ast3\n\
         \x20  ast3 [label=\"intlit\\n1\"]\n\
         \x20  ast2 -> ast4\n\
         \x20  ast4 [label=\"intlit\\n2\"]\n\
         }\n"
    );
}

#[test]
fn test_dot_escapes_string_literals() {
    let tree = node(NodeKind::StringLit("say \"hi\"".to_string()), 1, 1);
    assert!(print::dot(&tree).contains("[label=\"say \\\"hi\\\"\"]"));
}

#[test]
fn test_sexpr_rendering() {
    let tree = assign_fixture();
    assert_eq!(
        print::sexpr(&tree),
        "(assign ident<x> (add intlit<1> intlit<2> ) ) "
    );
}

#[test]
fn test_infix_rendering() {
    let tree = assign_fixture();
    assert_eq!(print::infix(&tree), "(x = (1+2));");
}

#[test]
fn test_infix_rendering_of_definitions() {
    let vardef = node(
        NodeKind::VarDef {
            var_type: Box::new(node(NodeKind::TypeInteger, 1, 1)),
            names: vec![ident("a", 1, 9), ident("b", 1, 12)],
        },
        1,
        1,
    );
    assert_eq!(print::infix(&vardef), "Integer a, b;");

    let call = node(
        NodeKind::Call {
            callee: Box::new(ident("f", 2, 1)),
            args: vec![intlit(1, 2, 3), ident("a", 2, 6)],
        },
        2,
        1,
    );
    assert_eq!(print::infix(&call), "f(1, a)");
}
