//! Debug renderings of the syntax tree.
//!
//! None of these are part of the semantic contract; they exist so a tree
//! (annotated or not) can be inspected as a GraphViz digraph, as an
//! s-expression dump, or as a parenthesised source-like reprint.

use std::fmt::Write;

use super::ast::{Node, NodeKind};

/// Renders the tree as a GraphViz digraph, one labelled node per AST node
/// and one edge per child, in slot order.
pub fn dot(ast: &Node) -> String {
    let mut out = String::from("digraph ast {\n   ordering=out\n");
    let mut counter = 0usize;
    dot_node(&mut out, ast, &mut counter);
    out.push_str("}\n");
    out
}

fn dot_node(out: &mut String, node: &Node, counter: &mut usize) {
    let id = *counter;
    *counter += 1;
    let label = match &node.kind {
        NodeKind::StringLit(text) => escape(text),
        NodeKind::Ident(_) | NodeKind::IntLit(_) => {
            format!(
                "{}\\n{}",
                node.kind_name(),
                escape(&node.literal_text().unwrap_or_default())
            )
        }
        _ => node.kind_name().to_string(),
    };
    let _ = writeln!(out, "   ast{} [label=\"{}\"]", id, label);
    for child in node.children() {
        let _ = writeln!(out, "   ast{} -> ast{}", id, *counter);
        dot_node(out, child, counter);
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders the tree as an s-expression, literal leaves as `kind<payload>`.
pub fn sexpr(ast: &Node) -> String {
    let mut out = String::new();
    sexpr_node(&mut out, ast);
    out
}

fn sexpr_node(out: &mut String, node: &Node) {
    match node.literal_text() {
        Some(text) => {
            let _ = write!(out, "{}<{}> ", node.kind_name(), text);
        }
        None => {
            let _ = write!(out, "({} ", node.kind_name());
            for child in node.children() {
                sexpr_node(out, child);
            }
            out.push_str(") ");
        }
    }
}

/// Reprints the tree in a parenthesised, source-like infix form.
pub fn infix(ast: &Node) -> String {
    let mut out = String::new();
    infix_node(&mut out, ast);
    out
}

fn infix_binary(out: &mut String, left: &Node, op: &str, right: &Node) {
    out.push('(');
    infix_node(out, left);
    out.push_str(op);
    infix_node(out, right);
    out.push(')');
}

fn infix_list(out: &mut String, items: &[Node], separator: &str) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        infix_node(out, item);
    }
}

fn infix_node(out: &mut String, node: &Node) {
    match &node.kind {
        NodeKind::Program { defs } => {
            for def in defs {
                infix_node(out, def);
                out.push('\n');
            }
        }
        NodeKind::VarDef { var_type, names } => {
            infix_node(out, var_type);
            out.push(' ');
            infix_list(out, names, ", ");
            out.push(';');
        }
        NodeKind::FunDef {
            return_type,
            name,
            params,
            body,
        } => {
            infix_node(out, return_type);
            out.push(' ');
            infix_node(out, name);
            out.push('(');
            infix_list(out, params, ", ");
            out.push_str(") ");
            infix_node(out, body);
        }
        NodeKind::Param { param_type, name } => {
            infix_node(out, param_type);
            out.push(' ');
            infix_node(out, name);
        }
        NodeKind::Body { defs, stmts } => {
            out.push_str("{ ");
            for def in defs {
                infix_node(out, def);
                out.push(' ');
            }
            for stmt in stmts {
                infix_node(out, stmt);
                out.push(' ');
            }
            out.push('}');
        }
        NodeKind::While { condition, body } => {
            out.push_str("while (");
            infix_node(out, condition);
            out.push_str(") ");
            infix_node(out, body);
        }
        NodeKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            out.push_str("if (");
            infix_node(out, condition);
            out.push_str(") ");
            infix_node(out, then_branch);
            if let Some(else_branch) = else_branch {
                out.push_str(" else ");
                infix_node(out, else_branch);
            }
        }
        NodeKind::Return { value } => {
            out.push_str("return ");
            infix_node(out, value);
            out.push(';');
        }
        NodeKind::Print { value } => {
            out.push_str("print ");
            infix_node(out, value);
            out.push(';');
        }
        NodeKind::Assign { target, value } => {
            infix_binary(out, target, " = ", value);
            out.push(';');
        }
        NodeKind::CallStmt { call } => {
            infix_node(out, call);
            out.push(';');
        }
        NodeKind::Call { callee, args } => {
            infix_node(out, callee);
            out.push('(');
            infix_list(out, args, ", ");
            out.push(')');
        }
        NodeKind::Add { left, right } => infix_binary(out, left, "+", right),
        NodeKind::Sub { left, right } => infix_binary(out, left, "-", right),
        NodeKind::Mul { left, right } => infix_binary(out, left, "*", right),
        NodeKind::Div { left, right } => infix_binary(out, left, "/", right),
        NodeKind::Eq { left, right } => infix_binary(out, left, "=", right),
        NodeKind::Neq { left, right } => infix_binary(out, left, "!=", right),
        NodeKind::Lt { left, right } => infix_binary(out, left, "<", right),
        NodeKind::Gt { left, right } => infix_binary(out, left, ">", right),
        NodeKind::Leq { left, right } => infix_binary(out, left, "<=", right),
        NodeKind::Geq { left, right } => infix_binary(out, left, ">=", right),
        NodeKind::Neg { operand } => {
            out.push('-');
            infix_node(out, operand);
        }
        NodeKind::Ident(text) => out.push_str(text),
        NodeKind::StringLit(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        NodeKind::IntLit(value) => {
            let _ = write!(out, "{}", value);
        }
        NodeKind::TypeInteger => out.push_str("Integer"),
        NodeKind::TypeString => out.push_str("String"),
    }
}
