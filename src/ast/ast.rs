use crate::symbols::symbols::ScopeId;
use crate::types::types::{TypeId, NO_TYPE};
use crate::Position;

/// One node of the syntax tree.
///
/// The kind carries the children; `scope` and `ty` are the annotation
/// slots filled in by the binding and type-checking passes. Each node
/// exclusively owns its children: the tree is strict, with no sharing and
/// no cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
    /// Scope active at this node, attached by the binding pass.
    pub scope: Option<ScopeId>,
    /// Inferred type, attached by the type-checking pass.
    pub ty: TypeId,
}

/// The node kinds of the nanoLang grammar, one variant per kind with
/// explicitly named child slots. List-shaped constructs (definition
/// sequences, identifier lists, parameter lists, statement sequences,
/// argument lists) are plain vectors in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Top-level sequence of variable and function definitions.
    Program { defs: Vec<Node> },
    /// `Type name1, name2, ...;` - one declared type, one or more names.
    VarDef { var_type: Box<Node>, names: Vec<Node> },
    FunDef {
        return_type: Box<Node>,
        name: Box<Node>,
        params: Vec<Node>,
        body: Box<Node>,
    },
    Param { param_type: Box<Node>, name: Box<Node> },
    /// `{ vardefs... stmts... }` - opens its own scope.
    Body { defs: Vec<Node>, stmts: Vec<Node> },
    While { condition: Box<Node>, body: Box<Node> },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    Return { value: Box<Node> },
    Print { value: Box<Node> },
    Assign { target: Box<Node>, value: Box<Node> },
    /// A function call in statement position.
    CallStmt { call: Box<Node> },
    Call { callee: Box<Node>, args: Vec<Node> },
    Add { left: Box<Node>, right: Box<Node> },
    Sub { left: Box<Node>, right: Box<Node> },
    Mul { left: Box<Node>, right: Box<Node> },
    Div { left: Box<Node>, right: Box<Node> },
    /// Unary minus.
    Neg { operand: Box<Node> },
    Eq { left: Box<Node>, right: Box<Node> },
    Neq { left: Box<Node>, right: Box<Node> },
    Lt { left: Box<Node>, right: Box<Node> },
    Gt { left: Box<Node>, right: Box<Node> },
    Leq { left: Box<Node>, right: Box<Node> },
    Geq { left: Box<Node>, right: Box<Node> },
    Ident(String),
    StringLit(String),
    IntLit(i64),
    TypeInteger,
    TypeString,
}

impl Node {
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Node {
            kind,
            position,
            scope: None,
            ty: NO_TYPE,
        }
    }

    /// The identifier text, for `Ident` nodes.
    pub fn ident_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Ident(text) => Some(text),
            _ => None,
        }
    }

    /// Present children in slot order, as used by the generic traversals.
    pub fn children(&self) -> Vec<&Node> {
        let mut children: Vec<&Node> = Vec::new();
        match &self.kind {
            NodeKind::Program { defs } => children.extend(defs),
            NodeKind::VarDef { var_type, names } => {
                children.push(var_type);
                children.extend(names);
            }
            NodeKind::FunDef {
                return_type,
                name,
                params,
                body,
            } => {
                children.push(return_type);
                children.push(name);
                children.extend(params);
                children.push(body);
            }
            NodeKind::Param { param_type, name } => {
                children.push(param_type);
                children.push(name);
            }
            NodeKind::Body { defs, stmts } => {
                children.extend(defs);
                children.extend(stmts);
            }
            NodeKind::While { condition, body } => {
                children.push(condition);
                children.push(body);
            }
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                children.push(condition);
                children.push(then_branch);
                if let Some(else_branch) = else_branch {
                    children.push(else_branch);
                }
            }
            NodeKind::Return { value } | NodeKind::Print { value } => children.push(value),
            NodeKind::Assign { target, value } => {
                children.push(target);
                children.push(value);
            }
            NodeKind::CallStmt { call } => children.push(call),
            NodeKind::Call { callee, args } => {
                children.push(callee);
                children.extend(args);
            }
            NodeKind::Add { left, right }
            | NodeKind::Sub { left, right }
            | NodeKind::Mul { left, right }
            | NodeKind::Div { left, right }
            | NodeKind::Eq { left, right }
            | NodeKind::Neq { left, right }
            | NodeKind::Lt { left, right }
            | NodeKind::Gt { left, right }
            | NodeKind::Leq { left, right }
            | NodeKind::Geq { left, right } => {
                children.push(left);
                children.push(right);
            }
            NodeKind::Neg { operand } => children.push(operand),
            NodeKind::Ident(_)
            | NodeKind::StringLit(_)
            | NodeKind::IntLit(_)
            | NodeKind::TypeInteger
            | NodeKind::TypeString => {}
        }
        children
    }

    /// Mutable variant of [`Node::children`], same slot order.
    pub fn children_mut(&mut self) -> Vec<&mut Node> {
        let mut children: Vec<&mut Node> = Vec::new();
        match &mut self.kind {
            NodeKind::Program { defs } => children.extend(defs.iter_mut()),
            NodeKind::VarDef { var_type, names } => {
                children.push(var_type);
                children.extend(names.iter_mut());
            }
            NodeKind::FunDef {
                return_type,
                name,
                params,
                body,
            } => {
                children.push(return_type);
                children.push(name);
                children.extend(params.iter_mut());
                children.push(body);
            }
            NodeKind::Param { param_type, name } => {
                children.push(param_type);
                children.push(name);
            }
            NodeKind::Body { defs, stmts } => {
                children.extend(defs.iter_mut());
                children.extend(stmts.iter_mut());
            }
            NodeKind::While { condition, body } => {
                children.push(condition);
                children.push(body);
            }
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                children.push(condition);
                children.push(then_branch);
                if let Some(else_branch) = else_branch {
                    children.push(else_branch);
                }
            }
            NodeKind::Return { value } | NodeKind::Print { value } => children.push(value),
            NodeKind::Assign { target, value } => {
                children.push(target);
                children.push(value);
            }
            NodeKind::CallStmt { call } => children.push(call),
            NodeKind::Call { callee, args } => {
                children.push(callee);
                children.extend(args.iter_mut());
            }
            NodeKind::Add { left, right }
            | NodeKind::Sub { left, right }
            | NodeKind::Mul { left, right }
            | NodeKind::Div { left, right }
            | NodeKind::Eq { left, right }
            | NodeKind::Neq { left, right }
            | NodeKind::Lt { left, right }
            | NodeKind::Gt { left, right }
            | NodeKind::Leq { left, right }
            | NodeKind::Geq { left, right } => {
                children.push(left);
                children.push(right);
            }
            NodeKind::Neg { operand } => children.push(operand),
            NodeKind::Ident(_)
            | NodeKind::StringLit(_)
            | NodeKind::IntLit(_)
            | NodeKind::TypeInteger
            | NodeKind::TypeString => {}
        }
        children
    }

    /// Name of the node kind, used by the debug renderings.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Program { .. } => "program",
            NodeKind::VarDef { .. } => "vardef",
            NodeKind::FunDef { .. } => "fundef",
            NodeKind::Param { .. } => "param",
            NodeKind::Body { .. } => "body",
            NodeKind::While { .. } => "while",
            NodeKind::If { .. } => "if",
            NodeKind::Return { .. } => "return",
            NodeKind::Print { .. } => "print",
            NodeKind::Assign { .. } => "assign",
            NodeKind::CallStmt { .. } => "callstmt",
            NodeKind::Call { .. } => "call",
            NodeKind::Add { .. } => "add",
            NodeKind::Sub { .. } => "sub",
            NodeKind::Mul { .. } => "mul",
            NodeKind::Div { .. } => "div",
            NodeKind::Neg { .. } => "neg",
            NodeKind::Eq { .. } => "eq",
            NodeKind::Neq { .. } => "neq",
            NodeKind::Lt { .. } => "lt",
            NodeKind::Gt { .. } => "gt",
            NodeKind::Leq { .. } => "leq",
            NodeKind::Geq { .. } => "geq",
            NodeKind::Ident(_) => "ident",
            NodeKind::StringLit(_) => "stringlit",
            NodeKind::IntLit(_) => "intlit",
            NodeKind::TypeInteger => "Integer",
            NodeKind::TypeString => "String",
        }
    }

    /// Payload text of literal nodes, if any.
    pub fn literal_text(&self) -> Option<String> {
        match &self.kind {
            NodeKind::Ident(text) | NodeKind::StringLit(text) => Some(text.clone()),
            NodeKind::IntLit(value) => Some(value.to_string()),
            _ => None,
        }
    }
}
