use crate::ast::ast::{Node, NodeKind};
use crate::errors::errors::{Diagnostic, DiagnosticKind, EntryPointViolation};
use crate::symbols::symbols::{InsertError, ScopeId, SymbolTable};
use crate::types::types::{NanoType, TypeId, TypeKind, TypeTable, INTEGER, NO_TYPE, STRING};
use crate::Position;

/// Per-session resource limits. Both default to unbounded; when set,
/// exceeding a limit rejects the offending insert with a diagnostic
/// instead of aborting the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckerConfig {
    pub max_types: Option<usize>,
    pub max_symbols_per_scope: Option<usize>,
}

/// Results of the three passes. The caller combines them to decide
/// whether to proceed to code generation; later results are meaningless
/// if binding failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub bindings_ok: bool,
    pub types_ok: bool,
    pub returns_ok: bool,
}

impl CheckReport {
    pub fn success(&self) -> bool {
        self.bindings_ok && self.types_ok && self.returns_ok
    }
}

/// One semantic-checking session over one tree.
///
/// Owns all mutable state of the analysis: the type table, the scope
/// arena and the diagnostics, which are kept in traversal order.
#[derive(Debug)]
pub struct Checker {
    pub types: TypeTable,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
    root: Option<ScopeId>,
}

impl Checker {
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    pub fn with_config(config: CheckerConfig) -> Self {
        Checker {
            types: TypeTable::with_limit(config.max_types),
            symbols: SymbolTable::with_limit(config.max_symbols_per_scope),
            diagnostics: Vec::new(),
            root: None,
        }
    }

    /// The outermost scope, once `bind` has run.
    pub fn root_scope(&self) -> Option<ScopeId> {
        self.root
    }

    /// Runs all three passes in order and reports their independent
    /// results.
    pub fn check(&mut self, ast: &mut Node) -> CheckReport {
        let bindings_ok = self.bind(ast);
        let types_ok = self.type_check(ast);
        let returns_ok = self.check_returns(ast);
        CheckReport {
            bindings_ok,
            types_ok,
            returns_ok,
        }
    }

    // --- Pass 1: binding -------------------------------------------------

    /// Builds the scope chain, attaches the active scope to every node and
    /// inserts symbols as definitions are encountered.
    pub fn bind(&mut self, ast: &mut Node) -> bool {
        let root = self.symbols.enter_scope(None);
        self.root = Some(root);
        self.bind_node(ast, root)
    }

    fn bind_node(&mut self, node: &mut Node, scope: ScopeId) -> bool {
        node.scope = Some(scope);
        match node.kind {
            NodeKind::VarDef { .. } => self.bind_vardef(node, scope),
            NodeKind::FunDef { .. } => self.bind_fundef(node, scope),
            NodeKind::Body { .. } => self.bind_body(node, scope),
            _ => {
                let mut ok = true;
                for child in node.children_mut() {
                    ok &= self.bind_node(child, scope);
                }
                ok
            }
        }
    }

    fn bind_vardef(&mut self, node: &mut Node, scope: ScopeId) -> bool {
        let NodeKind::VarDef { var_type, names } = &mut node.kind else {
            return true;
        };
        let mut ok = true;
        // Children first: the names only become visible after this
        // definition, never to earlier code in the same scope.
        ok &= self.bind_node(var_type, scope);
        for name in names.iter_mut() {
            ok &= self.bind_node(name, scope);
        }
        let declared = atomic_type_of(var_type);
        let position = var_type.position;
        for name in names.iter() {
            if let Some(text) = name.ident_text() {
                ok &= self.declare(scope, text, declared, position);
            }
        }
        ok
    }

    fn bind_fundef(&mut self, node: &mut Node, scope: ScopeId) -> bool {
        let NodeKind::FunDef {
            return_type,
            name,
            params,
            body,
        } = &mut node.kind
        else {
            return true;
        };
        let mut ok = true;
        let position = return_type.position;
        let param_types: Vec<TypeId> = params
            .iter()
            .filter_map(param_parts)
            .map(|(ty_node, _)| atomic_type_of(ty_node))
            .collect();
        let signature = NanoType::function(atomic_type_of(return_type), param_types);
        let handle = match self.types.intern(signature) {
            Ok(handle) => handle,
            Err(full) => {
                self.diagnostics.push(Diagnostic::error(
                    DiagnosticKind::TableCapacityExceeded {
                        table: "type table",
                        limit: full.limit,
                    },
                    position,
                ));
                ok = false;
                NO_TYPE
            }
        };
        // The function's own symbol lands in the enclosing scope before the
        // body is visited, so the body can call the function recursively.
        if let Some(text) = name.ident_text() {
            ok &= self.declare(scope, text, handle, position);
        }
        ok &= self.bind_node(return_type, scope);
        ok &= self.bind_node(name, scope);
        let inner = self.symbols.enter_scope(Some(scope));
        for param in params.iter() {
            if let Some((ty_node, name_node)) = param_parts(param) {
                if let Some(text) = name_node.ident_text() {
                    ok &= self.declare(inner, text, atomic_type_of(ty_node), ty_node.position);
                }
            }
        }
        for param in params.iter_mut() {
            ok &= self.bind_node(param, inner);
        }
        ok &= self.bind_node(body, inner);
        ok
    }

    fn bind_body(&mut self, node: &mut Node, scope: ScopeId) -> bool {
        // A body opens its own scope, nested inside the parameter scope
        // for function bodies, so block-local definitions shadow outer
        // ones.
        let inner = self.symbols.enter_scope(Some(scope));
        node.scope = Some(inner);
        let mut ok = true;
        for child in node.children_mut() {
            ok &= self.bind_node(child, inner);
        }
        ok
    }

    fn declare(&mut self, scope: ScopeId, name: &str, ty: TypeId, position: Position) -> bool {
        match self.symbols.insert(scope, name, ty, position) {
            Ok(()) => true,
            Err(InsertError::Duplicate { name, previous }) => {
                self.diagnostics.push(Diagnostic::error(
                    DiagnosticKind::DuplicateSymbol { name, previous },
                    position,
                ));
                false
            }
            Err(InsertError::ScopeFull { limit }) => {
                self.diagnostics.push(Diagnostic::error(
                    DiagnosticKind::TableCapacityExceeded {
                        table: "symbol table",
                        limit,
                    },
                    position,
                ));
                false
            }
        }
    }

    // --- Pass 2: type inference and checking -----------------------------

    /// Infers the type of every expression bottom-up and validates
    /// operators and calls. Every sub-check runs regardless of earlier
    /// failures; the result is the AND over all of them.
    pub fn type_check(&mut self, ast: &mut Node) -> bool {
        self.check_node(ast)
    }

    fn check_node(&mut self, node: &mut Node) -> bool {
        if matches!(node.kind, NodeKind::Call { .. }) {
            return self.check_call(node);
        }
        let mut ok = true;
        // Types work bottom-up.
        for child in node.children_mut() {
            ok &= self.check_node(child);
        }
        match &node.kind {
            NodeKind::IntLit(_) => node.ty = INTEGER,
            NodeKind::StringLit(_) => node.ty = STRING,
            NodeKind::Ident(name) => {
                let resolved = match node.scope {
                    Some(scope) => self.symbols.return_type_of(scope, name, &self.types),
                    None => NO_TYPE,
                };
                if resolved == NO_TYPE {
                    self.diagnostics.push(Diagnostic::error(
                        DiagnosticKind::UndefinedIdentifier { name: name.clone() },
                        node.position,
                    ));
                    ok = false;
                }
                node.ty = resolved;
            }
            NodeKind::Add { left, right }
            | NodeKind::Sub { left, right }
            | NodeKind::Mul { left, right }
            | NodeKind::Div { left, right } => {
                ok &= self.expect_integer(left);
                ok &= self.expect_integer(right);
                node.ty = INTEGER;
            }
            NodeKind::Neg { operand } => {
                ok &= self.expect_integer(operand);
                node.ty = INTEGER;
            }
            NodeKind::Assign { target, value } => {
                // The right-hand side takes the blame on disagreement.
                if target.ty != value.ty {
                    self.report_mismatch(target.ty, value);
                    ok = false;
                }
                node.ty = NO_TYPE;
            }
            NodeKind::Eq { left, right }
            | NodeKind::Neq { left, right }
            | NodeKind::Lt { left, right }
            | NodeKind::Gt { left, right }
            | NodeKind::Leq { left, right }
            | NodeKind::Geq { left, right } => {
                if left.ty != right.ty {
                    self.report_mismatch(left.ty, right);
                    ok = false;
                }
                node.ty = NO_TYPE;
            }
            // Statements carry no value type.
            _ => node.ty = NO_TYPE,
        }
        ok
    }

    fn check_call(&mut self, node: &mut Node) -> bool {
        let position = node.position;
        let scope = node.scope;
        let NodeKind::Call { callee, args } = &mut node.kind else {
            return true;
        };
        let mut ok = true;
        for arg in args.iter_mut() {
            ok &= self.check_node(arg);
        }
        let Some(function) = callee.ident_text().map(str::to_string) else {
            return false;
        };
        let resolved =
            scope.and_then(|s| self.symbols.lookup_chain(s, &function).map(|symbol| symbol.ty));
        let Some(symbol_ty) = resolved else {
            self.diagnostics.push(Diagnostic::error(
                DiagnosticKind::UndefinedIdentifier { name: function },
                callee.position,
            ));
            return false;
        };
        let signature = self.types.get(symbol_ty).clone();
        node.ty = signature.return_type();
        callee.ty = node.ty;
        let declared = signature.param_types();
        for (index, arg) in args.iter().enumerate() {
            if index >= declared.len() {
                self.diagnostics.push(Diagnostic::error(
                    DiagnosticKind::ArityMismatch {
                        function: function.clone(),
                        expected: declared.len(),
                        found: args.len(),
                    },
                    arg.position,
                ));
                ok = false;
                break;
            }
            if arg.ty != declared[index] {
                self.report_mismatch(declared[index], arg);
                ok = false;
            }
        }
        if args.len() < declared.len() {
            self.diagnostics.push(Diagnostic::error(
                DiagnosticKind::ArityMismatch {
                    function: function.clone(),
                    expected: declared.len(),
                    found: args.len(),
                },
                position,
            ));
            ok = false;
        }
        ok
    }

    fn expect_integer(&mut self, operand: &Node) -> bool {
        if operand.ty == INTEGER {
            true
        } else {
            self.report_mismatch(INTEGER, operand);
            false
        }
    }

    fn report_mismatch(&mut self, expected: TypeId, found: &Node) {
        let kind = DiagnosticKind::TypeMismatch {
            expected: self.types.render(expected),
            found: self.types.render(found.ty),
        };
        self.diagnostics.push(Diagnostic::error(kind, found.position));
    }

    // --- Pass 3: returns and entry point ---------------------------------

    /// Validates every return statement against the enclosing function's
    /// declared return type, warns about bodies that cannot guarantee a
    /// return, and checks the `main` entry point. Warnings do not affect
    /// the returned flag.
    pub fn check_returns(&mut self, ast: &Node) -> bool {
        let mut ok = self.check_return_types(ast, NO_TYPE);
        self.check_return_coverage(ast);
        ok &= self.check_entry_point();
        ok
    }

    fn check_return_types(&mut self, node: &Node, expected: TypeId) -> bool {
        match &node.kind {
            NodeKind::FunDef { name, body, .. } => {
                let expected = match (node.scope, name.ident_text()) {
                    (Some(scope), Some(text)) => {
                        self.symbols.return_type_of(scope, text, &self.types)
                    }
                    _ => NO_TYPE,
                };
                self.check_return_types(body, expected)
            }
            NodeKind::Return { value } => {
                if value.ty != expected {
                    self.report_mismatch(expected, value);
                    false
                } else {
                    true
                }
            }
            _ => {
                let mut ok = true;
                for child in node.children() {
                    ok &= self.check_return_types(child, expected);
                }
                ok
            }
        }
    }

    fn check_return_coverage(&mut self, node: &Node) {
        match &node.kind {
            NodeKind::Program { defs } => {
                for def in defs {
                    self.check_return_coverage(def);
                }
            }
            NodeKind::FunDef {
                return_type, name, body, ..
            } => {
                if !guarantees_return(body) {
                    let function = name.ident_text().unwrap_or_default().to_string();
                    self.diagnostics.push(Diagnostic::warning(
                        DiagnosticKind::MissingReturn { function },
                        return_type.position,
                    ));
                }
            }
            _ => {}
        }
    }

    fn check_entry_point(&mut self) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let Some(symbol) = self.symbols.lookup_local(root, "main") else {
            self.diagnostics
                .push(Diagnostic::unpositioned(DiagnosticKind::InvalidEntryPoint {
                    violation: EntryPointViolation::Missing,
                }));
            return false;
        };
        let position = symbol.position;
        let main_type = self.types.get(symbol.ty).clone();
        if main_type.kind != TypeKind::Function {
            self.diagnostics.push(Diagnostic::error(
                DiagnosticKind::InvalidEntryPoint {
                    violation: EntryPointViolation::NotAFunction,
                },
                position,
            ));
            return false;
        }
        let mut ok = true;
        if main_type.return_type() != INTEGER {
            self.diagnostics.push(Diagnostic::error(
                DiagnosticKind::InvalidEntryPoint {
                    violation: EntryPointViolation::ReturnNotInteger,
                },
                position,
            ));
            ok = false;
        }
        for &param in main_type.param_types() {
            if param != STRING {
                self.diagnostics.push(Diagnostic::error(
                    DiagnosticKind::InvalidEntryPoint {
                        violation: EntryPointViolation::ParameterNotString,
                    },
                    position,
                ));
                ok = false;
            }
        }
        ok
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

/// The atomic type named by a type node.
fn atomic_type_of(node: &Node) -> TypeId {
    match node.kind {
        NodeKind::TypeString => STRING,
        NodeKind::TypeInteger => INTEGER,
        _ => NO_TYPE,
    }
}

fn param_parts(param: &Node) -> Option<(&Node, &Node)> {
    match &param.kind {
        NodeKind::Param { param_type, name } => Some((param_type, name)),
        _ => None,
    }
}

/// Conservative structural check: a body guarantees a return only when its
/// final statement is a return, unwrapping nested blocks. Conditionals and
/// loops never count, even when every runtime path returns.
fn guarantees_return(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Return { .. } => true,
        NodeKind::Body { stmts, .. } => stmts.last().map(guarantees_return).unwrap_or(false),
        _ => false,
    }
}
