use std::fmt::Write;

use thiserror::Error;

use crate::types::types::{TypeId, TypeTable, NO_TYPE};
use crate::Position;

/// Index of a scope in the [`SymbolTable`] arena. Nodes store these as
/// non-owning back-references to the scope active at the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub usize);

/// A single name binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: TypeId,
    pub position: Position,
}

/// A flat set of bindings plus a reference to the enclosing scope.
#[derive(Debug)]
pub struct Scope {
    symbols: Vec<Symbol>,
    parent: Option<ScopeId>,
}

impl Scope {
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

/// Returned when an insert is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsertError {
    #[error("symbol '{name}' doubly defined (previous definition at {previous})")]
    Duplicate { name: String, previous: Position },
    #[error("scope capacity exceeded (limit {limit})")]
    ScopeFull { limit: usize },
}

/// Arena of scopes forming a tree via parent references.
///
/// Scopes are created by `enter_scope` and retained forever: `leave_scope`
/// only returns the parent, because AST nodes keep referring to left
/// scopes for later diagnostics and printing.
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    scope_limit: Option<usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// `limit` bounds the number of symbols per scope; exceeding it makes
    /// `insert` fail instead of aborting anything.
    pub fn with_limit(limit: Option<usize>) -> Self {
        SymbolTable {
            scopes: Vec::new(),
            scope_limit: limit,
        }
    }

    /// Creates a fresh empty scope whose parent is `parent`.
    pub fn enter_scope(&mut self, parent: Option<ScopeId>) -> ScopeId {
        self.scopes.push(Scope {
            symbols: Vec::new(),
            parent,
        });
        ScopeId(self.scopes.len() - 1)
    }

    /// Returns the parent scope. The scope itself stays readable.
    pub fn leave_scope(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.0].parent
    }

    pub fn scope(&self, scope: ScopeId) -> &Scope {
        &self.scopes[scope.0]
    }

    /// Inserts a binding, rejecting duplicates within the same scope. The
    /// enclosing chain is not consulted: shadowing an outer binding is
    /// legal.
    pub fn insert(
        &mut self,
        scope: ScopeId,
        name: &str,
        ty: TypeId,
        position: Position,
    ) -> Result<(), InsertError> {
        if let Some(existing) = self.lookup_local(scope, name) {
            return Err(InsertError::Duplicate {
                name: name.to_string(),
                previous: existing.position,
            });
        }
        if let Some(limit) = self.scope_limit {
            if self.scopes[scope.0].symbols.len() >= limit {
                return Err(InsertError::ScopeFull { limit });
            }
        }
        self.scopes[scope.0].symbols.push(Symbol {
            name: name.to_string(),
            ty,
            position,
        });
        Ok(())
    }

    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.scopes[scope.0]
            .symbols
            .iter()
            .find(|symbol| symbol.name == name)
    }

    /// Walks from `scope` out through the parents, returning the innermost
    /// match.
    pub fn lookup_chain(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(symbol) = self.lookup_local(id, name) {
                return Some(symbol);
            }
            current = self.scopes[id.0].parent;
        }
        None
    }

    /// The usable value type of `name` resolved from `scope`: the return
    /// type for functions, the declared type for variables, `NoType` if
    /// unresolved.
    pub fn return_type_of(&self, scope: ScopeId, name: &str, types: &TypeTable) -> TypeId {
        match self.lookup_chain(scope, name) {
            Some(symbol) => types.return_type(symbol.ty),
            None => NO_TYPE,
        }
    }

    /// Renders one scope, a `name: type` line per symbol in declaration
    /// order.
    pub fn dump_scope(&self, scope: ScopeId, types: &TypeTable) -> String {
        let mut out = String::new();
        for symbol in &self.scopes[scope.0].symbols {
            let _ = writeln!(out, "{:<20}: {}", symbol.name, types.render(symbol.ty));
        }
        out
    }

    /// Renders the whole chain from `scope` outwards, innermost first.
    pub fn dump_chain(&self, scope: ScopeId, types: &TypeTable) -> String {
        let mut out = String::new();
        let mut current = Some(scope);
        while let Some(id) = current {
            out.push_str("-----------------------\n");
            out.push_str(&self.dump_scope(id, types));
            current = self.scopes[id.0].parent;
        }
        out
    }
}
