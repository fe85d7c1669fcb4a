use std::fmt::Write;

use thiserror::Error;

/// Stable handle into the [`TypeTable`]; simply the insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub usize);

pub const NO_TYPE: TypeId = TypeId(0);
pub const STRING: TypeId = TypeId(1);
pub const INTEGER: TypeId = TypeId(2);

const ATOMIC_NAMES: [&str; 3] = ["NoType", "String", "Integer"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Atomic,
    Function,
}

/// One entry of the type table.
///
/// Slot 0 of `args` is the return type, slots 1.. are the parameter types,
/// so a function `(String, String) -> Integer` stores `[Integer, String,
/// String]`. Atomic entries store their own handle in slot 0, which lets
/// return-type retrieval be a single accessor regardless of kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NanoType {
    pub kind: TypeKind,
    pub args: Vec<TypeId>,
}

impl NanoType {
    pub fn function(return_type: TypeId, params: Vec<TypeId>) -> Self {
        let mut args = Vec::with_capacity(params.len() + 1);
        args.push(return_type);
        args.extend(params);
        NanoType {
            kind: TypeKind::Function,
            args,
        }
    }

    fn atomic(own: TypeId) -> Self {
        NanoType {
            kind: TypeKind::Atomic,
            args: vec![own],
        }
    }

    pub fn return_type(&self) -> TypeId {
        self.args[0]
    }

    pub fn param_types(&self) -> &[TypeId] {
        &self.args[1..]
    }
}

/// Returned when a configured type-table limit would be exceeded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("type table capacity exceeded (limit {limit})")]
pub struct TableFull {
    pub limit: usize,
}

/// Append-only catalog of structural types.
///
/// Entries are never mutated or removed, so a [`TypeId`] stays valid for
/// the table's lifetime. The store grows on demand; an optional limit can
/// be configured per session, in which case exceeding it is a reported,
/// recoverable failure rather than an abort.
#[derive(Debug)]
pub struct TypeTable {
    types: Vec<NanoType>,
    limit: Option<usize>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        let mut table = TypeTable {
            types: Vec::new(),
            limit,
        };
        // Reserved handles 0, 1, 2.
        table.types.push(NanoType::atomic(NO_TYPE));
        table.types.push(NanoType::atomic(STRING));
        table.types.push(NanoType::atomic(INTEGER));
        table
    }

    /// Returns the handle of a structurally equal existing entry, or
    /// appends `ty` and returns the fresh handle.
    pub fn intern(&mut self, ty: NanoType) -> Result<TypeId, TableFull> {
        for (index, existing) in self.types.iter().enumerate() {
            if *existing == ty {
                return Ok(TypeId(index));
            }
        }
        if let Some(limit) = self.limit {
            if self.types.len() >= limit {
                return Err(TableFull { limit });
            }
        }
        self.types.push(ty);
        Ok(TypeId(self.types.len() - 1))
    }

    pub fn get(&self, id: TypeId) -> &NanoType {
        &self.types[id.0]
    }

    /// The retrievable resulting type of a symbol of type `id`: the return
    /// type for functions, the type itself for atomics.
    pub fn return_type(&self, id: TypeId) -> TypeId {
        self.get(id).return_type()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Renders a type as `Integer` or `(String, Integer) -> Integer`.
    pub fn render(&self, id: TypeId) -> String {
        let entry = self.get(id);
        match entry.kind {
            TypeKind::Atomic => ATOMIC_NAMES[id.0].to_string(),
            TypeKind::Function => {
                let params: Vec<String> = entry
                    .param_types()
                    .iter()
                    .map(|&param| self.render(param))
                    .collect();
                format!(
                    "({}) -> {}",
                    params.join(", "),
                    self.render(entry.return_type())
                )
            }
        }
    }

    /// Renders the whole table, one `index: type` line per entry.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for index in 0..self.types.len() {
            let _ = writeln!(out, "{}: {}", index, self.render(TypeId(index)));
        }
        out
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}
