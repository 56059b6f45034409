use strata_common::StringId;

use super::ids::{ParamId, ProcId, ScopeId, StmtId, SymbolId, TypeId};

#[derive(Debug, Clone, Copy)]
pub struct Data {
    pub name: StringId,
    pub sym: SymbolId,
    pub tp: TypeId,
}

#[derive(Debug, Clone, Copy)]
pub struct Array {
    pub name: StringId,
    pub sym: SymbolId,
    /// The array's own type (a [`crate::ast::ty::TypeKind::Array`]), which
    /// in turn wraps the index and value types parsed from `[IDX] VALUE`.
    pub tp: TypeId,
}

#[derive(Debug, Clone, Copy)]
pub struct Proc {
    pub name: StringId,
    pub sym: SymbolId,
    /// The proc's own type (a [`crate::ast::ty::TypeKind::Proc`]).
    pub tp: TypeId,
    pub scope: ScopeId,
    pub first_param: u32,
    pub nparams: u32,
    pub body: StmtId,
}

/// Stored so a proc's parameters occupy a contiguous `(proc, rank)` run,
/// mirroring the proc type's own `ParamType` run.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub proc: ProcId,
    pub sym: SymbolId,
    pub tp: TypeId,
    pub rank: u32,
}
