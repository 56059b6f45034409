use strata_common::StringId;

use super::ids::{SymrefId, TypeId};

#[derive(Debug, Clone, Copy)]
pub enum TypeKind {
    Base {
        name: StringId,
        size_bytes: u32,
    },
    /// A named wrapper around another type, introduced by `entity NAME TYPE;`.
    Entity {
        name: StringId,
        inner: TypeId,
    },
    Array {
        index_type: TypeId,
        value_type: TypeId,
    },
    Proc {
        return_type: TypeId,
        nargs: u32,
        first_param_type: u32,
    },
    /// Any named-type occurrence in the grammar (`T` or `^T`). Resolution
    /// is always deferred through a [`crate::ast::Symref`] since the name
    /// may forward-reference a declaration later in the same scope (see
    /// scenario S2). `resolved` is filled in during symbol resolution,
    /// once `symref` has been bound. `is_indirect` records whether the
    /// occurrence was written with a leading `^`; it does not affect the
    /// completion rule below but is kept for a future code generator that
    /// needs to distinguish a pointer from a plain alias.
    Reference {
        symref: SymrefId,
        is_indirect: bool,
        resolved: Option<TypeId>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Type {
    pub kind: TypeKind,
    pub is_complete: bool,
}

impl Type {
    pub fn new(kind: TypeKind) -> Self {
        let is_complete = matches!(kind, TypeKind::Base { .. });
        Self { kind, is_complete }
    }
}

/// One parameter type in a proc type's parameter list. Stored in a
/// dedicated arena so the `(proctp, rank)` ordering of a proc type's
/// parameters forms a contiguous dense-linked run, matching how
/// [`super::decl::Param`] uses the same rank scheme for values.
#[derive(Debug, Clone, Copy)]
pub struct ParamType {
    pub proc_type: TypeId,
    pub rank: u32,
    pub ty: TypeId,
}
