use strata_common::{StringId, Token};

use super::ids::{ExprId, SymrefId, TypeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnopKind {
    Neg,
    BitNot,
    LogNot,
    AddrOf,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinopKind {
    Add,
    Sub,
    Mul,
    Div,
    BitOr,
    BitAnd,
    BitXor,
    Eq,
    Assign,
}

#[derive(Debug, Clone, Copy)]
pub enum ExprKind {
    Literal(Token),
    Symref(SymrefId),
    Unop {
        op: UnopKind,
        token: Token,
        operand: ExprId,
    },
    Binop {
        op: BinopKind,
        token: Token,
        left: ExprId,
        right: ExprId,
    },
    Member {
        parent: ExprId,
        name: StringId,
    },
    Subscript {
        array: ExprId,
        index: ExprId,
    },
    Call {
        callee: ExprId,
        first_arg: u32,
        nargs: u32,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Expr {
    pub kind: ExprKind,
    pub tp: Option<TypeId>,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Self { kind, tp: None }
    }
}

/// One argument of a call expression, stored so that `(callExpr, argExpr,
/// rank)` triples for the same call form a contiguous run in the arena.
#[derive(Debug, Clone, Copy)]
pub struct CallArg {
    pub call: ExprId,
    pub arg: ExprId,
    pub rank: u32,
}
