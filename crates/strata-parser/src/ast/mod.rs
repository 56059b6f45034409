pub mod decl;
pub mod expr;
pub mod ids;
pub mod scope;
pub mod stmt;
pub mod symbol;
pub mod ty;

pub use decl::{Array, Data, Param, Proc};
pub use expr::{BinopKind, CallArg, Expr, ExprKind, UnopKind};
pub use ids::*;
pub use scope::{Scope, ScopeKind};
pub use stmt::{ChildStmt, Stmt, StmtKind};
pub use symbol::{Symbol, SymbolPayload, Symref};
pub use ty::{ParamType, Type, TypeKind};
