use strata_common::define_id;

define_id!(pub struct ScopeId;);
define_id!(pub struct SymbolId;);
define_id!(pub struct SymrefId;);
define_id!(pub struct TypeId;);
define_id!(pub struct ParamTypeId;);
define_id!(pub struct DataId;);
define_id!(pub struct ArrayId;);
define_id!(pub struct ProcId;);
define_id!(pub struct ParamId;);
define_id!(pub struct ExprId;);
define_id!(pub struct CallArgId;);
define_id!(pub struct StmtId;);
define_id!(pub struct ChildStmtId;);
