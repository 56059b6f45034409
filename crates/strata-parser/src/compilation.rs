//! The explicit context value every phase threads through instead of relying
//! on global mutable state: every arena the pipeline allocates into, plus
//! the parser's scope stack.

use strata_common::{Arena, CompileError, FileArena, FileId, Keywords, StringArena, StringId};

use crate::ast::{
    Array, CallArg, ChildStmt, Data, Expr, Param, ParamType, Proc, Scope, ScopeId, ScopeKind,
    Stmt, Symbol, SymbolPayload, Symref, Type, TypeId, TypeKind,
};

/// Scopes may nest at most this deep (proc bodies and the compound
/// statements inside them). The 17th nested scope is rejected.
pub const MAX_SCOPE_DEPTH: usize = 16;

pub struct Compilation {
    pub strings: StringArena,
    pub keywords: Keywords,
    pub files: FileArena,

    pub scopes: Arena<Scope>,
    pub symbols: Arena<Symbol>,
    pub symrefs: Arena<Symref>,
    pub types: Arena<Type>,
    pub param_types: Arena<ParamType>,
    pub datas: Arena<Data>,
    pub arrays: Arena<Array>,
    pub procs: Arena<Proc>,
    pub params: Arena<Param>,
    pub exprs: Arena<Expr>,
    pub call_args: Arena<CallArg>,
    pub stmts: Arena<Stmt>,
    pub child_stmts: Arena<ChildStmt>,

    pub root_scope: ScopeId,
    pub base_int: TypeId,
    pub base_void: TypeId,

    scope_stack: Vec<ScopeId>,
}

impl Compilation {
    pub fn new() -> Self {
        let mut strings = StringArena::new();
        let keywords = Keywords::intern_all(&mut strings);

        let mut scopes = Arena::new();
        let root_id = ScopeId(scopes.push(Scope::root()));

        let mut me = Self {
            strings,
            keywords,
            files: FileArena::new(),
            scopes,
            symbols: Arena::new(),
            symrefs: Arena::new(),
            types: Arena::new(),
            param_types: Arena::new(),
            datas: Arena::new(),
            arrays: Arena::new(),
            procs: Arena::new(),
            params: Arena::new(),
            exprs: Arena::new(),
            call_args: Arena::new(),
            stmts: Arena::new(),
            child_stmts: Arena::new(),
            root_scope: root_id,
            base_int: TypeId(0),
            base_void: TypeId(0),
            scope_stack: vec![root_id],
        };

        me.base_int = me.register_base_type("int", 8);
        me.base_void = me.register_base_type("void", 0);
        me
    }

    fn register_base_type(&mut self, name: &str, size_bytes: u32) -> TypeId {
        let name_id = self.strings.intern(name);
        let tid = TypeId(self.types.push(Type::new(TypeKind::Base { name: name_id, size_bytes })));
        self.push_symbol_unchecked(name_id, self.root_scope, SymbolPayload::Type(tid));
        tid
    }

    fn push_symbol_unchecked(&mut self, name: StringId, scope: ScopeId, payload: SymbolPayload) -> crate::ast::SymbolId {
        let id = crate::ast::SymbolId(self.symbols.push(Symbol { name, scope, payload }));
        self.scopes.get_mut(scope.0).num_symbols += 1;
        id
    }

    pub fn current_scope(&self) -> ScopeId {
        *self.scope_stack.last().expect("scope stack is never empty")
    }

    pub fn scope_depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Open a new child scope of the current one. Fatal if nesting would
    /// exceed [`MAX_SCOPE_DEPTH`].
    pub fn push_scope(&mut self, kind: ScopeKind, file: FileId, offset: u32) -> Result<ScopeId, CompileError> {
        if self.scope_stack.len() >= MAX_SCOPE_DEPTH {
            return Err(CompileError::Syntax {
                file,
                offset,
                expected: format!("scope nesting depth <= {MAX_SCOPE_DEPTH}"),
                found: format!("depth {}", self.scope_stack.len() + 1),
            });
        }
        let parent = self.current_scope();
        let first_symbol = self.symbols.len() as u32;
        let id = ScopeId(self.scopes.push(Scope::new_child(parent, kind, first_symbol)));
        self.scope_stack.push(id);
        Ok(id)
    }

    pub fn pop_scope(&mut self) {
        self.scope_stack.pop();
    }

    /// Declare a symbol in the current scope. Fatal if the name is already
    /// bound in that same scope's symbol run.
    pub fn declare_symbol(
        &mut self,
        name: StringId,
        payload: SymbolPayload,
        file: FileId,
        offset: u32,
    ) -> Result<crate::ast::SymbolId, CompileError> {
        let scope_id = self.current_scope();
        let scope = self.scopes.get(scope_id.0);
        let start = scope.first_symbol as usize;
        let end = start + scope.num_symbols as usize;
        for i in start..end {
            let existing = self.symbols.get(i as u32);
            if existing.name == name {
                return Err(CompileError::DuplicateSymbol {
                    file,
                    offset,
                    name: self.strings.resolve(name).to_string(),
                });
            }
        }
        Ok(self.push_symbol_unchecked(name, scope_id, payload))
    }
}

impl Default for Compilation {
    fn default() -> Self {
        Self::new()
    }
}
