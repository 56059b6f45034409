pub mod decls;
pub mod exprs;
pub mod stmts;
pub mod types;

use strata_common::{CompileError, FileId, StringId, Token, TokenKind};

use crate::ast::{ArrayId, DataId, ProcId, SymrefId, TypeId};
use crate::compilation::Compilation;

/// A top-level declaration, in source order.
#[derive(Debug, Clone, Copy)]
pub enum TopLevelItem {
    Data(DataId),
    Array(ArrayId),
    Proc(ProcId),
    Entity(TypeId),
}

pub struct Program {
    pub items: Vec<TopLevelItem>,
}

/// Recursive-descent / Pratt parser. Holds the token stream for one file and
/// a one-token lookahead via `pos`; everything it builds is allocated
/// directly into the shared [`Compilation`] arenas.
pub struct Parser<'c> {
    tokens: Vec<Token>,
    pos: usize,
    file: FileId,
    pub comp: &'c mut Compilation,
}

impl<'c> Parser<'c> {
    pub fn new(tokens: Vec<Token>, file: FileId, comp: &'c mut Compilation) -> Self {
        assert!(!tokens.is_empty(), "token stream must end with Eof");
        Self { tokens, pos: 0, file, comp }
    }

    pub fn file(&self) -> FileId {
        self.file
    }

    pub fn peek(&self) -> Token {
        self.tokens[self.pos]
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub fn offset(&self) -> u32 {
        self.peek().span.start
    }

    pub fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub fn at_eof(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    pub fn error_syntax(&self, expected: impl Into<String>, found: TokenKind) -> CompileError {
        CompileError::Syntax {
            file: self.file,
            offset: self.offset(),
            expected: expected.into(),
            found: format!("{found:?}"),
        }
    }

    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, CompileError> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_syntax(expected, self.peek_kind()))
        }
    }

    pub fn expect_word(&mut self) -> Result<(StringId, Token), CompileError> {
        let tok = self.peek();
        if let TokenKind::Word(id) = tok.kind {
            self.advance();
            Ok((id, tok))
        } else {
            Err(self.error_syntax("identifier", tok.kind))
        }
    }

    /// Allocate a deferred name lookup in the current scope.
    pub fn make_symref(&mut self, name: StringId, token: Token) -> SymrefId {
        let scope = self.comp.current_scope();
        SymrefId(self.comp.symrefs.push(crate::ast::Symref::new(name, scope, self.file, token)))
    }

    pub fn parse_program(&mut self) -> Result<Program, CompileError> {
        let mut items = Vec::new();
        while !self.at_eof() {
            items.push(decls::parse_top_level_item(self)?);
        }
        Ok(Program { items })
    }
}

/// Lex and parse a single file into the shared compilation, returning its
/// top-level items in source order.
pub fn parse_file(comp: &mut Compilation, file: FileId) -> Result<Program, CompileError> {
    let source = comp.files.get(file).source().to_string();
    let tokens = strata_lexer::Lexer::tokenize(&source, &mut comp.strings, file)?;
    let mut parser = Parser::new(tokens, file, comp);
    parser.parse_program()
}
