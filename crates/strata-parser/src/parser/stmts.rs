use strata_common::{CompileError, TokenKind};

use crate::ast::{ChildStmt, ScopeKind, Stmt, StmtId, StmtKind};

use super::decls;
use super::exprs::parse_expr;
use super::Parser;

fn alloc(p: &mut Parser, kind: StmtKind) -> StmtId {
    StmtId(p.comp.stmts.push(Stmt::new(kind)))
}

pub fn parse_stmt(p: &mut Parser) -> Result<StmtId, CompileError> {
    match p.peek_kind() {
        TokenKind::If => parse_if(p),
        TokenKind::While => parse_while(p),
        TokenKind::For => parse_for(p),
        TokenKind::Return => parse_return(p),
        TokenKind::LBrace => parse_compound(p),
        TokenKind::Data => {
            let id = decls::parse_data_decl(p)?;
            Ok(alloc(p, StmtKind::Data(id)))
        }
        TokenKind::Array => {
            let id = decls::parse_array_decl(p)?;
            Ok(alloc(p, StmtKind::Array(id)))
        }
        _ => {
            let expr = parse_expr(p)?;
            p.expect(TokenKind::Semicolon, "';'")?;
            Ok(alloc(p, StmtKind::Expr { expr }))
        }
    }
}

fn parse_if(p: &mut Parser) -> Result<StmtId, CompileError> {
    p.advance();
    p.expect(TokenKind::LParen, "'('")?;
    let cond = parse_expr(p)?;
    p.expect(TokenKind::RParen, "')'")?;
    let body = parse_stmt(p)?;
    Ok(alloc(p, StmtKind::If { cond, body }))
}

fn parse_while(p: &mut Parser) -> Result<StmtId, CompileError> {
    p.advance();
    p.expect(TokenKind::LParen, "'('")?;
    let cond = parse_expr(p)?;
    p.expect(TokenKind::RParen, "')'")?;
    let body = parse_stmt(p)?;
    Ok(alloc(p, StmtKind::While { cond, body }))
}

/// `for ( CLAUSE ; EXPR ; CLAUSE ) STMT`, where each `CLAUSE` is a bare data
/// declaration, array declaration, or expression — the `;`/`)` delimiters
/// belong to the `for` itself, not to the clause.
fn parse_for(p: &mut Parser) -> Result<StmtId, CompileError> {
    p.advance();
    p.expect(TokenKind::LParen, "'('")?;
    let init = parse_for_clause(p)?;
    p.expect(TokenKind::Semicolon, "';'")?;
    let cond = parse_expr(p)?;
    p.expect(TokenKind::Semicolon, "';'")?;
    let update = parse_for_clause(p)?;
    p.expect(TokenKind::RParen, "')'")?;
    let body = parse_stmt(p)?;
    Ok(alloc(p, StmtKind::For { init, cond, update, body }))
}

fn parse_for_clause(p: &mut Parser) -> Result<StmtId, CompileError> {
    match p.peek_kind() {
        TokenKind::Data => {
            let id = decls::parse_data_decl_no_semi(p)?;
            Ok(alloc(p, StmtKind::Data(id)))
        }
        TokenKind::Array => {
            let id = decls::parse_array_decl_no_semi(p)?;
            Ok(alloc(p, StmtKind::Array(id)))
        }
        _ => {
            let expr = parse_expr(p)?;
            Ok(alloc(p, StmtKind::Expr { expr }))
        }
    }
}

fn parse_return(p: &mut Parser) -> Result<StmtId, CompileError> {
    p.advance();
    let value = parse_expr(p)?;
    p.expect(TokenKind::Semicolon, "';'")?;
    Ok(alloc(p, StmtKind::Return { value }))
}

/// `{ STMT* }`. Opens its own scope, so every compound statement — not just
/// a proc body — is its own block for the purposes of name resolution.
pub fn parse_compound(p: &mut Parser) -> Result<StmtId, CompileError> {
    let brace = p.expect(TokenKind::LBrace, "'{'")?;
    p.comp.push_scope(ScopeKind::Proc, p.file(), brace.span.start)?;

    let stmt_id = alloc(p, StmtKind::Compound { first_child: 0, num_children: 0 });
    let first_child = p.comp.child_stmts.len() as u32;
    let mut num_children = 0u32;

    while !p.at(TokenKind::RBrace) {
        let child = parse_stmt(p)?;
        p.comp.child_stmts.push(ChildStmt {
            parent: stmt_id,
            child,
            rank: num_children,
        });
        num_children += 1;
    }
    p.expect(TokenKind::RBrace, "'}'")?;
    p.comp.pop_scope();

    p.comp.stmts.get_mut(stmt_id.0).kind = StmtKind::Compound { first_child, num_children };
    Ok(stmt_id)
}
