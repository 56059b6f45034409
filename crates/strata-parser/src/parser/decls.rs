use strata_common::{CompileError, TokenKind};

use crate::ast::{Array, ArrayId, Data, DataId, Param, ParamId, ParamType, Proc, ProcId, ScopeKind, SymbolId, SymbolPayload, Type, TypeId, TypeKind};

use super::types::parse_type_expr;
use super::{stmts, Parser, TopLevelItem};

fn patch_symbol_payload(p: &mut Parser, sym: SymbolId, payload: SymbolPayload) {
    p.comp.symbols.get_mut(sym.0).payload = payload;
}

pub fn parse_top_level_item(p: &mut Parser) -> Result<TopLevelItem, CompileError> {
    match p.peek_kind() {
        TokenKind::Data => Ok(TopLevelItem::Data(parse_data_decl(p)?)),
        TokenKind::Array => Ok(TopLevelItem::Array(parse_array_decl(p)?)),
        TokenKind::Proc => Ok(TopLevelItem::Proc(parse_proc_decl(p)?)),
        TokenKind::Entity => Ok(TopLevelItem::Entity(parse_entity_decl(p)?)),
        other => Err(p.error_syntax("a top-level declaration", other)),
    }
}

/// `data NAME TYPE ;`
pub fn parse_data_decl(p: &mut Parser) -> Result<DataId, CompileError> {
    let id = parse_data_decl_no_semi(p)?;
    p.expect(TokenKind::Semicolon, "';'")?;
    Ok(id)
}

pub fn parse_data_decl_no_semi(p: &mut Parser) -> Result<DataId, CompileError> {
    p.expect(TokenKind::Data, "'data'")?;
    let (name, tok) = p.expect_word()?;
    let tp = parse_type_expr(p)?;

    let sym = p.comp.declare_symbol(name, SymbolPayload::Data(DataId(0)), p.file(), tok.span.start)?;
    let id = DataId(p.comp.datas.push(Data { name, sym, tp }));
    patch_symbol_payload(p, sym, SymbolPayload::Data(id));
    Ok(id)
}

/// `array NAME [ IDX_TYPE ] VALUE_TYPE ;`
pub fn parse_array_decl(p: &mut Parser) -> Result<ArrayId, CompileError> {
    let id = parse_array_decl_no_semi(p)?;
    p.expect(TokenKind::Semicolon, "';'")?;
    Ok(id)
}

pub fn parse_array_decl_no_semi(p: &mut Parser) -> Result<ArrayId, CompileError> {
    p.expect(TokenKind::Array, "'array'")?;
    let (name, tok) = p.expect_word()?;
    p.expect(TokenKind::LBracket, "'['")?;
    let index_type = parse_type_expr(p)?;
    p.expect(TokenKind::RBracket, "']'")?;
    let value_type = parse_type_expr(p)?;

    let array_tp = TypeId(p.comp.types.push(Type::new(TypeKind::Array { index_type, value_type })));
    let sym = p.comp.declare_symbol(name, SymbolPayload::Array(ArrayId(0)), p.file(), tok.span.start)?;
    let id = ArrayId(p.comp.arrays.push(Array { name, sym, tp: array_tp }));
    patch_symbol_payload(p, sym, SymbolPayload::Array(id));
    Ok(id)
}

/// `entity NAME TYPE ;`, global scope only.
pub fn parse_entity_decl(p: &mut Parser) -> Result<TypeId, CompileError> {
    let kw = p.expect(TokenKind::Entity, "'entity'")?;
    let (name, tok) = p.expect_word()?;
    let inner = parse_type_expr(p)?;
    p.expect(TokenKind::Semicolon, "';'")?;

    if p.comp.current_scope() != p.comp.root_scope {
        return Err(CompileError::Syntax {
            file: p.file(),
            offset: kw.span.start,
            expected: "entity declaration at global scope".to_string(),
            found: "nested entity declaration".to_string(),
        });
    }

    let tid = TypeId(p.comp.types.push(Type::new(TypeKind::Entity { name, inner })));
    p.comp.declare_symbol(name, SymbolPayload::Type(tid), p.file(), tok.span.start)?;
    Ok(tid)
}

/// `proc NAME ( (NAME TYPE)* ) RET_TYPE { STMTS }`
pub fn parse_proc_decl(p: &mut Parser) -> Result<ProcId, CompileError> {
    let kw = p.expect(TokenKind::Proc, "'proc'")?;
    let (name, tok) = p.expect_word()?;

    // Declared in the *enclosing* scope, before the proc's own scope opens,
    // so a recursive call inside the body resolves against a symbol that
    // already exists once the later resolution phase runs.
    let sym = p.comp.declare_symbol(name, SymbolPayload::Proc(ProcId(0)), p.file(), tok.span.start)?;

    p.expect(TokenKind::LParen, "'('")?;
    let proc_scope = p.comp.push_scope(ScopeKind::Proc, p.file(), kw.span.start)?;

    let first_param = p.comp.params.len() as u32;
    let first_param_type = p.comp.param_types.len() as u32;
    let mut nparams = 0u32;

    if !p.at(TokenKind::RParen) {
        loop {
            let (pname, ptok) = p.expect_word()?;
            let ptp = parse_type_expr(p)?;
            let psym = p.comp.declare_symbol(pname, SymbolPayload::Param(ParamId(0)), p.file(), ptok.span.start)?;
            let param_id = ParamId(p.comp.params.push(Param {
                proc: ProcId(0),
                sym: psym,
                tp: ptp,
                rank: nparams,
            }));
            patch_symbol_payload(p, psym, SymbolPayload::Param(param_id));
            p.comp.param_types.push(ParamType {
                proc_type: TypeId(0),
                rank: nparams,
                ty: ptp,
            });
            nparams += 1;
            if p.at(TokenKind::Comma) {
                p.advance();
            } else {
                break;
            }
        }
    }
    p.expect(TokenKind::RParen, "')'")?;
    let return_type = parse_type_expr(p)?;

    let proc_tp = TypeId(p.comp.types.push(Type::new(TypeKind::Proc {
        return_type,
        nargs: nparams,
        first_param_type,
    })));
    for i in first_param_type..(first_param_type + nparams) {
        p.comp.param_types.get_mut(i).proc_type = proc_tp;
    }

    let body = stmts::parse_compound(p)?;
    p.comp.pop_scope();

    let id = ProcId(p.comp.procs.push(Proc {
        name,
        sym,
        tp: proc_tp,
        scope: proc_scope,
        first_param,
        nparams,
        body,
    }));
    patch_symbol_payload(p, sym, SymbolPayload::Proc(id));
    for i in first_param..(first_param + nparams) {
        p.comp.params.get_mut(i).proc = id;
    }
    Ok(id)
}
