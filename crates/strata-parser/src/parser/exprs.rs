use strata_common::{CompileError, TokenKind};

use crate::ast::{BinopKind, CallArg, Expr, ExprId, ExprKind, UnopKind};

use super::Parser;

/// Binding power for a binary operator: `(left, right)`. A strictly greater
/// right power than left makes the operator right-associative; equal
/// powers make it left-associative.
fn infix_binding_power(kind: TokenKind) -> Option<(BinopKind, u8, u8)> {
    Some(match kind {
        TokenKind::Eq => (BinopKind::Assign, 2, 1), // right-associative, lowest
        TokenKind::EqEq => (BinopKind::Eq, 3, 4),
        TokenKind::Pipe => (BinopKind::BitOr, 5, 6),
        TokenKind::Amp => (BinopKind::BitAnd, 7, 8),
        TokenKind::Caret => (BinopKind::BitXor, 9, 10),
        TokenKind::Plus => (BinopKind::Add, 11, 12),
        TokenKind::Minus => (BinopKind::Sub, 11, 12),
        TokenKind::Star => (BinopKind::Mul, 13, 14),
        TokenKind::Slash => (BinopKind::Div, 13, 14),
        _ => return None,
    })
}

fn prefix_unop(kind: TokenKind) -> Option<UnopKind> {
    Some(match kind {
        TokenKind::Minus => UnopKind::Neg,
        TokenKind::Tilde => UnopKind::BitNot,
        TokenKind::Bang => UnopKind::LogNot,
        TokenKind::Amp => UnopKind::AddrOf,
        TokenKind::PlusPlus => UnopKind::PreInc,
        TokenKind::MinusMinus => UnopKind::PreDec,
        _ => return None,
    })
}

fn postfix_unop(kind: TokenKind) -> Option<UnopKind> {
    Some(match kind {
        TokenKind::PlusPlus => UnopKind::PostInc,
        TokenKind::MinusMinus => UnopKind::PostDec,
        _ => return None,
    })
}

pub fn parse_expr(p: &mut Parser) -> Result<ExprId, CompileError> {
    parse_expr_bp(p, 0)
}

/// `=`'s left side must be a name, member, or subscript expression — the
/// spec's grammar doesn't say, but a back-end would otherwise have no way
/// to reject `1 = 2`.
fn is_lvalue(p: &Parser, id: ExprId) -> bool {
    matches!(
        p.comp.exprs.get(id.0).kind,
        ExprKind::Symref(_) | ExprKind::Member { .. } | ExprKind::Subscript { .. }
    )
}

fn parse_expr_bp(p: &mut Parser, min_bp: u8) -> Result<ExprId, CompileError> {
    let mut lhs = parse_prefix(p)?;

    loop {
        let Some((op, left_bp, right_bp)) = infix_binding_power(p.peek_kind()) else {
            break;
        };
        if left_bp < min_bp {
            break;
        }
        let token = p.advance();
        if matches!(op, BinopKind::Assign) && !is_lvalue(p, lhs) {
            return Err(CompileError::Syntax {
                file: p.file(),
                offset: token.span.start,
                expected: "an lvalue (name, member, or subscript) to the left of '='".to_string(),
                found: "a non-lvalue expression".to_string(),
            });
        }
        let rhs = parse_expr_bp(p, right_bp)?;
        lhs = ExprId(p.comp.exprs.push(Expr::new(ExprKind::Binop {
            op,
            token,
            left: lhs,
            right: rhs,
        })));
    }

    Ok(lhs)
}

fn parse_prefix(p: &mut Parser) -> Result<ExprId, CompileError> {
    if let Some(op) = prefix_unop(p.peek_kind()) {
        let token = p.advance();
        let operand = parse_prefix(p)?;
        return Ok(ExprId(p.comp.exprs.push(Expr::new(ExprKind::Unop { op, token, operand }))));
    }
    parse_postfix(p)
}

fn parse_postfix(p: &mut Parser) -> Result<ExprId, CompileError> {
    let mut expr = parse_primary(p)?;
    loop {
        expr = match p.peek_kind() {
            TokenKind::LParen => parse_call(p, expr)?,
            TokenKind::LBracket => {
                p.advance();
                let index = parse_expr(p)?;
                p.expect(TokenKind::RBracket, "']'")?;
                ExprId(p.comp.exprs.push(Expr::new(ExprKind::Subscript { array: expr, index })))
            }
            TokenKind::Dot => {
                p.advance();
                let (name, _) = p.expect_word()?;
                ExprId(p.comp.exprs.push(Expr::new(ExprKind::Member { parent: expr, name })))
            }
            kind if postfix_unop(kind).is_some() => {
                let op = postfix_unop(kind).unwrap();
                let token = p.advance();
                ExprId(p.comp.exprs.push(Expr::new(ExprKind::Unop {
                    op,
                    token,
                    operand: expr,
                })))
            }
            _ => break,
        };
    }
    Ok(expr)
}

fn parse_call(p: &mut Parser, callee: ExprId) -> Result<ExprId, CompileError> {
    p.expect(TokenKind::LParen, "'('")?;
    let first_arg = p.comp.call_args.len() as u32;
    let mut nargs = 0u32;
    if !p.at(TokenKind::RParen) {
        loop {
            let arg = parse_expr(p)?;
            p.comp.call_args.push(CallArg {
                call: ExprId(0), // patched once the Call expr itself is allocated
                arg,
                rank: nargs,
            });
            nargs += 1;
            if p.at(TokenKind::Comma) {
                p.advance();
            } else {
                break;
            }
        }
    }
    p.expect(TokenKind::RParen, "')'")?;

    let call_expr = ExprId(p.comp.exprs.push(Expr::new(ExprKind::Call {
        callee,
        first_arg,
        nargs,
    })));
    for i in first_arg..(first_arg + nargs) {
        p.comp.call_args.get_mut(i).call = call_expr;
    }
    Ok(call_expr)
}

fn parse_primary(p: &mut Parser) -> Result<ExprId, CompileError> {
    match p.peek_kind() {
        TokenKind::Integer(_) => {
            let tok = p.advance();
            Ok(ExprId(p.comp.exprs.push(Expr::new(ExprKind::Literal(tok)))))
        }
        TokenKind::Word(name) => {
            let tok = p.advance();
            let symref = p.make_symref(name, tok);
            Ok(ExprId(p.comp.exprs.push(Expr::new(ExprKind::Symref(symref)))))
        }
        TokenKind::LParen => {
            p.advance();
            let inner = parse_expr(p)?;
            p.expect(TokenKind::RParen, "')'")?;
            Ok(inner)
        }
        other => Err(p.error_syntax("expression", other)),
    }
}
