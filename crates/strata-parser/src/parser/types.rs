use strata_common::{CompileError, TokenKind};

use crate::ast::{Type, TypeId, TypeKind};

use super::Parser;

/// `TYPE ::= '^'? IDENT`
///
/// Every named-type occurrence defers resolution through a `Reference`
/// type, since the name may forward-reference a declaration that appears
/// later in the same scope (see scenario S2 in the testable-properties
/// section).
pub fn parse_type_expr(p: &mut Parser) -> Result<TypeId, CompileError> {
    let is_indirect = if p.at(TokenKind::Caret) {
        p.advance();
        true
    } else {
        false
    };
    let (name, tok) = p.expect_word()?;
    let symref = p.make_symref(name, tok);
    Ok(TypeId(p.comp.types.push(Type::new(TypeKind::Reference {
        symref,
        is_indirect,
        resolved: None,
    }))))
}
