//! Scope-chain symbol resolution (walk a symref's scope up to the root,
//! matching by name in each scope's dense symbol run) and binding of
//! `TypeKind::Reference` nodes once their symref resolves.

use strata_common::CompileError;
use strata_parser::ast::{SymbolId, SymbolPayload, TypeKind};
use strata_parser::Compilation;

pub fn resolve_all(comp: &mut Compilation) -> Result<(), CompileError> {
    for idx in 0..comp.symrefs.len() as u32 {
        resolve_symref(comp, idx)?;
    }
    for idx in 0..comp.types.len() as u32 {
        bind_reference_type(comp, idx)?;
    }
    Ok(())
}

fn resolve_symref(comp: &mut Compilation, idx: u32) -> Result<(), CompileError> {
    let symref = *comp.symrefs.get(idx);
    let mut scope_id = symref.ref_scope;

    loop {
        let scope = comp.scopes.get(scope_id.0);
        let start = scope.first_symbol;
        let end = start + scope.num_symbols;
        for i in start..end {
            if comp.symbols.get(i).name == symref.name {
                comp.symrefs.get_mut(idx).sym = Some(SymbolId(i));
                return Ok(());
            }
        }
        if scope_id == comp.root_scope {
            break;
        }
        scope_id = scope.parent;
    }

    Err(CompileError::UnresolvedSymbol {
        file: symref.file,
        offset: symref.token.span.start,
        name: comp.strings.resolve(symref.name).to_string(),
    })
}

/// Every named-type occurrence is a `Reference`; once its symref has a
/// symbol, check that the symbol names a type and bind `resolved`.
fn bind_reference_type(comp: &mut Compilation, idx: u32) -> Result<(), CompileError> {
    let (symref_id, is_indirect) = match comp.types.get(idx).kind {
        TypeKind::Reference { symref, is_indirect, .. } => (symref, is_indirect),
        _ => return Ok(()),
    };

    let symref = *comp.symrefs.get(symref_id.0);
    let sym_id = symref.sym.expect("resolve_symref runs before bind_reference_type");
    let symbol = *comp.symbols.get(sym_id.0);

    let target = match symbol.payload {
        SymbolPayload::Type(tid) => tid,
        other => {
            return Err(CompileError::KindMismatch {
                file: symref.file,
                offset: symref.token.span.start,
                name: comp.strings.resolve(symref.name).to_string(),
                expected_kind: "type".to_string(),
                found_kind: other.kind_name().to_string(),
            })
        }
    };

    comp.types.get_mut(idx).kind = TypeKind::Reference {
        symref: symref_id,
        is_indirect,
        resolved: Some(target),
    };
    Ok(())
}
