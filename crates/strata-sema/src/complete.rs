//! Type completion: a monotonic false -> true fixed point over every type
//! in the arena. Completeness never regresses, so repeatedly scanning until
//! a full pass makes no change is guaranteed to converge, and whatever is
//! still incomplete at that point is stuck: either it bottoms out in a
//! `Reference` that never resolved, or it's part of a cycle with no
//! complete type grounding it.

use strata_common::{CompileError, FileId};
use strata_parser::ast::TypeKind;
use strata_parser::Compilation;

pub fn complete_all(comp: &mut Compilation) -> Result<(), CompileError> {
    loop {
        let mut changed = false;
        for idx in 0..comp.types.len() as u32 {
            if comp.types.get(idx).is_complete {
                continue;
            }
            if type_is_complete_now(comp, idx) {
                comp.types.get_mut(idx).is_complete = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for idx in 0..comp.types.len() as u32 {
        if !comp.types.get(idx).is_complete {
            return Err(incomplete_type_error(comp, idx));
        }
    }
    Ok(())
}

fn type_is_complete_now(comp: &Compilation, idx: u32) -> bool {
    match comp.types.get(idx).kind {
        TypeKind::Base { .. } => true,
        TypeKind::Entity { inner, .. } => comp.types.get(inner.0).is_complete,
        TypeKind::Array { index_type, value_type } => {
            comp.types.get(index_type.0).is_complete && comp.types.get(value_type.0).is_complete
        }
        TypeKind::Proc { return_type, nargs, first_param_type } => {
            comp.types.get(return_type.0).is_complete
                && (first_param_type..first_param_type + nargs)
                    .all(|i| comp.types.get(comp.param_types.get(i).ty.0).is_complete)
        }
        // Completion is uniform regardless of `is_indirect`: a pointer to an
        // incomplete type is exactly as incomplete as a plain alias to one.
        // This is also why a self-referential `^` declaration isn't special
        // cased at parse time — an ungrounded self-cycle simply never
        // reaches a `true` fixed point here, whether or not a `^` was
        // written.
        TypeKind::Reference { resolved, .. } => match resolved {
            Some(target) => comp.types.get(target.0).is_complete,
            None => false,
        },
    }
}

fn incomplete_type_error(comp: &Compilation, idx: u32) -> CompileError {
    match comp.types.get(idx).kind {
        TypeKind::Entity { name, .. } => CompileError::IncompleteType {
            file: FileId(0),
            offset: 0,
            name: comp.strings.resolve(name).to_string(),
        },
        TypeKind::Reference { symref, .. } => {
            let s = comp.symrefs.get(symref.0);
            CompileError::IncompleteType {
                file: s.file,
                offset: s.token.span.start,
                name: comp.strings.resolve(s.name).to_string(),
            }
        }
        _ => CompileError::IncompleteType {
            file: FileId(0),
            offset: 0,
            name: "<type>".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_all;
    use std::io::Write;
    use strata_common::FileId;
    use strata_parser::parse_file;

    fn compile(source: &str) -> (Compilation, Result<(), CompileError>) {
        let mut comp = Compilation::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{source}").unwrap();
        let file_id: FileId = comp.files.load(file.path(), &mut comp.strings).unwrap();
        parse_file(&mut comp, file_id).unwrap();
        resolve_all(&mut comp).unwrap();
        let result = complete_all(&mut comp);
        (comp, result)
    }

    #[test]
    fn base_and_plain_entity_are_complete() {
        let (_, result) = compile("entity e int;");
        assert!(result.is_ok());
    }

    #[test]
    fn forward_reference_completes_on_a_later_iteration() {
        // S2: data a ^b; entity b int;  -- `a`'s type can't complete on the
        // first pass because `b` isn't declared yet when `a`'s Reference is
        // allocated; it must wait for a second fixed-point sweep.
        let (_, result) = compile("data a ^b; entity b int;");
        assert!(result.is_ok());
    }

    #[test]
    fn ungrounded_self_reference_never_completes() {
        let (_, result) = compile("entity e e;");
        assert!(matches!(result, Err(CompileError::IncompleteType { .. })));
    }

    #[test]
    fn array_of_incomplete_type_is_incomplete() {
        let (_, result) = compile("entity e e; array items [int] e;");
        assert!(matches!(result, Err(CompileError::IncompleteType { .. })));
    }

    #[test]
    fn proc_with_complete_signature_is_complete() {
        let (_, result) = compile("proc add(a int, b int) int { return a + b; }");
        assert!(result.is_ok());
    }
}
