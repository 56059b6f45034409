use strata_common::FileId;
use strata_parser::ast::{ExprKind, StmtKind, TypeKind};
use strata_parser::{Compilation, Parser, Program, TopLevelItem};

fn parse(source: &str) -> (Compilation, Program) {
    let mut comp = Compilation::new();
    let file = FileId(0);
    let tokens = strata_lexer::Lexer::tokenize(source, &mut comp.strings, file).expect("lex should succeed");
    let program = {
        let mut parser = Parser::new(tokens, file, &mut comp);
        parser.parse_program().expect("parse should succeed")
    };
    (comp, program)
}

fn item_tag(item: &TopLevelItem) -> &'static str {
    match item {
        TopLevelItem::Data(_) => "data",
        TopLevelItem::Array(_) => "array",
        TopLevelItem::Proc(_) => "proc",
        TopLevelItem::Entity(_) => "entity",
    }
}

#[test]
fn program_with_every_top_level_item_kind() {
    let (_comp, program) = parse(
        "entity widget int; \
         data w widget; \
         array items [int] int; \
         proc add(a int, b int) int { return a + b; }",
    );
    let tags: Vec<_> = program.items.iter().map(item_tag).collect();
    assert_eq!(tags, vec!["entity", "data", "array", "proc"]);
}

#[test]
fn proc_body_with_control_flow() {
    let source = "proc main() int { \
        data total int; \
        total = 0; \
        for (data i int; i; i = i + 1) { \
            if (i) { \
                total = total + i; \
            } \
            while (i) { \
                i = i - 1; \
            } \
        } \
        return total; \
    }";
    let (comp, program) = parse(source);
    let TopLevelItem::Proc(proc_id) = program.items[0] else {
        panic!("expected a proc as the only top-level item");
    };
    let proc = comp.procs.get(proc_id.0);
    let body = comp.stmts.get(proc.body.0);
    let StmtKind::Compound { num_children, .. } = body.kind else {
        panic!("expected the proc body to be a compound statement");
    };
    // data total; total = 0; for (...) { ... }; return total; = 4 statements
    assert_eq!(num_children, 4);
}

#[test]
fn nested_compound_statements_each_open_a_scope() {
    let (comp, _program) = parse("proc main() int { { data x int; { data y int; } } return 0; }");
    // root + proc-param scope + body compound + outer nested compound + inner nested compound = 5
    assert_eq!(comp.scopes.len(), 5);
}

#[test]
fn duplicate_parameter_name_is_fatal() {
    let mut comp = Compilation::new();
    let file = FileId(0);
    let tokens = strata_lexer::Lexer::tokenize("proc f(a int, a int) int { return a; }", &mut comp.strings, file).unwrap();
    let mut parser = Parser::new(tokens, file, &mut comp);
    assert!(parser.parse_program().is_err());
}

#[test]
fn array_type_is_built_from_index_and_value_types() {
    let (comp, program) = parse("array items [int] int;");
    let TopLevelItem::Array(array_id) = program.items[0] else {
        panic!("expected an array declaration");
    };
    let array = comp.arrays.get(array_id.0);
    let ty = comp.types.get(array.tp.0);
    assert!(matches!(ty.kind, TypeKind::Array { .. }));
}

#[test]
fn call_expression_carries_its_arguments_in_rank_order() {
    let source = "proc main() int { return add(1, 2 + 3); }";
    let (comp, program) = parse(source);
    let TopLevelItem::Proc(proc_id) = program.items[0] else {
        panic!("expected a proc");
    };
    let proc = comp.procs.get(proc_id.0);
    let body = comp.stmts.get(proc.body.0);
    let StmtKind::Compound { first_child, .. } = body.kind else {
        panic!("expected compound body");
    };
    let ret_stmt_id = comp.child_stmts.get(first_child).child;
    let StmtKind::Return { value } = comp.stmts.get(ret_stmt_id.0).kind else {
        panic!("expected a return statement");
    };
    let ExprKind::Call { nargs, .. } = comp.exprs.get(value.0).kind else {
        panic!("expected a call expression");
    };
    assert_eq!(nargs, 2);
}
