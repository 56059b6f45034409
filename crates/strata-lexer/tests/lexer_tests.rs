use strata_common::file::FileId;
use strata_common::intern::StringArena;
use strata_common::token::TokenKind;
use strata_lexer::Lexer;

fn tag(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::If => "if",
        TokenKind::While => "while",
        TokenKind::For => "for",
        TokenKind::Return => "return",
        TokenKind::Proc => "proc",
        TokenKind::Data => "data",
        TokenKind::Array => "array",
        TokenKind::Entity => "entity",
        TokenKind::LParen => "(",
        TokenKind::RParen => ")",
        TokenKind::LBracket => "[",
        TokenKind::RBracket => "]",
        TokenKind::LBrace => "{",
        TokenKind::RBrace => "}",
        TokenKind::Dot => ".",
        TokenKind::Comma => ",",
        TokenKind::Semicolon => ";",
        TokenKind::Colon => ":",
        TokenKind::Amp => "&",
        TokenKind::Pipe => "|",
        TokenKind::Caret => "^",
        TokenKind::Tilde => "~",
        TokenKind::Bang => "!",
        TokenKind::Eq => "=",
        TokenKind::EqEq => "==",
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::PlusPlus => "++",
        TokenKind::MinusMinus => "--",
        TokenKind::Word(_) => "word",
        TokenKind::Integer(_) => "int",
        TokenKind::Eof => "eof",
    }
}

fn tags(source: &str) -> Vec<&'static str> {
    let mut strings = StringArena::new();
    Lexer::tokenize(source, &mut strings, FileId(0))
        .expect("lex should succeed")
        .iter()
        .map(|tok| tag(&tok.kind))
        .collect()
}

#[test]
fn keywords() {
    assert_eq!(
        tags("if while for return proc data array entity"),
        vec!["if", "while", "for", "return", "proc", "data", "array", "entity", "eof"]
    );
}

#[test]
fn declaration_and_call() {
    assert_eq!(
        tags("data x int; main(x, y + 1);"),
        vec![
            "data", "word", "word", ";", "word", "(", "word", ",", "word", "+", "int", ")", ";", "eof",
        ]
    );
}

#[test]
fn proc_with_body() {
    assert_eq!(
        tags("proc add(a int, b int) int { return a + b; }"),
        vec![
            "proc", "word", "(", "word", "word", ",", "word", "word", ")", "word", "{", "return", "word", "+", "word",
            ";", "}", "eof",
        ]
    );
}

#[test]
fn array_and_reference_types() {
    assert_eq!(
        tags("array items [int] ^entry;"),
        vec!["array", "word", "[", "word", "]", "^", "word", ";", "eof"]
    );
}

#[test]
fn doubled_operators() {
    assert_eq!(
        tags("x++; --y; x == y; x = y;"),
        vec![
            "word", "++", ";", "--", "word", ";", "word", "==", "word", ";", "word", "=", "word", ";", "eof",
        ]
    );
}

#[test]
fn empty_input() {
    assert_eq!(tags(""), vec!["eof"]);
}

#[test]
fn word_spans_are_byte_exact() {
    let mut strings = StringArena::new();
    let tokens = Lexer::tokenize("data x int;", &mut strings, FileId(0)).expect("lex should succeed");
    assert_eq!(tokens[1].span, strata_common::Span::new(5, 6));
}
