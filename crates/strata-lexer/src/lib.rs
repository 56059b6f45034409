//! Strata lexer -- tokenizer for the Strata source language.

mod cursor;

use cursor::Cursor;
use strata_common::file::FileId;
use strata_common::intern::StringArena;
use strata_common::token::{keyword_from_str, Token, TokenKind};
use strata_common::CompileError;

/// The Strata lexer. Converts source text into a stream of tokens.
///
/// Wraps a [`Cursor`] for byte-level iteration. Words are interned as they
/// are scanned so downstream phases never re-slice the source text.
pub struct Lexer<'src, 'strings> {
    cursor: Cursor<'src>,
    strings: &'strings mut StringArena,
    file: FileId,
    emitted_eof: bool,
}

impl<'src, 'strings> Lexer<'src, 'strings> {
    pub fn new(source: &'src str, strings: &'strings mut StringArena, file: FileId) -> Self {
        Self {
            cursor: Cursor::new(source),
            strings,
            file,
            emitted_eof: false,
        }
    }

    /// Tokenize all of `source`, including the trailing `Eof` token.
    pub fn tokenize(
        source: &str,
        strings: &mut StringArena,
        file: FileId,
    ) -> Result<Vec<Token>, CompileError> {
        let mut lexer = Lexer::new(source, strings, file);
        let mut tokens = Vec::new();
        loop {
            match lexer.next() {
                Some(Ok(tok)) => {
                    let is_eof = tok.kind == TokenKind::Eof;
                    tokens.push(tok);
                    if is_eof {
                        break;
                    }
                }
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| c.is_whitespace());
    }

    fn single(&mut self, kind: TokenKind, start: u32) -> Token {
        self.cursor.advance();
        Token::new(kind, start, self.cursor.pos())
    }

    fn lex_word(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let text = self.cursor.slice(start, self.cursor.pos());
        if let Some(kw) = keyword_from_str(text) {
            Token::new(kw, start, self.cursor.pos())
        } else {
            let id = self.strings.intern(text);
            Token::new(TokenKind::Word(id), start, self.cursor.pos())
        }
    }

    fn lex_integer(&mut self, start: u32) -> Result<Token, CompileError> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let text = self.cursor.slice(start, self.cursor.pos());
        let value: i64 = text.parse().map_err(|_| CompileError::Lexical {
            file: self.file,
            offset: start,
            message: format!("integer literal '{text}' does not fit in 64 bits"),
        })?;
        Ok(Token::new(TokenKind::Integer(value), start, self.cursor.pos()))
    }

    fn lex_doubling(&mut self, start: u32, single: TokenKind, doubled: TokenKind, ch: char) -> Token {
        self.cursor.advance();
        if self.cursor.peek() == Some(ch) {
            self.cursor.advance();
            Token::new(doubled, start, self.cursor.pos())
        } else {
            Token::new(single, start, self.cursor.pos())
        }
    }

    fn lex_eq(&mut self, start: u32) -> Token {
        self.cursor.advance();
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            Token::new(TokenKind::EqEq, start, self.cursor.pos())
        } else {
            Token::new(TokenKind::Eq, start, self.cursor.pos())
        }
    }

    fn next_token(&mut self) -> Option<Result<Token, CompileError>> {
        if self.emitted_eof {
            return None;
        }

        self.skip_whitespace();
        let start = self.cursor.pos();

        let Some(c) = self.cursor.peek() else {
            self.emitted_eof = true;
            return Some(Ok(Token::new(TokenKind::Eof, start, start)));
        };

        let tok = match c {
            '(' => self.single(TokenKind::LParen, start),
            ')' => self.single(TokenKind::RParen, start),
            '[' => self.single(TokenKind::LBracket, start),
            ']' => self.single(TokenKind::RBracket, start),
            '{' => self.single(TokenKind::LBrace, start),
            '}' => self.single(TokenKind::RBrace, start),
            '.' => self.single(TokenKind::Dot, start),
            ',' => self.single(TokenKind::Comma, start),
            ';' => self.single(TokenKind::Semicolon, start),
            ':' => self.single(TokenKind::Colon, start),
            '&' => self.single(TokenKind::Amp, start),
            '|' => self.single(TokenKind::Pipe, start),
            '^' => self.single(TokenKind::Caret, start),
            '~' => self.single(TokenKind::Tilde, start),
            '!' => self.single(TokenKind::Bang, start),
            '*' => self.single(TokenKind::Star, start),
            '/' => self.single(TokenKind::Slash, start),
            '=' => self.lex_eq(start),
            '+' => self.lex_doubling(start, TokenKind::Plus, TokenKind::PlusPlus, '+'),
            '-' => self.lex_doubling(start, TokenKind::Minus, TokenKind::MinusMinus, '-'),
            c if c.is_ascii_digit() => match self.lex_integer(start) {
                Ok(tok) => tok,
                Err(e) => return Some(Err(e)),
            },
            c if c.is_ascii_alphabetic() || c == '_' => self.lex_word(start),
            other => {
                return Some(Err(CompileError::Lexical {
                    file: self.file,
                    offset: start,
                    message: format!("unrecognized character '{other}'"),
                }))
            }
        };

        Some(Ok(tok))
    }
}

impl<'src, 'strings> Iterator for Lexer<'src, 'strings> {
    type Item = Result<Token, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Vec<Token> {
        let mut strings = StringArena::new();
        Lexer::tokenize(source, &mut strings, FileId(0)).expect("lex should succeed")
    }

    #[test]
    fn empty_input_is_just_eof() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn keywords_are_recognized() {
        let tokens = tokenize("if while for return proc data array entity");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::If,
                TokenKind::While,
                TokenKind::For,
                TokenKind::Return,
                TokenKind::Proc,
                TokenKind::Data,
                TokenKind::Array,
                TokenKind::Entity,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn punctuation_set() {
        let tokens = tokenize("(){}[].,;:&|^~!");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Dot,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Amp,
                TokenKind::Pipe,
                TokenKind::Caret,
                TokenKind::Tilde,
                TokenKind::Bang,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn doubling_operators() {
        let tokens = tokenize("+ ++ - -- = ==");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Plus,
                TokenKind::PlusPlus,
                TokenKind::Minus,
                TokenKind::MinusMinus,
                TokenKind::Eq,
                TokenKind::EqEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn triple_plus_is_doubled_then_single() {
        let tokens = tokenize("+++");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::PlusPlus, TokenKind::Plus, TokenKind::Eof]);
    }

    #[test]
    fn integer_literal() {
        let tokens = tokenize("42");
        assert_eq!(tokens[0].kind, TokenKind::Integer(42));
    }

    #[test]
    fn large_integer_within_i64_range() {
        let tokens = tokenize("9223372036854775807");
        assert_eq!(tokens[0].kind, TokenKind::Integer(i64::MAX));
    }

    #[test]
    fn integer_overflow_is_fatal() {
        let mut strings = StringArena::new();
        let err = Lexer::tokenize("99999999999999999999", &mut strings, FileId(0));
        assert!(matches!(err, Err(CompileError::Lexical { .. })));
    }

    #[test]
    fn identifiers_intern_to_the_same_word() {
        let mut strings = StringArena::new();
        let tokens = Lexer::tokenize("foo foo bar", &mut strings, FileId(0)).unwrap();
        let TokenKind::Word(a) = tokens[0].kind else { panic!("expected word") };
        let TokenKind::Word(b) = tokens[1].kind else { panic!("expected word") };
        let TokenKind::Word(c) = tokens[2].kind else { panic!("expected word") };
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(strings.resolve(a), "foo");
        assert_eq!(strings.resolve(c), "bar");
    }

    #[test]
    fn non_ascii_letter_cannot_start_or_continue_a_word() {
        // Identifiers are `[A-Za-z_][A-Za-z0-9_]*`, not Unicode-aware.
        let mut strings = StringArena::new();
        let err = Lexer::tokenize("data caf\u{00E9} int;", &mut strings, FileId(0));
        assert!(matches!(err, Err(CompileError::Lexical { .. })));
    }

    #[test]
    fn unrecognized_byte_is_fatal() {
        let mut strings = StringArena::new();
        let err = Lexer::tokenize("data x @ y;", &mut strings, FileId(0));
        assert!(matches!(err, Err(CompileError::Lexical { .. })));
    }

    #[test]
    fn spans_are_byte_accurate() {
        let tokens = tokenize("proc main");
        assert_eq!(tokens[0].span, strata_common::Span::new(0, 4));
        assert_eq!(tokens[1].span, strata_common::Span::new(5, 9));
    }

    #[test]
    fn full_declaration_tokenizes() {
        let tokens = tokenize("data x int; proc main() int { return 0; }");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Data));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Proc));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Return));
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}
