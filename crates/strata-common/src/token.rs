use serde::Serialize;

use crate::intern::StringId;
use crate::span::Span;

/// A token produced by the Strata lexer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }
}

/// The complete token vocabulary of the Strata source language.
///
/// Word and integer tokens carry their interned/parsed payload inline so
/// downstream phases never need to re-slice the source text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TokenKind {
    // ── Keywords ───────────────────────────────────────────────────────
    If,
    While,
    For,
    Return,
    Proc,
    Data,
    Array,
    Entity,

    // ── Punctuation / delimiters ──────────────────────────────────────
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Dot,
    Comma,
    Semicolon,
    Colon,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,

    // ── Operators ──────────────────────────────────────────────────────
    Eq,
    EqEq,
    Plus,
    Minus,
    Star,
    Slash,
    PlusPlus,
    MinusMinus,

    // ── Literals / identifiers ─────────────────────────────────────────
    Word(StringId),
    Integer(i64),

    // ── Special ────────────────────────────────────────────────────────
    Eof,
}

/// Look up a keyword from its string representation.
pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "if" => Some(TokenKind::If),
        "while" => Some(TokenKind::While),
        "for" => Some(TokenKind::For),
        "return" => Some(TokenKind::Return),
        "proc" => Some(TokenKind::Proc),
        "data" => Some(TokenKind::Data),
        "array" => Some(TokenKind::Array),
        "entity" => Some(TokenKind::Entity),
        _ => None,
    }
}
