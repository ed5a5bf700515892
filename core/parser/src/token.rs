//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

use serde::Serialize;

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum Token {
    // Literals
    Number(f64),

    // Operators
    Plus,
    Minus,

    // Special
    EOF,
}

impl Token {
    /// Returns the payload-free kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::EOF => TokenKind::EOF,
        }
    }
}

/// Token discriminant without the numeric payload.
/// Used in syntax errors to describe what was expected.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    EOF,
}

/// A token together with the character index where its lexeme starts.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

impl SpannedToken {
    pub fn new(token: Token, position: usize) -> Self {
        SpannedToken { token, position }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::EOF => write!(f, "end of input"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::EOF => write!(f, "end of input"),
        }
    }
}
