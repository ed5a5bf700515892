//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error types raised while tokenizing and evaluating expressions.
//! CONTEXT: Lexical errors come from the lexer, syntax errors from the parser.
//! Both abort evaluation at the first violation and surface as CalcError.

use crate::token::TokenKind;
use thiserror::Error;

/// What went wrong while scanning a lexeme.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LexicalErrorKind {
    /// A character outside the token alphabet.
    UnrecognizedCharacter,
    /// A '.' with no digit before it, e.g. ".5".
    LeadingDot,
    /// A '.' with no digit after it, e.g. "1.".
    TrailingDot,
    /// A second '.' inside one literal, e.g. "1.2.3".
    SecondDot,
}

impl std::fmt::Display for LexicalErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexicalErrorKind::UnrecognizedCharacter => write!(f, "unrecognized character"),
            LexicalErrorKind::LeadingDot => write!(f, "number must start with a digit"),
            LexicalErrorKind::TrailingDot => write!(f, "expected digit after decimal point"),
            LexicalErrorKind::SecondDot => write!(f, "number has more than one decimal point"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Clone)]
#[error("Lexical error at position {position}: {kind} {character:?}")]
pub struct LexicalError {
    /// 0-based character index of the offending character.
    pub position: usize,
    pub character: char,
    pub kind: LexicalErrorKind,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, position: usize, character: char) -> Self {
        LexicalError {
            position,
            character,
            kind,
        }
    }
}

#[derive(Error, Debug, PartialEq, Clone)]
#[error("Syntax error at position {position}: expected {}, found {found}", describe_expected(.expected))]
pub struct SyntaxError {
    /// Position of the unexpected token.
    pub position: usize,
    pub expected: Vec<TokenKind>,
    pub found: TokenKind,
}

impl SyntaxError {
    pub fn new(position: usize, expected: &[TokenKind], found: TokenKind) -> Self {
        SyntaxError {
            position,
            expected: expected.to_vec(),
            found,
        }
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        kinds => {
            let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
            format!("one of {}", names.join(", "))
        }
    }
}

/// Any failure to evaluate an expression.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum CalcError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CalcError {
    /// Short machine-readable name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Lexical(_) => "lexical",
            CalcError::Syntax(_) => "syntax",
        }
    }

    /// Character index the error points at.
    pub fn position(&self) -> usize {
        match self {
            CalcError::Lexical(e) => e.position,
            CalcError::Syntax(e) => e.position,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
