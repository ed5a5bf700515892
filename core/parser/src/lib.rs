//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the Calc expression evaluator.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to turn an expression string into a number.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> f64
//!                                                          \--> AST --> f64
//!
//! SUPPORTED FEATURES:
//! - Non-negative integer and decimal literals: 42, 3.14
//! - Addition and subtraction, left associative: 1 - 2 - 3 = -4
//! - Spaces and tabs between tokens
//!
//! Everything else (*, /, parentheses, unary minus, letters) is rejected.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression};
pub use error::{CalcError, CalcResult, LexicalError, LexicalErrorKind, SyntaxError};
pub use lexer::{tokenize, Lexer};
pub use parser::{evaluate, parse, Parser, TokenSlice, TokenSource};
pub use token::{SpannedToken, Token, TokenKind};

/// Evaluates an expression string.
///
/// Every call builds its own lexer and parser, so a failed call leaves
/// nothing behind that could affect the next one.
pub fn calculate(input: &str) -> CalcResult<f64> {
    let result = Parser::new(Lexer::new(input))?.evaluate();

    match &result {
        Ok(value) => log::debug!("calculate({:?}) = {}", input, value),
        Err(err) => log::debug!("calculate({:?}) failed: {}", input, err),
    }

    result
}
