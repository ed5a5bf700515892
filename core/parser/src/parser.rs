//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Iterative parser that folds a stream of Tokens into a number,
//! or optionally into an AST.
//! CONTEXT: This is the second stage of the pipeline. It pulls tokens one at
//! a time from a TokenSource (the Lexer, or an already lexed slice) and
//! stops at the first token that breaks the grammar.
//!
//! GRAMMAR:
//!   expression --> NUMBER ( ("+" | "-") NUMBER )* EOF
//!
//! Both operators share one precedence level and are applied strictly left
//! to right, so "1 - 2 - 3" is (1 - 2) - 3 = -4.

use crate::ast::{BinaryOperator, Expression};
use crate::error::{CalcError, SyntaxError};
use crate::lexer::Lexer;
use crate::token::{SpannedToken, Token, TokenKind};

const OPERAND: &[TokenKind] = &[TokenKind::Number];
const AFTER_OPERAND: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus, TokenKind::EOF];

/// Anything the parser can pull tokens from.
pub trait TokenSource {
    type Error: From<SyntaxError>;

    fn pull_token(&mut self) -> Result<SpannedToken, Self::Error>;
}

impl TokenSource for Lexer<'_> {
    type Error = CalcError;

    fn pull_token(&mut self) -> Result<SpannedToken, CalcError> {
        Ok(self.next_token()?)
    }
}

/// Replays tokens that were already produced by `tokenize`.
/// A slice without a trailing EOF is treated as ending at its last token.
pub struct TokenSlice<'t> {
    tokens: &'t [SpannedToken],
    index: usize,
}

impl<'t> TokenSlice<'t> {
    pub fn new(tokens: &'t [SpannedToken]) -> Self {
        TokenSlice { tokens, index: 0 }
    }
}

impl TokenSource for TokenSlice<'_> {
    type Error = SyntaxError;

    fn pull_token(&mut self) -> Result<SpannedToken, SyntaxError> {
        match self.tokens.get(self.index) {
            Some(spanned) => {
                self.index += 1;
                Ok(*spanned)
            }
            None => {
                let end = self.tokens.last().map_or(0, |t| t.position);
                Ok(SpannedToken::new(Token::EOF, end))
            }
        }
    }
}

/// The Parser holds the token source and the current token.
pub struct Parser<S: TokenSource> {
    source: S,
    current: SpannedToken,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new parser and advances to the first token.
    pub fn new(mut source: S) -> Result<Self, S::Error> {
        let current = source.pull_token()?;
        Ok(Parser { source, current })
    }

    /// Folds the expression left to right and returns its value.
    pub fn evaluate(&mut self) -> Result<f64, S::Error> {
        let mut acc = self.expect_number()?;

        while let Some(op) = self.next_operator()? {
            let operand = self.expect_number()?;
            acc = op.apply(acc, operand);
        }

        Ok(acc)
    }

    /// Parses the expression into a left-nested tree.
    pub fn parse(&mut self) -> Result<Expression, S::Error> {
        let mut left = Expression::Literal(self.expect_number()?);

        while let Some(op) = self.next_operator()? {
            let right = Expression::Literal(self.expect_number()?);
            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Advances to the next token.
    fn advance(&mut self) -> Result<(), S::Error> {
        self.current = self.source.pull_token()?;
        Ok(())
    }

    /// Consumes a number literal or fails.
    /// Covers empty input, leading operators, and doubled operators.
    fn expect_number(&mut self) -> Result<f64, S::Error> {
        match self.current.token {
            Token::Number(n) => {
                self.advance()?;
                Ok(n)
            }
            _ => Err(self.unexpected(OPERAND).into()),
        }
    }

    /// Consumes the operator after an operand.
    /// Returns None once the expression is complete.
    fn next_operator(&mut self) -> Result<Option<BinaryOperator>, S::Error> {
        let op = match self.current.token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Subtract,
            Token::EOF => return Ok(None),
            Token::Number(_) => return Err(self.unexpected(AFTER_OPERAND).into()),
        };

        self.advance()?;
        Ok(Some(op))
    }

    fn unexpected(&self, expected: &[TokenKind]) -> SyntaxError {
        let err = SyntaxError::new(self.current.position, expected, self.current.token.kind());
        log::debug!("{}", err);
        err
    }
}

/// Evaluates an already lexed token sequence.
pub fn evaluate(tokens: &[SpannedToken]) -> Result<f64, SyntaxError> {
    Parser::new(TokenSlice::new(tokens))?.evaluate()
}

/// Convenience function to parse an expression string into an AST.
pub fn parse(input: &str) -> Result<Expression, CalcError> {
    Parser::new(Lexer::new(input))?.parse()
}
