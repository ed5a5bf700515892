//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the pipeline. It skips spaces and tabs,
//! reads number literals, and rejects every character outside the alphabet.
//!
//! ALPHABET:
//! - Numbers: digit+ ('.' digit+)?
//! - Operators: + -
//! - Whitespace: space, tab (anything else, including newlines, is an error)

use crate::error::{LexicalError, LexicalErrorKind};
use crate::token::{SpannedToken, Token};
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    /// Character index of the next unread character.
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
            position: 0,
        }
    }

    /// Advances the lexer and returns the next token.
    /// Once the input is exhausted every call returns EOF.
    pub fn next_token(&mut self) -> Result<SpannedToken, LexicalError> {
        self.skip_whitespace();

        let start = self.position;
        let token = match self.bump() {
            Some('+') => Token::Plus,
            Some('-') => Token::Minus,

            Some(ch) if ch.is_ascii_digit() => self.read_number(ch)?,

            // Leading-dot numbers like ".5" are not part of the grammar
            Some('.') => return Err(self.error(LexicalErrorKind::LeadingDot, start, '.')),

            None => Token::EOF,

            Some(ch) => return Err(self.error(LexicalErrorKind::UnrecognizedCharacter, start, ch)),
        };

        log::trace!("lexed {:?} at {}", token, start);
        Ok(SpannedToken::new(token, start))
    }

    /// Consumes one character, keeping the position in sync.
    fn bump(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        self.position += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !is_whitespace(ch) {
                break;
            }
            self.bump();
        }
    }

    fn read_number(&mut self, first_char: char) -> Result<Token, LexicalError> {
        let mut number_str = String::from(first_char);
        self.read_digits(&mut number_str);

        if self.input.peek() == Some(&'.') {
            let dot_position = self.position;
            self.bump();
            number_str.push('.');

            if !self.peek_is_digit() {
                return Err(self.error(LexicalErrorKind::TrailingDot, dot_position, '.'));
            }
            self.read_digits(&mut number_str);

            if self.input.peek() == Some(&'.') {
                return Err(self.error(LexicalErrorKind::SecondDot, self.position, '.'));
            }
        }

        // digit+ ('.' digit+)? always converts; out-of-range values become inf
        let value = number_str.parse::<f64>().unwrap_or(f64::INFINITY);
        Ok(Token::Number(value))
    }

    fn read_digits(&mut self, buf: &mut String) {
        while self.peek_is_digit() {
            if let Some(ch) = self.bump() {
                buf.push(ch);
            }
        }
    }

    fn peek_is_digit(&mut self) -> bool {
        matches!(self.input.peek(), Some(ch) if ch.is_ascii_digit())
    }

    fn error(&self, kind: LexicalErrorKind, position: usize, character: char) -> LexicalError {
        let err = LexicalError::new(kind, position, character);
        log::debug!("{}", err);
        err
    }
}

/// Only space and tab separate tokens.
fn is_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Tokenizes the whole input, ending with a single EOF token.
/// Stops at the first lexical error.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, LexicalError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let spanned = lexer.next_token()?;
        let done = spanned.token == Token::EOF;
        tokens.push(spanned);
        if done {
            return Ok(tokens);
        }
    }
}
