//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans an expression string and produces a stream of Tokens.
//! CONTEXT: First stage of the evaluation pipeline. The lexer skips
//! whitespace, reads numeric literals, and resolves identifiers and symbols
//! against the registry: identifiers match function names first, then
//! constant names; symbols match binary or unary operators depending on
//! position.
//!
//! POSITION TRACKING: two flags carried across tokens drive recognition:
//! - `expecting_identifier`: the next token must begin a value (number,
//!   constant, function call, or prefix unary). When false, the next token
//!   must be an infix operator, postfix unary, ',' or ')'.
//! - `expecting_left_paren`: set after a function token; the next
//!   non-whitespace character must be '(' or lexing fails.

use crate::error::{ParseError, ParseResult};
use crate::registry::Registry;
use crate::token::Token;
use std::iter::Peekable;
use std::str::CharIndices;

pub struct Lexer<'a> {
    input: Peekable<CharIndices<'a>>,
    registry: &'a Registry,
    expecting_identifier: bool,
    expecting_left_paren: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, registry: &'a Registry) -> Self {
        Lexer {
            input: input.char_indices().peekable(),
            registry,
            expecting_identifier: true,
            expecting_left_paren: false,
        }
    }

    /// Consumes the whole input and returns the token sequence.
    /// Fails if the input ends while an operand is still expected
    /// (which includes empty input).
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        if self.expecting_identifier {
            return Err(ParseError::UnexpectedEnd);
        }
        Ok(tokens)
    }

    /// Advances the lexer and returns the next token, or `None` at end of
    /// input. End-of-input legality is checked by [`tokenize`](Self::tokenize).
    pub fn next_token(&mut self) -> ParseResult<Option<Token>> {
        self.skip_whitespace();

        let Some(&(position, ch)) = self.input.peek() else {
            return Ok(None);
        };

        let token = if ch == '(' {
            // '(' is legal in any position and satisfies a pending
            // function-call requirement.
            self.input.next();
            self.expecting_left_paren = false;
            Token::LeftParen
        } else if self.expecting_left_paren {
            return Err(ParseError::ExpectedLeftParen { position });
        } else if self.expecting_identifier {
            self.read_operand(position, ch)?
        } else {
            self.read_operator(position, ch)?
        };

        // The emitted token determines what may legally follow it.
        self.expecting_identifier = match token {
            Token::LeftParen | Token::Comma | Token::Operator(_) => true,
            Token::Function(_) => {
                self.expecting_left_paren = true;
                true
            }
            Token::Unary(symbol) => self.registry.is_prefix_unary(symbol),
            Token::RightParen | Token::Number(_) | Token::Constant(_) => false,
        };

        Ok(Some(token))
    }

    /// Recognition in operand position: identifier (function or constant),
    /// prefix unary symbol, or numeric literal — in that priority order.
    fn read_operand(&mut self, position: usize, ch: char) -> ParseResult<Token> {
        if ch.is_ascii_alphabetic() {
            let name = self.read_identifier();

            // Functions take priority: they are names with required parens.
            if let Some(id) = self.registry.function_index(&name) {
                return Ok(Token::Function(id));
            }
            if let Some(id) = self.registry.constant_index(&name) {
                return Ok(Token::Constant(id));
            }
            return Err(ParseError::UnknownIdentifier { name, position });
        }

        if self.registry.is_prefix_unary(ch) {
            self.input.next();
            return Ok(Token::Unary(ch));
        }

        if ch.is_ascii_digit() {
            return self.read_number(position);
        }

        Err(ParseError::UnexpectedCharacter {
            character: ch,
            position,
        })
    }

    /// Recognition in operator position: ')', ',', a registered binary
    /// operator symbol, or a registered postfix unary symbol.
    fn read_operator(&mut self, position: usize, ch: char) -> ParseResult<Token> {
        let token = match ch {
            ')' => Token::RightParen,
            ',' => Token::Comma,
            _ if self.registry.operator(ch).is_some() => Token::Operator(ch),
            _ if self.registry.is_postfix_unary(ch) => Token::Unary(ch),
            _ => {
                return Err(ParseError::UnexpectedCharacter {
                    character: ch,
                    position,
                });
            }
        };
        self.input.next();
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Reads an alphanumeric run starting at the current (alphabetic) char.
    fn read_identifier(&mut self) -> String {
        let mut name = String::new();
        while let Some(&(_, ch)) = self.input.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            name.push(ch);
            self.input.next();
        }
        name
    }

    /// Reads a digit run with at most one decimal point as a single literal.
    fn read_number(&mut self, position: usize) -> ParseResult<Token> {
        let mut literal = String::new();
        let mut has_dot = false;

        while let Some(&(_, ch)) = self.input.peek() {
            if ch.is_ascii_digit() {
                literal.push(ch);
            } else if ch == '.' && !has_dot {
                has_dot = true;
                literal.push(ch);
            } else {
                break;
            }
            self.input.next();
        }

        match literal.parse::<f64>() {
            Ok(value) => Ok(Token::Number(value)),
            Err(_) => Err(ParseError::InvalidNumber { literal, position }),
        }
    }
}

/// Convenience function to tokenize an expression string directly.
pub fn tokenize(input: &str, registry: &Registry) -> ParseResult<Vec<Token>> {
    Lexer::new(input, registry).tokenize()
}
