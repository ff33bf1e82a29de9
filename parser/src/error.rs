//! FILENAME: parser/src/error.rs
//! PURPOSE: Structural and lexical errors raised while turning text into a
//! postfix token sequence.
//! CONTEXT: Every failure during tokenizing or postfix conversion maps to one
//! variant here, carrying the offending symbol, name, or byte position.
//! Message rendering is presentation; callers match on the variant.

use thiserror::Error;

/// Errors raised by the lexer and the postfix converter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unrecognized character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("unknown identifier '{name}' at position {position}")]
    UnknownIdentifier { name: String, position: usize },

    #[error("invalid number literal '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },

    #[error("expected '(' after function name at position {position}")]
    ExpectedLeftParen { position: usize },

    #[error("expression ended while expecting an operand")]
    UnexpectedEnd,

    #[error("',' outside of any parenthesized group")]
    MisplacedComma,

    #[error("too many arguments before ','")]
    TooManyArguments,

    #[error("argument count mismatch at ')': {pending} argument(s) still expected")]
    ArgumentMismatch { pending: usize },

    #[error("')' with no matching open group")]
    UnmatchedRightParen,

    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("'(' left unclosed at end of expression")]
    UnclosedParen,

    /// A token names a symbol the registry does not know. Unreachable when
    /// the token sequence came from the lexer; guards externally built input.
    #[error("symbol '{0}' is not registered")]
    UnknownSymbol(char),

    /// A function token carries an index outside the registry table.
    #[error("function index {0} out of range")]
    UnknownFunction(usize),
}

pub type ParseResult<T> = Result<T, ParseError>;
