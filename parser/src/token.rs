//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer, reordered by
//! the postfix converter, and consumed by the evaluator. Each variant carries
//! exactly the payload its meaning requires: a literal value, the originating
//! symbol character, or an index into the registry tables.

/// Tokens recognized by the expression lexer.
///
/// `Constant` and `Function` hold indices assigned by the [`Registry`] at
/// registration time; `Operator` and `Unary` hold the symbol character they
/// were read from, resolved against the registry's symbol tables on use.
///
/// [`Registry`]: crate::registry::Registry
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    // Delimiters
    LeftParen,
    RightParen,
    Comma,

    // Operands
    Number(f64),
    /// Index into the registered-constants table.
    Constant(usize),

    // Operations
    Operator(char),
    Unary(char),
    /// Index into the registered-functions table.
    Function(usize),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Number(n) => write!(f, "{}", n),
            Token::Constant(id) => write!(f, "constant#{}", id),
            Token::Operator(symbol) => write!(f, "{}", symbol),
            Token::Unary(symbol) => write!(f, "{}", symbol),
            Token::Function(id) => write!(f, "function#{}", id),
        }
    }
}
