//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the expression parser.
//! CONTEXT: This crate turns an expression string into a postfix token
//! sequence against a caller-populated symbol registry. The engine crate
//! wraps it together with the postfix evaluator.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Postfix Converter
//!           --> Postfix Tokens --> Evaluator (engine crate)
//!
//! SUPPORTED FEATURES:
//! - Registered binary operators with precedence and associativity
//! - Registered prefix and postfix unary operators
//! - Registered functions with fixed arity, called as name(arg, ...)
//! - Registered named constants
//! - Numeric literals with an optional decimal point
//! - Parentheses for grouping

pub mod error;
pub mod lexer;
pub mod postfix;
pub mod registry;
pub mod token;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use error::{ParseError, ParseResult};
pub use lexer::{Lexer, tokenize};
pub use postfix::{parse, to_postfix};
pub use registry::{
    Associativity, BinaryOp, BinaryValidator, ConstantInfo, FunctionInfo, FunctionOp,
    FunctionValidator, OperatorInfo, Registry, UnaryInfo, UnaryOp, UnaryValidator,
};
pub use token::Token;
