//! FILENAME: engine/src/error.rs
//! PURPOSE: Evaluation errors, and the combined error type for the
//! string-to-result convenience call.
//! CONTEXT: Parse-stage failures live in `parser::ParseError`; everything
//! that can go wrong while reducing a postfix sequence lives here. Both are
//! terminal to the current evaluation and leave the registry untouched.

use parser::{ParseError, Token};
use thiserror::Error;

/// Errors raised while reducing a postfix token sequence to a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("operator '{symbol}' rejected operands {a} and {b}")]
    OperatorRejected { symbol: char, a: f64, b: f64 },

    #[error("unary '{symbol}' rejected operand {operand}")]
    UnaryRejected { symbol: char, operand: f64 },

    #[error("function '{name}' rejected arguments {args:?}")]
    FunctionRejected { name: String, args: Vec<f64> },

    /// An operation needed an operand the sequence does not provide.
    #[error("missing operand in postfix sequence")]
    MissingOperand,

    /// A delimiter token survived into the postfix sequence. Cannot come out
    /// of the converter; guards externally built input.
    #[error("unexpected '{0}' token in postfix sequence")]
    UnexpectedToken(Token),

    /// The walk finished with a number of values other than one.
    #[error("postfix sequence reduced to {0} values instead of one")]
    UnbalancedSequence(usize),

    #[error("symbol '{0}' is not registered")]
    UnknownSymbol(char),

    #[error("constant index {0} out of range")]
    UnknownConstant(usize),

    #[error("function index {0} out of range")]
    UnknownFunction(usize),
}

/// Either error kind, as surfaced by [`Evaluator::evaluate`].
///
/// [`Evaluator::evaluate`]: crate::evaluator::Evaluator::evaluate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
