//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports the evaluator facade, the builtin table, and the
//! error types, together with the parser crate's token and registry types.
//!
//! USAGE:
//!   let mut evaluator = engine::Evaluator::new();
//!   engine::builtins::install(&mut evaluator);
//!   let result = evaluator.evaluate("pow(2, 3) + 1")?;   // 9.0

pub mod builtins;
pub mod error;
pub mod evaluator;

// Re-export commonly used types at the crate root
pub use error::{Error, EvalError};
pub use evaluator::Evaluator;
pub use parser::{
    Associativity, ConstantInfo, FunctionInfo, OperatorInfo, ParseError, Registry, Token,
    UnaryInfo,
};
