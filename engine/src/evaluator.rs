//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates postfix token sequences and owns the symbol registry.
//! CONTEXT: Final stage of the evaluation pipeline. The evaluator walks the
//! postfix sequence left to right, keeping every value seen so far on a
//! reduction stack. An operator, unary, or function token consumes its
//! operands from the top of that stack and pushes the computed number back,
//! so a later reduction sees the produced value as a plain operand without
//! re-scanning the sequence.
//!
//! CONSTANTS: a Constant token passes through the stack unresolved and is
//! looked up the moment it is consumed as an operand, not when first visited.
//!
//! VALIDATORS: every registered operation carries a domain guard that runs
//! before the operation itself; a rejection aborts the evaluation with an
//! EvalError naming the offending symbol and operands.

use crate::error::{Error, EvalError};
use parser::registry::{
    Associativity, BinaryOp, BinaryValidator, FunctionOp, FunctionValidator, Registry, UnaryOp,
    UnaryValidator,
};
use parser::{ParseResult, Token};

/// The expression evaluator: a registry of symbols plus the pipeline that
/// turns text into numbers against it.
///
/// Registrations are chainable and first-wins; once setup is complete the
/// evaluator is read-only and `evaluate` may be called any number of times
/// (or from several threads) with identical results.
#[derive(Debug, Default)]
pub struct Evaluator {
    registry: Registry,
}

impl Evaluator {
    /// Creates an evaluator with an empty registry. See
    /// [`builtins::install`](crate::builtins::install) for the standard
    /// arithmetic table.
    pub fn new() -> Self {
        Evaluator {
            registry: Registry::new(),
        }
    }

    /// Read access to the underlying symbol tables.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ----------------------------------------------------------------
    // Registration (chainable)
    // ----------------------------------------------------------------

    /// Registers a named constant.
    pub fn register_constant(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.registry.register_constant(name, value);
        self
    }

    /// Registers a binary operator.
    pub fn register_operator(
        &mut self,
        symbol: char,
        precedence: u8,
        associativity: Associativity,
        operation: BinaryOp,
        validator: BinaryValidator,
    ) -> &mut Self {
        self.registry
            .register_operator(symbol, precedence, associativity, operation, validator);
        self
    }

    /// Registers a unary operator (`Associativity::Right` = prefix,
    /// `Associativity::Left` = postfix).
    pub fn register_unary(
        &mut self,
        symbol: char,
        associativity: Associativity,
        operation: UnaryOp,
        validator: UnaryValidator,
    ) -> &mut Self {
        self.registry
            .register_unary(symbol, associativity, operation, validator);
        self
    }

    /// Registers a named function with a fixed arity.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        operation: FunctionOp,
        validator: FunctionValidator,
    ) -> &mut Self {
        self.registry
            .register_function(name, arity, operation, validator);
        self
    }

    // ----------------------------------------------------------------
    // Evaluation
    // ----------------------------------------------------------------

    /// Tokenizes and converts an expression to a postfix token sequence.
    pub fn parse(&self, expression: &str) -> ParseResult<Vec<Token>> {
        parser::parse(expression, &self.registry)
    }

    /// Reduces a postfix token sequence to a single value.
    pub fn evaluate_postfix(&self, tokens: Vec<Token>) -> Result<f64, EvalError> {
        let mut reduced: Vec<Token> = Vec::new();

        for token in tokens {
            match token {
                Token::Number(_) | Token::Constant(_) => reduced.push(token),

                Token::Unary(symbol) => {
                    let info = self
                        .registry
                        .unary(symbol)
                        .ok_or(EvalError::UnknownSymbol(symbol))?;

                    let operand = self.operand_value(reduced.pop())?;
                    if !(info.validator)(operand) {
                        return Err(EvalError::UnaryRejected { symbol, operand });
                    }
                    reduced.push(Token::Number((info.operation)(operand)));
                }

                Token::Operator(symbol) => {
                    let info = self
                        .registry
                        .operator(symbol)
                        .ok_or(EvalError::UnknownSymbol(symbol))?;

                    let b = self.operand_value(reduced.pop())?;
                    let a = self.operand_value(reduced.pop())?;
                    if !(info.validator)(a, b) {
                        return Err(EvalError::OperatorRejected { symbol, a, b });
                    }
                    reduced.push(Token::Number((info.operation)(a, b)));
                }

                Token::Function(id) => {
                    let info = self
                        .registry
                        .function(id)
                        .ok_or(EvalError::UnknownFunction(id))?;

                    // Arguments come off the stack in reverse source order.
                    let mut args = vec![0.0; info.arity];
                    for slot in args.iter_mut().rev() {
                        *slot = self.operand_value(reduced.pop())?;
                    }
                    if !(info.validator)(&args) {
                        return Err(EvalError::FunctionRejected {
                            name: info.name.clone(),
                            args,
                        });
                    }
                    reduced.push(Token::Number((info.operation)(&args)));
                }

                Token::LeftParen | Token::RightParen | Token::Comma => {
                    return Err(EvalError::UnexpectedToken(token));
                }
            }
        }

        if reduced.len() != 1 {
            return Err(EvalError::UnbalancedSequence(reduced.len()));
        }
        self.operand_value(reduced.pop())
    }

    /// Convenience composition: parses and evaluates an expression string.
    pub fn evaluate(&self, expression: &str) -> Result<f64, Error> {
        let tokens = self.parse(expression)?;
        Ok(self.evaluate_postfix(tokens)?)
    }

    /// Resolves a popped token to its numeric value. Constants resolve here,
    /// lazily, at the moment they are consumed.
    fn operand_value(&self, token: Option<Token>) -> Result<f64, EvalError> {
        match token {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Constant(id)) => Ok(self
                .registry
                .constant(id)
                .ok_or(EvalError::UnknownConstant(id))?
                .value),
            Some(other) => Err(EvalError::UnexpectedToken(other)),
            None => Err(EvalError::MissingOperand),
        }
    }

    // ----------------------------------------------------------------
    // Debugging
    // ----------------------------------------------------------------

    /// Renders a token sequence with constant and function indices resolved
    /// to their registered names. Useful for inspecting postfix output.
    pub fn format_tokens(&self, tokens: &[Token]) -> String {
        let parts: Vec<String> = tokens
            .iter()
            .map(|token| match *token {
                Token::Constant(id) => match self.registry.constant(id) {
                    Some(info) => info.name.clone(),
                    None => token.to_string(),
                },
                Token::Function(id) => match self.registry.function(id) {
                    Some(info) => info.name.clone(),
                    None => token.to_string(),
                },
                _ => token.to_string(),
            })
            .collect();
        parts.join(" ")
    }
}
