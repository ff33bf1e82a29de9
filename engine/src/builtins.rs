//! FILENAME: engine/src/builtins.rs
//! PURPOSE: The standard arithmetic table, supplied through the ordinary
//! registration contract.
//! CONTEXT: Nothing here is engine logic; the evaluator works against
//! whatever the caller registers. This module is the default data set:
//! the four arithmetic operators, sign and percent unaries, a handful of
//! math functions with domain guards, and the usual constants.
//!
//! PRECEDENCE: '*' and '/' (3) bind tighter than '+' and '-' (2); all four
//! are left associative.

use crate::evaluator::Evaluator;
use parser::Associativity;

/// Installs the builtin operators, unaries, functions, and constants.
/// Symbols the caller registered beforehand keep their earlier definition.
pub fn install(evaluator: &mut Evaluator) {
    evaluator
        .register_operator('+', 2, Associativity::Left, |a, b| a + b, always_valid)
        .register_operator('-', 2, Associativity::Left, |a, b| a - b, always_valid)
        .register_operator('*', 3, Associativity::Left, |a, b| a * b, always_valid)
        .register_operator('/', 3, Associativity::Left, |a, b| a / b, |_, b| b != 0.0)
        .register_unary('+', Associativity::Right, |x| x, always_valid_unary)
        .register_unary('-', Associativity::Right, |x| -x, always_valid_unary)
        .register_unary('%', Associativity::Left, |x| x / 100.0, always_valid_unary)
        .register_function("abs", 1, |args| args[0].abs(), always_valid_args)
        .register_function("sqrt", 1, |args| args[0].sqrt(), |args| args[0] >= 0.0)
        .register_function("exp", 1, |args| args[0].exp(), always_valid_args)
        .register_function("log", 1, |args| args[0].ln(), |args| args[0] > 0.0)
        .register_function(
            "pow",
            2,
            |args| args[0].powf(args[1]),
            // A negative base is only meaningful with an integral exponent.
            |args| args[1] >= 0.0 || args[1].fract() == 0.0,
        )
        .register_constant("pi", std::f64::consts::PI)
        .register_constant("e", std::f64::consts::E);
}

/// Creates an evaluator preloaded with the builtin table.
pub fn default_evaluator() -> Evaluator {
    let mut evaluator = Evaluator::new();
    install(&mut evaluator);
    evaluator
}

/// Default binary validator: every operand pair is in domain.
pub fn always_valid(_a: f64, _b: f64) -> bool {
    true
}

/// Default unary validator.
pub fn always_valid_unary(_x: f64) -> bool {
    true
}

/// Default function validator.
pub fn always_valid_args(_args: &[f64]) -> bool {
    true
}
