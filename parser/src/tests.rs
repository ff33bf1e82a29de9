//! FILENAME: parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::error::ParseError;
use crate::lexer::{Lexer, tokenize};
use crate::postfix::{parse, to_postfix};
use crate::registry::{Associativity, Registry};
use crate::token::Token;

/// Builds a registry with the standard arithmetic table used by the tests.
fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register_operator('+', 2, Associativity::Left, |a, b| a + b, |_, _| true)
        .register_operator('-', 2, Associativity::Left, |a, b| a - b, |_, _| true)
        .register_operator('*', 3, Associativity::Left, |a, b| a * b, |_, _| true)
        .register_operator('/', 3, Associativity::Left, |a, b| a / b, |_, b| b != 0.0)
        .register_unary('+', Associativity::Right, |x| x, |_| true)
        .register_unary('-', Associativity::Right, |x| -x, |_| true)
        .register_unary('%', Associativity::Left, |x| x / 100.0, |_| true)
        .register_function("sqrt", 1, |args| args[0].sqrt(), |args| args[0] >= 0.0)
        .register_function("pow", 2, |args| args[0].powf(args[1]), |_| true)
        .register_constant("pi", std::f64::consts::PI)
        .register_constant("e", std::f64::consts::E);
    registry
}

// ========================================
// REGISTRY TESTS
// ========================================

#[test]
fn registry_assigns_stable_indices() {
    let registry = registry();
    assert_eq!(registry.function_index("sqrt"), Some(0));
    assert_eq!(registry.function_index("pow"), Some(1));
    assert_eq!(registry.constant_index("pi"), Some(0));
    assert_eq!(registry.constant_index("e"), Some(1));
    assert_eq!(registry.function_index("missing"), None);
}

#[test]
fn registry_first_registration_wins() {
    let mut registry = registry();
    registry.register_constant("pi", 3.0);
    let id = registry.constant_index("pi").unwrap();
    assert_eq!(registry.constant(id).unwrap().value, std::f64::consts::PI);

    // Re-registering an operator keeps the original precedence.
    registry.register_operator('+', 9, Associativity::Right, |a, b| a * b, |_, _| true);
    assert_eq!(registry.operator('+').unwrap().precedence, 2);
    assert_eq!(
        registry.operator('+').unwrap().associativity,
        Associativity::Left
    );
}

#[test]
fn registry_symbol_can_be_operator_and_unary() {
    let registry = registry();
    assert!(registry.operator('-').is_some());
    assert!(registry.is_prefix_unary('-'));
    assert!(registry.is_postfix_unary('%'));
    assert!(!registry.is_prefix_unary('%'));
}

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn lexer_tokenizes_simple_math() {
    let registry = registry();
    let mut lexer = Lexer::new("1 + 2", &registry);

    assert_eq!(lexer.next_token(), Ok(Some(Token::Number(1.0))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Operator('+'))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Number(2.0))));
    assert_eq!(lexer.next_token(), Ok(None));
}

#[test]
fn lexer_tokenizes_functions() {
    let registry = registry();
    let pow = registry.function_index("pow").unwrap();

    let tokens = tokenize("pow(2, 3)", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Function(pow),
            Token::LeftParen,
            Token::Number(2.0),
            Token::Comma,
            Token::Number(3.0),
            Token::RightParen,
        ]
    );
}

#[test]
fn lexer_tokenizes_constants() {
    let registry = registry();
    let pi = registry.constant_index("pi").unwrap();

    let tokens = tokenize("pi * 2", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Constant(pi),
            Token::Operator('*'),
            Token::Number(2.0),
        ]
    );
}

#[test]
fn lexer_function_name_wins_over_constant() {
    // A name registered as both resolves to the function in operand position.
    let mut registry = Registry::new();
    registry
        .register_constant("tau", std::f64::consts::TAU)
        .register_function("tau", 1, |args| args[0], |_| true);
    let tau = registry.function_index("tau").unwrap();

    let tokens = tokenize("tau(1)", &registry).unwrap();
    assert_eq!(tokens[0], Token::Function(tau));
}

#[test]
fn lexer_disambiguates_prefix_and_binary_minus() {
    let registry = registry();
    let tokens = tokenize("-1 - 2", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Unary('-'),
            Token::Number(1.0),
            Token::Operator('-'),
            Token::Number(2.0),
        ]
    );
}

#[test]
fn lexer_recognizes_postfix_percent() {
    let registry = registry();
    let tokens = tokenize("50%", &registry).unwrap();
    assert_eq!(tokens, vec![Token::Number(50.0), Token::Unary('%')]);
}

#[test]
fn lexer_reads_decimal_numbers() {
    let registry = registry();
    let tokens = tokenize("3.25 + 0.5", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(3.25),
            Token::Operator('+'),
            Token::Number(0.5),
        ]
    );
}

#[test]
fn lexer_skips_whitespace() {
    let registry = registry();
    let tokens = tokenize("  2\t*\n 3 ", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(2.0),
            Token::Operator('*'),
            Token::Number(3.0),
        ]
    );
}

#[test]
fn lexer_rejects_unknown_identifier() {
    let registry = registry();
    assert_eq!(
        tokenize("foo + 1", &registry),
        Err(ParseError::UnknownIdentifier {
            name: "foo".to_string(),
            position: 0,
        })
    );
}

#[test]
fn lexer_rejects_unknown_character() {
    let registry = registry();
    assert_eq!(
        tokenize("1 ? 2", &registry),
        Err(ParseError::UnexpectedCharacter {
            character: '?',
            position: 2,
        })
    );
}

#[test]
fn lexer_requires_paren_after_function() {
    let registry = registry();
    assert_eq!(
        tokenize("sqrt 4", &registry),
        Err(ParseError::ExpectedLeftParen { position: 5 })
    );
}

#[test]
fn lexer_rejects_trailing_operator() {
    let registry = registry();
    assert_eq!(tokenize("1 +", &registry), Err(ParseError::UnexpectedEnd));
}

#[test]
fn lexer_rejects_empty_input() {
    let registry = registry();
    assert_eq!(tokenize("", &registry), Err(ParseError::UnexpectedEnd));
    assert_eq!(tokenize("   ", &registry), Err(ParseError::UnexpectedEnd));
}

#[test]
fn lexer_rejects_operator_in_operand_position() {
    let registry = registry();
    // '*' is binary only, so it cannot start an operand.
    assert_eq!(
        tokenize("* 2", &registry),
        Err(ParseError::UnexpectedCharacter {
            character: '*',
            position: 0,
        })
    );
}

// ========================================
// POSTFIX CONVERTER TESTS
// ========================================

#[test]
fn postfix_respects_precedence() {
    let registry = registry();
    let tokens = parse("2 + 3 * 4", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Number(4.0),
            Token::Operator('*'),
            Token::Operator('+'),
        ]
    );
}

#[test]
fn postfix_respects_parentheses() {
    let registry = registry();
    let tokens = parse("(2 + 3) * 4", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Operator('+'),
            Token::Number(4.0),
            Token::Operator('*'),
        ]
    );
}

#[test]
fn postfix_groups_equal_precedence_left_to_right() {
    let registry = registry();
    let tokens = parse("8 - 3 - 2", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(8.0),
            Token::Number(3.0),
            Token::Operator('-'),
            Token::Number(2.0),
            Token::Operator('-'),
        ]
    );
}

#[test]
fn postfix_right_associative_operator_defers() {
    // A right-associative operator of equal precedence must not pop.
    let mut registry = Registry::new();
    registry.register_operator('^', 4, Associativity::Right, |a, b| a.powf(b), |_, _| true);

    let tokens = parse("2 ^ 3 ^ 2", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Number(2.0),
            Token::Operator('^'),
            Token::Operator('^'),
        ]
    );
}

#[test]
fn postfix_drains_prefix_unary_after_operand() {
    let registry = registry();
    let tokens = parse("--5", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![Token::Number(5.0), Token::Unary('-'), Token::Unary('-')]
    );
}

#[test]
fn postfix_prefix_unary_binds_before_binary_operator() {
    let registry = registry();
    let tokens = parse("-2 * 3", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(2.0),
            Token::Unary('-'),
            Token::Number(3.0),
            Token::Operator('*'),
        ]
    );
}

#[test]
fn postfix_prefix_unary_applies_to_parenthesized_group() {
    let registry = registry();
    let tokens = parse("-(1 + 2)", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(1.0),
            Token::Number(2.0),
            Token::Operator('+'),
            Token::Unary('-'),
        ]
    );
}

#[test]
fn postfix_emits_postfix_unary_immediately() {
    let registry = registry();
    let tokens = parse("50% + 1", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(50.0),
            Token::Unary('%'),
            Token::Number(1.0),
            Token::Operator('+'),
        ]
    );
}

#[test]
fn postfix_emits_function_after_arguments() {
    let registry = registry();
    let pow = registry.function_index("pow").unwrap();

    let tokens = parse("pow(2, 3)", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Function(pow),
        ]
    );
}

#[test]
fn postfix_handles_nested_function_calls() {
    let registry = registry();
    let sqrt = registry.function_index("sqrt").unwrap();
    let pow = registry.function_index("pow").unwrap();

    let tokens = parse("sqrt(pow(2, 4))", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(2.0),
            Token::Number(4.0),
            Token::Function(pow),
            Token::Function(sqrt),
        ]
    );
}

#[test]
fn postfix_handles_expression_arguments() {
    let registry = registry();
    let pow = registry.function_index("pow").unwrap();

    // Each comma flushes the operators of the finished argument.
    let tokens = parse("pow(1 + 1, 6 / 2)", &registry).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number(1.0),
            Token::Number(1.0),
            Token::Operator('+'),
            Token::Number(6.0),
            Token::Number(2.0),
            Token::Operator('/'),
            Token::Function(pow),
        ]
    );
}

#[test]
fn postfix_rejects_top_level_comma() {
    let registry = registry();
    assert_eq!(parse("1, 2", &registry), Err(ParseError::MisplacedComma));
}

#[test]
fn postfix_rejects_missing_argument() {
    let registry = registry();
    assert_eq!(
        parse("pow(2)", &registry),
        Err(ParseError::ArgumentMismatch { pending: 2 })
    );
}

#[test]
fn postfix_rejects_extra_argument() {
    let registry = registry();
    assert_eq!(
        parse("pow(2, 3, 4)", &registry),
        Err(ParseError::ArgumentMismatch { pending: 0 })
    );
}

#[test]
fn postfix_rejects_comma_past_declared_arity() {
    let registry = registry();
    assert_eq!(
        parse("pow(2, 3, 4, 5)", &registry),
        Err(ParseError::TooManyArguments)
    );
}

#[test]
fn postfix_rejects_comma_in_grouping_paren() {
    let registry = registry();
    // A plain paren group expects exactly one expression.
    assert_eq!(
        parse("(1, 2)", &registry),
        Err(ParseError::ArgumentMismatch { pending: 0 })
    );
}

#[test]
fn postfix_rejects_unmatched_right_paren() {
    let registry = registry();
    assert_eq!(
        parse("1 + 2)", &registry),
        Err(ParseError::UnmatchedRightParen)
    );
}

#[test]
fn postfix_rejects_unclosed_paren() {
    let registry = registry();
    assert_eq!(parse("(1 + 2", &registry), Err(ParseError::UnclosedParen));
}

#[test]
fn postfix_converter_accepts_prebuilt_tokens() {
    let registry = registry();
    let tokens = vec![
        Token::Number(4.0),
        Token::Operator('*'),
        Token::Number(5.0),
    ];
    assert_eq!(
        to_postfix(tokens, &registry).unwrap(),
        vec![
            Token::Number(4.0),
            Token::Number(5.0),
            Token::Operator('*'),
        ]
    );
}

#[test]
fn postfix_rejects_unregistered_symbol_in_prebuilt_tokens() {
    let registry = registry();
    let tokens = vec![
        Token::Number(1.0),
        Token::Operator('@'),
        Token::Number(2.0),
    ];
    assert_eq!(
        to_postfix(tokens, &registry),
        Err(ParseError::UnknownSymbol('@'))
    );
}
