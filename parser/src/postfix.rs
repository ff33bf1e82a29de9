//! FILENAME: parser/src/postfix.rs
//! PURPOSE: Converts an infix token sequence to postfix (Reverse Polish)
//! order with a shunting-yard pass extended for function calls.
//! CONTEXT: Second stage of the evaluation pipeline. Two auxiliary stacks:
//! the operator stack holds pending operators, prefix unaries, functions and
//! open parens; the arity stack holds, per open paren group, how many
//! arguments are still expected (1 for a grouping paren, the registered
//! arity for a function-call paren). Commas decrement the count; the closing
//! paren requires it to be exactly 1, which enforces argument counts without
//! a separate pass.
//!
//! ORDERING RULES:
//! - Prefix unaries drain to output the moment their operand completes.
//! - Postfix unaries go straight to output (operand already emitted).
//! - An incoming binary operator pops stacked operators of strictly higher
//!   precedence, or equal precedence when the incoming one is left
//!   associative.
//! - Commas drain pending binary operators only, never prefix unaries.

use crate::error::{ParseError, ParseResult};
use crate::registry::{Associativity, Registry};
use crate::token::Token;

/// Reorders `tokens` into postfix. Fails on comma and parenthesis placement
/// errors and on function argument count mismatches.
pub fn to_postfix(tokens: Vec<Token>, registry: &Registry) -> ParseResult<Vec<Token>> {
    let mut stack: Vec<Token> = Vec::new();
    let mut arity_stack: Vec<usize> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(_) | Token::Constant(_) => {
                output.push(token);

                // The operand is complete; pending prefix unaries apply now.
                while let Some(&Token::Unary(symbol)) = stack.last() {
                    stack.pop();
                    output.push(Token::Unary(symbol));
                }
            }

            Token::Unary(symbol) => {
                let info = registry
                    .unary(symbol)
                    .ok_or(ParseError::UnknownSymbol(symbol))?;
                match info.associativity {
                    // Prefix: waits on the operator stack for its operand.
                    Associativity::Right => stack.push(token),
                    // Postfix: operand already in the output.
                    Associativity::Left => output.push(token),
                }
            }

            // Emission is deferred to the matching ')'.
            Token::Function(_) => stack.push(token),

            Token::Operator(symbol) => {
                let incoming = registry
                    .operator(symbol)
                    .ok_or(ParseError::UnknownSymbol(symbol))?;

                while let Some(&Token::Operator(top_symbol)) = stack.last() {
                    let top = registry
                        .operator(top_symbol)
                        .ok_or(ParseError::UnknownSymbol(top_symbol))?;

                    let pops = top.precedence > incoming.precedence
                        || (top.precedence == incoming.precedence
                            && incoming.associativity == Associativity::Left);
                    if !pops {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Operator(top_symbol));
                }
                stack.push(token);
            }

            Token::Comma => {
                let Some(pending) = arity_stack.last_mut() else {
                    return Err(ParseError::MisplacedComma);
                };
                if *pending < 1 {
                    return Err(ParseError::TooManyArguments);
                }
                *pending -= 1;

                // A comma ends one argument expression: flush its operators.
                while let Some(&Token::Operator(symbol)) = stack.last() {
                    stack.pop();
                    output.push(Token::Operator(symbol));
                }
            }

            Token::LeftParen => {
                let arity = if let Some(&Token::Function(id)) = stack.last() {
                    registry
                        .function(id)
                        .ok_or(ParseError::UnknownFunction(id))?
                        .arity
                } else {
                    1
                };
                arity_stack.push(arity);
                stack.push(token);
            }

            Token::RightParen => {
                // The count decrements per comma, so a complete group ends at 1.
                match arity_stack.last() {
                    None => return Err(ParseError::UnmatchedRightParen),
                    Some(&pending) if pending != 1 => {
                        return Err(ParseError::ArgumentMismatch { pending });
                    }
                    Some(_) => {
                        arity_stack.pop();
                    }
                }

                while let Some(&Token::Operator(symbol)) = stack.last() {
                    stack.pop();
                    output.push(Token::Operator(symbol));
                }

                if stack.pop() != Some(Token::LeftParen) {
                    return Err(ParseError::MismatchedParentheses);
                }

                if let Some(&Token::Function(id)) = stack.last() {
                    stack.pop();
                    output.push(Token::Function(id));
                }

                // The group is a complete operand: pending prefix unaries apply.
                while let Some(&Token::Unary(symbol)) = stack.last() {
                    stack.pop();
                    output.push(Token::Unary(symbol));
                }
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LeftParen {
            return Err(ParseError::UnclosedParen);
        }
        output.push(token);
    }

    Ok(output)
}

/// Convenience function: tokenizes and converts in one call.
pub fn parse(input: &str, registry: &Registry) -> ParseResult<Vec<Token>> {
    let tokens = crate::lexer::tokenize(input, registry)?;
    to_postfix(tokens, registry)
}
