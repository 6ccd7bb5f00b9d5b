//! Infix to postfix (RPN) conversion.

use crate::error::{ParseError, ParseErrorKind};
use crate::token::{Operator, Parenthesis, Token};

/// Entry on the operator stack. A right parenthesis is never pushed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Operator(Operator),
    LeftParen,
}

fn mismatched(input: &str) -> ParseError {
    ParseError::new(input, ParseErrorKind::MismatchedParentheses, "mismatched parentheses")
}

/// Reorder an infix token sequence into RPN.
///
/// An operator pops every stacked operator whose precedence number is less than or
/// equal to its own, so all operators group left to right (`2^3^2` is `(2^3)^2`).
pub fn to_rpn(input: &str, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            Token::Constant(_) | Token::Variable(_) => output.push(token),

            Token::Parenthesis(Parenthesis::Left) => operators.push(StackEntry::LeftParen),

            Token::Parenthesis(Parenthesis::Right) => loop {
                match operators.pop() {
                    Some(StackEntry::Operator(op)) => output.push(Token::Operator(op)),
                    Some(StackEntry::LeftParen) => break,
                    None => return Err(mismatched(input)),
                }
            },

            Token::Operator(op) => {
                while let Some(&StackEntry::Operator(top)) = operators.last() {
                    if top.precedence() > op.precedence() {
                        break;
                    }
                    operators.pop();
                    output.push(Token::Operator(top));
                }
                operators.push(StackEntry::Operator(op));
            }
        }
    }

    if operators.last() == Some(&StackEntry::LeftParen) {
        return Err(mismatched(input));
    }

    while let Some(entry) = operators.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(Token::Operator(op)),
            // buried opener, e.g. "(1+2" leaves [LeftParen, Plus]
            StackEntry::LeftParen => return Err(mismatched(input)),
        }
    }

    Ok(output)
}
