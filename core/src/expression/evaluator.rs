//! Stack-machine evaluation of a variable-free RPN sequence.

use crate::error::ComputeError;
use crate::token::Token;

/// Reduce `tokens` to a single number.
///
/// Each operator takes the deeper stack value as its left operand. Anything other
/// than exactly one value left at the end means the sequence was not well formed.
pub fn evaluate(tokens: &[Token]) -> Result<f64, ComputeError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Constant(n) => stack.push(*n),
            Token::Operator(op) => {
                let second = stack.pop().ok_or(ComputeError::MalformedExpression)?;
                let first = stack.pop().ok_or(ComputeError::MalformedExpression)?;
                stack.push(op.apply(first, second));
            }
            Token::Variable(_) => return Err(ComputeError::UnresolvedVariable),
            Token::Parenthesis(_) => return Err(ComputeError::MalformedExpression),
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(ComputeError::MalformedExpression),
    }
}
