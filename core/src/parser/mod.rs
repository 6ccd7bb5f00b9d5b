//! Expression parsing: tokenizer followed by shunting-yard conversion.
//!
//! Supports:
//! - Numbers (digits and `.`)
//! - Variable references (runs of letters and `_`)
//! - Arithmetic operators (+, -, *, /, ^)
//! - Parentheses for grouping

pub mod shunting_yard;
pub mod tokenizer;

pub use shunting_yard::to_rpn;
pub use tokenizer::tokenize;

use crate::error::ParseError;
use crate::token::Token;

/// Tokenize `input` and return its RPN token sequence.
pub fn parse_rpn(input: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = tokenize(input)?;
    let rpn = to_rpn(input, tokens)?;
    tracing::trace!(input, tokens = rpn.len(), "parsed expression");
    Ok(rpn)
}
