//! Token vocabulary shared by the tokenizer, the shunting-yard converter and the evaluator.
//!
//! Tokens are created once at parse time and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A binary arithmetic operator.
///
/// Precedence numbers are inverted: a smaller number binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Self::Plus,
        Self::Minus,
        Self::Times,
        Self::Divide,
        Self::Power,
    ];

    /// The single character this operator is written as.
    pub fn symbol(&self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Times => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }

    /// Precedence number (0 binds tightest).
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 2,
            Self::Times | Self::Divide => 1,
            Self::Power => 0,
        }
    }

    /// Apply the operator to `first` (the left operand) and `second`.
    pub fn apply(&self, first: f64, second: f64) -> f64 {
        match self {
            Self::Plus => first + second,
            Self::Minus => first - second,
            Self::Times => first * second,
            Self::Divide => first / second,
            Self::Power => first.powf(second),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Grouping parenthesis. Never present in an RPN sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parenthesis {
    Left,
    Right,
}

impl Parenthesis {
    pub fn symbol(&self) -> char {
        match self {
            Self::Left => '(',
            Self::Right => ')',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '(' => Some(Self::Left),
            ')' => Some(Self::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single lexical unit of an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Operator(Operator),
    Parenthesis(Parenthesis),
    /// Numeric literal
    Constant(f64),
    /// Unresolved variable reference
    Variable(String),
}

impl Token {
    /// Look up the fixed token for a single-character symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Operator::from_symbol(symbol)
            .map(Token::Operator)
            .or_else(|| Parenthesis::from_symbol(symbol).map(Token::Parenthesis))
    }

    /// Constants and variables are values; everything else is structural.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "{}", op),
            Self::Parenthesis(paren) => write!(f, "{}", paren),
            Self::Constant(n) => write!(f, "{}", n),
            Self::Variable(name) => write!(f, "{}", name),
        }
    }
}

/// Characters allowed in a constant literal.
pub fn is_constant_symbol(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

/// Characters allowed in a variable name.
pub fn is_variable_symbol(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_symbol_table() {
        assert_eq!(Token::from_symbol('+'), Some(Token::Operator(Operator::Plus)));
        assert_eq!(Token::from_symbol('^'), Some(Token::Operator(Operator::Power)));
        assert_eq!(Token::from_symbol('('), Some(Token::Parenthesis(Parenthesis::Left)));
        assert_eq!(Token::from_symbol(')'), Some(Token::Parenthesis(Parenthesis::Right)));
        assert_eq!(Token::from_symbol('x'), None);
        assert_eq!(Token::from_symbol('1'), None);
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(Operator::Power.precedence() < Operator::Times.precedence());
        assert_eq!(Operator::Times.precedence(), Operator::Divide.precedence());
        assert!(Operator::Divide.precedence() < Operator::Plus.precedence());
        assert_eq!(Operator::Plus.precedence(), Operator::Minus.precedence());
    }

    #[test]
    fn test_apply_operand_order() {
        assert_eq!(Operator::Minus.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
        assert_eq!(Operator::Power.apply(2.0, 3.0), 8.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Operator(Operator::Times).to_string(), "*");
        assert_eq!(Token::Constant(2.5).to_string(), "2.5");
        assert_eq!(Token::Variable("radius".to_string()).to_string(), "radius");
    }
}
