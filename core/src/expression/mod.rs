//! Parsed expressions held in RPN order.
//!
//! An [`Expression`] is immutable. Resolving one yields a new expression with every
//! variable replaced by a constant; the original stays valid and unchanged.

pub mod evaluator;
mod resolver;


pub use evaluator::evaluate;
pub use resolver::ResolveScope;

use crate::error::{ComputeError, ResolveError, Result};
use crate::smp::Smp;
use crate::token::Token;
use std::sync::Arc;

/// A parsed expression.
#[derive(Debug, Clone)]
pub struct Expression {
    smp: Smp,
    tokens: Arc<[Token]>,
}

impl Expression {
    pub(crate) fn new(smp: Smp, tokens: Vec<Token>) -> Self {
        Self {
            smp,
            tokens: tokens.into(),
        }
    }

    /// Tokens in RPN order. Never contains a parenthesis.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Variable names in RPN order, one entry per occurrence.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Variable(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// True when no variable tokens remain.
    pub fn is_resolved(&self) -> bool {
        !self.tokens.iter().any(Token::is_variable)
    }

    /// Resolve all variables through the instance's provider.
    ///
    /// Returns a clone of `self` without touching the provider when there is
    /// nothing to resolve.
    pub async fn resolve(&self) -> std::result::Result<Expression, ResolveError> {
        resolver::resolve(self).await
    }

    /// Evaluate without resolving; fails if any variable remains.
    pub fn compute_unresolved(&self) -> std::result::Result<f64, ComputeError> {
        if !self.is_resolved() {
            return Err(ComputeError::UnresolvedVariable);
        }
        evaluate(&self.tokens)
    }

    /// Resolve, then evaluate.
    pub async fn compute(&self) -> Result<f64> {
        let resolved = self.resolve().await?;
        Ok(evaluate(resolved.tokens())?)
    }

    /// Evaluate using only values the provider already has cached, substituting
    /// `fallback` for the rest. Never calls [`crate::VariableValueProvider::get_value`].
    pub fn compute_cache_only(&self, fallback: f64) -> std::result::Result<f64, ComputeError> {
        let provider = &self.smp.provider;
        let tokens: Vec<Token> = self
            .tokens
            .iter()
            .map(|token| match token {
                Token::Variable(name) => Token::Constant(provider.cached_value(name).unwrap_or(fallback)),
                other => other.clone(),
            })
            .collect();
        evaluate(&tokens)
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
