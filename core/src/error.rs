//! Error types for the parse, resolve and compute phases.

use std::num::ParseFloatError;
use thiserror::Error;

/// Error type returned by [`crate::VariableValueProvider`] implementations.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that is neither in the symbol table nor value-like.
    UnknownSymbol(char),
    /// A value's characters broke its kind's rules, or the literal was not a number.
    MalformedValue,
    /// A closer with no opener or an opener left unclosed.
    MismatchedParentheses,
}

/// Parse error with the original input and, where known, the character index.
#[derive(Debug, Error)]
pub struct ParseError {
    pub input: String,
    pub kind: ParseErrorKind,
    pub reason: String,
    /// Character (not byte) index of the offending symbol.
    pub position: Option<usize>,
    #[source]
    pub cause: Option<ParseFloatError>,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            kind,
            reason: reason.into(),
            position: None,
            cause: None,
        }
    }

    pub(crate) fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub(crate) fn caused_by(mut self, cause: ParseFloatError) -> Self {
        self.cause = Some(cause);
        self
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => {
                writeln!(f, "An error occurred while parsing!")?;
                writeln!(f)?;
                writeln!(f, "    {}", self.input)?;
                writeln!(f, "    {}^", " ".repeat(position))?;
                writeln!(f)?;
                write!(f, "The reason for the failure was: {}.", self.reason)
            }
            None => write!(f, "An error occurred while parsing: {}!", self.reason),
        }
    }
}

/// Evaluation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error("An error occurred whilst computing an expression: expression contained unresolved variables!")]
    UnresolvedVariable,
    #[error("An error occurred whilst computing an expression: input equation was not well formed!")]
    MalformedExpression,
}

/// Failure while looking up variable values.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("An error occurred whilst resolving variable '{variable}'!")]
    VariableLookupFailed {
        variable: String,
        #[source]
        cause: ProviderError,
    },
    /// A lookup task died (panic or cancellation) before reporting which variable failed.
    #[error("An unknown error occurred whilst resolving!")]
    Unknown {
        #[source]
        cause: tokio::task::JoinError,
    },
    #[error("No async runtime is available to resolve variables on")]
    NoRuntime,
}

/// Any error from the combined parse/resolve/compute entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
}

pub type Result<T> = std::result::Result<T, Error>;
