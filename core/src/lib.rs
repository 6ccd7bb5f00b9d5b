//! A small maths parser: tokenize, shunt to RPN, optionally resolve variables
//! against an async provider, then evaluate to an `f64`.

pub mod error;
pub mod expression;
pub mod parser;
pub mod provider;
pub mod smp;
pub mod token;

pub use error::{ComputeError, Error, ParseError, ParseErrorKind, ProviderError, ResolveError, Result};
pub use expression::{Expression, ResolveScope};
pub use provider::{MapVariableValueProvider, NoOpVariableValueProvider, VariableValueProvider};
pub use smp::{compute, compute_cache_only, compute_unresolved, parse, shared, Smp, SmpBuilder};
pub use token::{Operator, Parenthesis, Token};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
