//! Configured parser instances and the shared default instance.

use crate::error::{ParseError, Result};
use crate::expression::{Expression, ResolveScope};
use crate::parser::parse_rpn;
use crate::provider::{NoOpVariableValueProvider, VariableValueProvider};
use std::sync::Arc;

lazy_static::lazy_static! {
    static ref SHARED: Smp = Smp::default();
}

/// The default instance: no-op provider, ambient runtime scope.
pub fn shared() -> &'static Smp {
    &SHARED
}

/// A parser configured with a variable value provider and a resolve scope.
///
/// Cloning is cheap; clones share the provider.
#[derive(Clone)]
pub struct Smp {
    pub(crate) provider: Arc<dyn VariableValueProvider>,
    pub(crate) scope: ResolveScope,
}

impl Smp {
    pub fn builder() -> SmpBuilder {
        SmpBuilder::default()
    }

    pub fn provider(&self) -> &Arc<dyn VariableValueProvider> {
        &self.provider
    }

    pub fn scope(&self) -> &ResolveScope {
        &self.scope
    }

    /// Parse `input` into an RPN expression bound to this instance.
    pub fn parse(&self, input: &str) -> std::result::Result<Expression, ParseError> {
        let tokens = parse_rpn(input)?;
        Ok(Expression::new(self.clone(), tokens))
    }

    pub fn compute_unresolved(&self, input: &str) -> Result<f64> {
        Ok(self.parse(input)?.compute_unresolved()?)
    }

    pub async fn compute(&self, input: &str) -> Result<f64> {
        self.parse(input)?.compute().await
    }

    pub fn compute_cache_only(&self, input: &str, fallback: f64) -> Result<f64> {
        Ok(self.parse(input)?.compute_cache_only(fallback)?)
    }
}

impl Default for Smp {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Smp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Smp").field("scope", &self.scope).finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct SmpBuilder {
    provider: Option<Arc<dyn VariableValueProvider>>,
    scope: Option<ResolveScope>,
}

impl SmpBuilder {
    pub fn provider(mut self, provider: impl VariableValueProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    pub fn shared_provider(mut self, provider: Arc<dyn VariableValueProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn scope(mut self, scope: ResolveScope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn build(self) -> Smp {
        Smp {
            provider: self
                .provider
                .unwrap_or_else(|| Arc::new(NoOpVariableValueProvider)),
            scope: self.scope.unwrap_or_default(),
        }
    }
}

/// Parse with the shared instance.
pub fn parse(input: &str) -> std::result::Result<Expression, ParseError> {
    shared().parse(input)
}

pub fn compute_unresolved(input: &str) -> Result<f64> {
    shared().compute_unresolved(input)
}

pub async fn compute(input: &str) -> Result<f64> {
    shared().compute(input).await
}

pub fn compute_cache_only(input: &str, fallback: f64) -> Result<f64> {
    shared().compute_cache_only(input, fallback)
}
