//! Concurrent variable resolution against a [`VariableValueProvider`].

use super::Expression;
use crate::error::ResolveError;
use crate::token::Token;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinSet;

/// Where lookup tasks are spawned.
///
/// A factory yielding a tokio runtime handle. The caller owns the runtime behind it;
/// resolution never outlives the call.
#[derive(Clone)]
pub struct ResolveScope {
    factory: Arc<dyn Fn() -> Option<Handle> + Send + Sync>,
}

impl ResolveScope {
    /// Use whichever tokio runtime the resolving task is running on.
    pub fn current() -> Self {
        Self::from_fn(|| Handle::try_current().ok())
    }

    /// Always spawn onto `handle`.
    pub fn with_handle(handle: Handle) -> Self {
        Self::from_fn(move || Some(handle.clone()))
    }

    pub fn from_fn<F>(factory: F) -> Self
    where
        F: Fn() -> Option<Handle> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    pub fn handle(&self) -> Option<Handle> {
        (self.factory)()
    }
}

impl Default for ResolveScope {
    fn default() -> Self {
        Self::current()
    }
}

impl std::fmt::Debug for ResolveScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveScope").finish_non_exhaustive()
    }
}

/// Look up every variable occurrence concurrently and substitute the results.
///
/// One task is spawned per occurrence, duplicates included. The first failure
/// wins; dropping the join set on return aborts the lookups still in flight.
pub(crate) async fn resolve(expression: &Expression) -> Result<Expression, ResolveError> {
    let names: Vec<String> = expression.variables().map(str::to_string).collect();
    if names.is_empty() {
        return Ok(expression.clone());
    }

    let handle = expression.smp.scope.handle().ok_or(ResolveError::NoRuntime)?;
    tracing::debug!(lookups = names.len(), "resolving variables");

    let mut lookups = JoinSet::new();
    for name in names {
        let provider = Arc::clone(&expression.smp.provider);
        lookups.spawn_on(
            async move {
                let result = provider.get_value(&name).await;
                (name, result)
            },
            &handle,
        );
    }

    let mut values: HashMap<String, f64> = HashMap::new();
    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((name, Ok(value))) => {
                values.insert(name, value);
            }
            Ok((variable, Err(cause))) => {
                tracing::debug!(%variable, error = %cause, "variable lookup failed");
                return Err(ResolveError::VariableLookupFailed { variable, cause });
            }
            Err(cause) => {
                tracing::debug!(error = %cause, "variable lookup task did not complete");
                return Err(ResolveError::Unknown { cause });
            }
        }
    }

    let tokens = expression
        .tokens()
        .iter()
        .map(|token| match token {
            Token::Variable(name) => match values.get(name) {
                Some(value) => Token::Constant(*value),
                None => token.clone(),
            },
            other => other.clone(),
        })
        .collect();

    Ok(Expression::new(expression.smp.clone(), tokens))
}
