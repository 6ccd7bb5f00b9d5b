//! Sources of variable values consulted during resolution.

mod map;
mod noop;

pub use map::MapVariableValueProvider;
pub use noop::NoOpVariableValueProvider;

use crate::error::ProviderError;
use async_trait::async_trait;

/// Provider of values for variables.
///
/// Lookups run concurrently from several tasks, so implementations must be
/// `Send + Sync`. Any error returned surfaces as
/// [`crate::ResolveError::VariableLookupFailed`].
#[async_trait]
pub trait VariableValueProvider: Send + Sync {
    /// Return the value of the variable called `name`.
    async fn get_value(&self, name: &str) -> Result<f64, ProviderError>;

    /// Value already known without an async lookup, used by cache-only compute.
    fn cached_value(&self, _name: &str) -> Option<f64> {
        None
    }
}
