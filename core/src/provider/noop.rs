use super::VariableValueProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Variables are not supported in this parser!")]
pub struct VariablesUnsupported;

/// Provider that rejects every lookup. Variable-free expressions work unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpVariableValueProvider;

#[async_trait]
impl VariableValueProvider for NoOpVariableValueProvider {
    async fn get_value(&self, _name: &str) -> Result<f64, ProviderError> {
        Err(Box::new(VariablesUnsupported))
    }
}

#[cfg(test)]
mod noop_tests {
    use super::*;

    #[tokio::test]
    async fn test_every_lookup_fails() {
        let provider = NoOpVariableValueProvider;
        let err = provider.get_value("x").await.unwrap_err();
        assert!(err.downcast_ref::<VariablesUnsupported>().is_some());
        assert_eq!(provider.cached_value("x"), None);
    }
}
