use super::VariableValueProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No value for variable '{0}'")]
pub struct MissingVariable(pub String);

/// Provider backed by a fixed name → value table.
///
/// Names absent from the table fail with [`MissingVariable`]. Every entry also
/// counts as cached for [`crate::Expression::compute_cache_only`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapVariableValueProvider {
    values: HashMap<String, f64>,
}

impl MapVariableValueProvider {
    pub fn new(values: HashMap<String, f64>) -> Self {
        Self { values }
    }

    /// Build the table from a JSON object such as `{"x": 5, "rate": 0.25}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let values: HashMap<String, f64> = serde_json::from_str(json)?;
        Ok(Self::new(values))
    }

    pub fn values(&self) -> &HashMap<String, f64> {
        &self.values
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MapVariableValueProvider {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[async_trait]
impl VariableValueProvider for MapVariableValueProvider {
    async fn get_value(&self, name: &str) -> Result<f64, ProviderError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| Box::new(MissingVariable(name.to_string())) as ProviderError)
    }

    fn cached_value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}
