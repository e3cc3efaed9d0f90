use crate::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stylematch_features::{FeatureEncoder, FeatureWeights, StyleCatalog};

/// Matching configuration. Must stay fixed for the lifetime of a snapshot;
/// `catalog.version` identifies it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default)]
    pub catalog: StyleCatalog,
    #[serde(default)]
    pub weights: FeatureWeights,
}

impl MatchConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MatchError::InvalidConfig(e.to_string()))
    }

    pub fn into_encoder(self) -> Result<FeatureEncoder> {
        Ok(FeatureEncoder::new(Arc::new(self.catalog), self.weights)?)
    }
}
