use crate::{FeatureError, Result, StyleCatalog};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GENDER_WEIGHT: f32 = 0.5;
pub const DEFAULT_AGE_WEIGHT: f32 = 0.5;
pub const DEFAULT_STYLE_WEIGHT: f32 = 2.0;

/// Per-group scale factors applied before Euclidean distance.
///
/// Style outweighs gender and age by default, so shared taste drives
/// matching more than demographics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    #[serde(default = "default_gender")]
    pub gender: f32,
    #[serde(default = "default_age")]
    pub age: f32,
    #[serde(default = "default_style")]
    pub style: f32,
}

fn default_gender() -> f32 {
    DEFAULT_GENDER_WEIGHT
}

fn default_age() -> f32 {
    DEFAULT_AGE_WEIGHT
}

fn default_style() -> f32 {
    DEFAULT_STYLE_WEIGHT
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            gender: DEFAULT_GENDER_WEIGHT,
            age: DEFAULT_AGE_WEIGHT,
            style: DEFAULT_STYLE_WEIGHT,
        }
    }
}

impl FeatureWeights {
    pub fn new(gender: f32, age: f32, style: f32) -> Self {
        Self { gender, age, style }
    }

    pub fn validate(&self) -> Result<()> {
        for (feature, value) in [("gender", self.gender), ("age", self.age), ("style", self.style)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FeatureError::InvalidWeight { feature, value });
            }
        }
        Ok(())
    }

    /// `[Wg, Wa, Ws, ..., Ws]` with one style weight per catalog entry
    pub fn as_vector(&self, catalog: &StyleCatalog) -> Vec<f32> {
        let mut weights = Vec::with_capacity(2 + catalog.len());
        weights.push(self.gender);
        weights.push(self.age);
        weights.extend(std::iter::repeat(self.style).take(catalog.len()));
        weights
    }
}
