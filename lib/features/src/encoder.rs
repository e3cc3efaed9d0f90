//! Feature encoder
//!
//! Turns profiles into weighted vectors laid out as
//! `[gender_code * Wg, age_norm * Wa, style_1 * Ws, ..., style_N * Ws]`.
//! Plain Euclidean distance between two encoded vectors is the weighted
//! Euclidean distance between the raw features.

use crate::{FeatureWeights, Result, StyleCatalog, UserProfile};
use serde::Serialize;
use std::sync::Arc;
use stylematch_core::Vector;

pub const GENDER_FEATURE: &str = "gender_enc";
pub const AGE_FEATURE: &str = "age_norm";
pub const STYLE_FEATURE_PREFIX: &str = "style_";

/// A profile together with the values derived from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedProfile {
    pub profile: UserProfile,
    pub gender_code: u8,
    pub age_norm: f32,
    /// Catalog positions of matched preferences, ascending
    pub styles: Vec<usize>,
}

/// Output of encoding a batch of profiles, row-aligned with the input
#[derive(Debug, Clone)]
pub struct EncodedBatch {
    pub profiles: Vec<EncodedProfile>,
    pub matrix: Vec<Vector>,
    pub feature_names: Vec<String>,
}

/// Encodes profiles against one catalog and one set of weights
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    catalog: Arc<StyleCatalog>,
    weights: FeatureWeights,
    weight_vector: Vec<f32>,
}

impl FeatureEncoder {
    pub fn new(catalog: Arc<StyleCatalog>, weights: FeatureWeights) -> Result<Self> {
        weights.validate()?;
        let weight_vector = weights.as_vector(&catalog);
        Ok(Self {
            catalog,
            weights,
            weight_vector,
        })
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    pub fn weights(&self) -> FeatureWeights {
        self.weights
    }

    /// Vector dimension: gender, age, then one per catalog style
    #[inline]
    pub fn dim(&self) -> usize {
        2 + self.catalog.len()
    }

    /// Name of every dimension, in layout order
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.dim());
        names.push(GENDER_FEATURE.to_string());
        names.push(AGE_FEATURE.to_string());
        names.extend(
            self.catalog
                .styles()
                .iter()
                .map(|s| format!("{STYLE_FEATURE_PREFIX}{s}")),
        );
        names
    }

    /// Enrich a profile with its derived values
    pub fn enrich(&self, profile: &UserProfile) -> EncodedProfile {
        let mut styles: Vec<usize> = profile
            .style_preferences
            .iter()
            .filter_map(|p| self.catalog.position(p))
            .collect();
        styles.sort_unstable();
        styles.dedup();

        EncodedProfile {
            profile: profile.clone(),
            gender_code: profile.gender.code(),
            age_norm: normalize_age(profile.age),
            styles,
        }
    }

    /// Unweighted `[gender_code, age_norm, one-hot styles]`
    pub fn raw_features(&self, profile: &UserProfile) -> Vec<f32> {
        self.raw_from_enriched(&self.enrich(profile))
    }

    /// Weighted feature vector for one profile
    pub fn encode_profile(&self, profile: &UserProfile) -> Vector {
        self.weighted(&self.enrich(profile))
    }

    /// Encode a batch, keeping input order
    pub fn encode(&self, profiles: &[UserProfile]) -> EncodedBatch {
        let enriched: Vec<EncodedProfile> = profiles.iter().map(|p| self.enrich(p)).collect();
        let matrix = enriched.iter().map(|e| self.weighted(e)).collect();

        let unmatched: usize = enriched
            .iter()
            .map(|e| e.profile.style_preferences.len() - e.styles.len())
            .sum();
        tracing::debug!(
            profiles = enriched.len(),
            dim = self.dim(),
            unmatched_preferences = unmatched,
            catalog_version = self.catalog.version(),
            "encoded profiles"
        );

        EncodedBatch {
            profiles: enriched,
            matrix,
            feature_names: self.feature_names(),
        }
    }

    /// Weighted Euclidean distance between two profiles
    pub fn weighted_distance(&self, a: &UserProfile, b: &UserProfile) -> f32 {
        self.encode_profile(a).l2_distance(&self.encode_profile(b))
    }

    fn raw_from_enriched(&self, encoded: &EncodedProfile) -> Vec<f32> {
        let mut raw = vec![0.0f32; self.dim()];
        raw[0] = f32::from(encoded.gender_code);
        raw[1] = encoded.age_norm;
        for &pos in &encoded.styles {
            raw[2 + pos] = 1.0;
        }
        raw
    }

    fn weighted(&self, encoded: &EncodedProfile) -> Vector {
        let raw = self.raw_from_enriched(encoded);
        Vector::new(
            raw.iter()
                .zip(self.weight_vector.iter())
                .map(|(x, w)| x * w)
                .collect(),
        )
    }
}

/// `age / 100` clipped to `[0, 1]`
#[inline]
pub fn normalize_age(age: i64) -> f32 {
    (age as f64 / 100.0).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gender;

    fn encoder() -> FeatureEncoder {
        let catalog = StyleCatalog::new(1, ["Streetwear", "Minimalist", "Sporty"]).unwrap();
        FeatureEncoder::new(Arc::new(catalog), FeatureWeights::default()).unwrap()
    }

    #[test]
    fn test_dimension_and_names() {
        let enc = encoder();
        assert_eq!(enc.dim(), 5);
        assert_eq!(
            enc.feature_names(),
            vec!["gender_enc", "age_norm", "style_Streetwear", "style_Minimalist", "style_Sporty"]
        );

        let default = FeatureEncoder::new(Arc::new(StyleCatalog::default()), FeatureWeights::default()).unwrap();
        assert_eq!(default.dim(), 22);
    }

    #[test]
    fn test_weighted_layout() {
        let enc = encoder();
        let p = UserProfile::new("u1", Gender::Female, 22, ["streetwear", "Sporty"]);
        let v = enc.encode_profile(&p);
        assert_eq!(v.as_slice(), &[0.5, 0.22f32 * 0.5, 2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_age_clamping() {
        assert_eq!(normalize_age(-5), 0.0);
        assert_eq!(normalize_age(0), 0.0);
        assert_eq!(normalize_age(50), 0.5);
        assert_eq!(normalize_age(100), 1.0);
        assert_eq!(normalize_age(150), 1.0);
    }

    #[test]
    fn test_unknown_preferences_ignored() {
        let enc = encoder();
        let p = UserProfile::new("u1", Gender::Male, 30, ["Goth", "Cottagecore"]);
        assert_eq!(enc.raw_features(&p)[2..], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_equivalent_preferences_are_idempotent() {
        let enc = encoder();
        let p = UserProfile::new("u1", Gender::Male, 30, ["Sporty", "sporty", " SPORTY "]);
        let raw = enc.raw_features(&p);
        assert_eq!(raw[2..], [0.0, 0.0, 1.0]);
        assert_eq!(enc.enrich(&p).styles, vec![2]);
    }

    #[test]
    fn test_style_change_only_touches_style_dims() {
        let enc = encoder();
        let a = enc.encode_profile(&UserProfile::new("u1", Gender::Other, 40, ["Streetwear"]));
        let b = enc.encode_profile(&UserProfile::new("u1", Gender::Other, 40, ["Minimalist", "Sporty"]));
        assert_eq!(a.as_slice()[..2], b.as_slice()[..2]);
        assert_ne!(a.as_slice()[2..], b.as_slice()[2..]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let enc = encoder();
        let profiles = vec![
            UserProfile::new("u1", Gender::Female, 22, ["Streetwear", "Minimalist"]),
            UserProfile::new("u2", Gender::Male, 67, ["Sporty"]),
        ];
        let first = enc.encode(&profiles);
        let second = enc.encode(&profiles);
        assert_eq!(first.matrix, second.matrix);
        for (a, b) in first.matrix.iter().zip(&second.matrix) {
            let bits_a: Vec<u32> = a.as_slice().iter().map(|x| x.to_bits()).collect();
            let bits_b: Vec<u32> = b.as_slice().iter().map(|x| x.to_bits()).collect();
            assert_eq!(bits_a, bits_b);
        }
        assert_eq!(first.profiles[1].gender_code, 0);
        assert_eq!(first.feature_names.len(), 5);
    }

    #[test]
    fn test_weighted_distance_matches_weighted_formula() {
        let enc = encoder();
        let a = UserProfile::new("a", Gender::Female, 22, ["Streetwear"]);
        let b = UserProfile::new("b", Gender::Male, 40, ["Sporty"]);
        let ra = enc.raw_features(&a);
        let rb = enc.raw_features(&b);
        let w = enc.weights().as_vector(enc.catalog());
        let expected: f32 = ra
            .iter()
            .zip(&rb)
            .zip(&w)
            .map(|((x, y), w)| w * w * (x - y) * (x - y))
            .sum::<f32>()
            .sqrt();
        assert!((enc.weighted_distance(&a, &b) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_rejects_invalid_weights() {
        let catalog = Arc::new(StyleCatalog::default());
        assert!(FeatureEncoder::new(catalog, FeatureWeights::new(0.5, -0.5, 2.0)).is_err());
    }
}
