//! Snapshot
//!
//! The immutable unit matching runs against: one round's profiles, their
//! encoded vectors, an id lookup and the neighbor index over the vectors.
//! Any profile change means building a new snapshot.

use crate::{MatchError, MatchOutcome, Result};
use ahash::AHashMap;
use stylematch_core::{NeighborIndex, Vector};
use stylematch_features::{EncodedProfile, FeatureEncoder, UserProfile};

#[derive(Debug, Clone)]
pub struct Snapshot {
    profiles: Vec<EncodedProfile>,
    feature_names: Vec<String>,
    rows: AHashMap<String, usize>,
    index: NeighborIndex,
    catalog_version: u32,
}

impl Snapshot {
    /// Encode `profiles` and index them. Rows keep input order.
    pub fn build(profiles: Vec<UserProfile>, encoder: &FeatureEncoder) -> Result<Self> {
        let mut rows = AHashMap::with_capacity(profiles.len());
        for (row, profile) in profiles.iter().enumerate() {
            if rows.insert(profile.user_id.clone(), row).is_some() {
                return Err(MatchError::DuplicateUserId(profile.user_id.clone()));
            }
        }

        let batch = encoder.encode(&profiles);
        let index = NeighborIndex::build(batch.matrix)?;

        tracing::debug!(
            profiles = batch.profiles.len(),
            dim = encoder.dim(),
            "built snapshot"
        );

        Ok(Self {
            profiles: batch.profiles,
            feature_names: batch.feature_names,
            rows,
            index,
            catalog_version: encoder.catalog().version(),
        })
    }

    /// A snapshot with no profiles
    pub fn empty(encoder: &FeatureEncoder) -> Self {
        Self {
            profiles: Vec::new(),
            feature_names: encoder.feature_names(),
            rows: AHashMap::new(),
            index: NeighborIndex::default(),
            catalog_version: encoder.catalog().version(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Row position of a user, by exact id
    pub fn row_of(&self, user_id: &str) -> Option<usize> {
        self.rows.get(user_id).copied()
    }

    pub fn profile(&self, row: usize) -> Option<&EncodedProfile> {
        self.profiles.get(row)
    }

    pub fn vector(&self, row: usize) -> Option<&Vector> {
        self.index.row(row)
    }

    pub fn index(&self) -> &NeighborIndex {
        &self.index
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn catalog_version(&self) -> u32 {
        self.catalog_version
    }

    /// Up to `k` nearest opponents for `user_id`
    pub fn find_opponents(&self, user_id: &str, k: usize) -> MatchOutcome {
        crate::matcher::match_opponents(self, user_id, k)
    }

    /// Opponent ids only, nearest first; empty when there is no match
    pub fn opponent_ids(&self, user_id: &str, k: usize) -> Vec<String> {
        self.find_opponents(user_id, k).into_user_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stylematch_features::{FeatureWeights, Gender, StyleCatalog};

    fn encoder() -> FeatureEncoder {
        let catalog = StyleCatalog::new(1, ["Streetwear", "Minimalist", "Sporty"]).unwrap();
        FeatureEncoder::new(Arc::new(catalog), FeatureWeights::default()).unwrap()
    }

    #[test]
    fn test_build_keeps_row_order() {
        let enc = encoder();
        let snapshot = Snapshot::build(
            vec![
                UserProfile::new("a", Gender::Male, 20, ["Sporty"]),
                UserProfile::new("b", Gender::Female, 30, Vec::<String>::new()),
            ],
            &enc,
        )
        .unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.row_of("a"), Some(0));
        assert_eq!(snapshot.row_of("b"), Some(1));
        assert_eq!(snapshot.row_of("c"), None);
        assert_eq!(snapshot.profile(1).unwrap().profile.user_id, "b");
        assert_eq!(snapshot.vector(0).unwrap().dim(), 5);
        assert_eq!(snapshot.feature_names().len(), 5);
        assert_eq!(snapshot.catalog_version(), 1);
    }

    #[test]
    fn test_duplicate_user_id_rejected() {
        let enc = encoder();
        let result = Snapshot::build(
            vec![
                UserProfile::new("a", Gender::Male, 20, ["Sporty"]),
                UserProfile::new("a", Gender::Female, 30, ["Sporty"]),
            ],
            &enc,
        );
        assert!(matches!(result, Err(MatchError::DuplicateUserId(id)) if id == "a"));
    }

    #[test]
    fn test_empty_snapshot() {
        let enc = encoder();
        let built = Snapshot::build(Vec::new(), &enc).unwrap();
        let empty = Snapshot::empty(&enc);
        assert!(built.is_empty());
        assert!(empty.is_empty());
        assert_eq!(empty.feature_names().len(), 5);
    }
}
