// Integration tests for stylematch
use std::io::Write;
use std::sync::Arc;
use stylematch::prelude::*;
use stylematch::{load_profiles, FeatureError};

fn scenario_encoder() -> FeatureEncoder {
    let catalog = StyleCatalog::new(1, ["Streetwear", "Minimalist", "Sporty"]).unwrap();
    FeatureEncoder::new(Arc::new(catalog), FeatureWeights::default()).unwrap()
}

fn scenario_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile::new("u1", Gender::Female, 22, ["Streetwear", "Minimalist"]),
        UserProfile::new("u2", Gender::Female, 24, ["Streetwear", "Minimalist"]),
        UserProfile::new("u3", Gender::Male, 20, ["Sporty"]),
    ]
}

fn mock_users() -> Vec<UserProfile> {
    load_profiles(include_str!("../demos/mock_users.json")).unwrap()
}

#[test]
fn test_closest_style_twin_is_matched() {
    let snapshot = Snapshot::build(scenario_profiles(), &scenario_encoder()).unwrap();
    assert_eq!(snapshot.opponent_ids("u1", 1), vec!["u2"]);
}

#[test]
fn test_zero_requested_returns_nothing() {
    let snapshot = Snapshot::build(scenario_profiles(), &scenario_encoder()).unwrap();
    assert!(snapshot.opponent_ids("u1", 0).is_empty());
}

#[test]
fn test_absent_user_returns_nothing() {
    let snapshot = Snapshot::build(scenario_profiles(), &scenario_encoder()).unwrap();
    assert!(snapshot.opponent_ids("u404", 2).is_empty());
    assert_eq!(snapshot.find_opponents("u404", 2), MatchOutcome::UnknownUser);
}

#[test]
fn test_single_user_snapshot_returns_nothing() {
    let profiles = vec![scenario_profiles().remove(0)];
    let snapshot = Snapshot::build(profiles, &scenario_encoder()).unwrap();
    assert!(snapshot.opponent_ids("u1", 3).is_empty());
}

#[test]
fn test_mock_dataset_ranking() {
    let encoder = MatchConfig::default().into_encoder().unwrap();
    let snapshot = Snapshot::build(mock_users(), &encoder).unwrap();

    assert_eq!(snapshot.opponent_ids("u1", 3), vec!["u5", "u2", "u6"]);
    assert_eq!(snapshot.opponent_ids("u1", 10), vec!["u5", "u2", "u6", "u4", "u3"]);
}

#[test]
fn test_result_properties_over_mock_dataset() {
    let encoder = MatchConfig::default().into_encoder().unwrap();
    let users = mock_users();
    let n = users.len();
    let snapshot = Snapshot::build(users.clone(), &encoder).unwrap();

    for user in &users {
        for k in 0..=n + 1 {
            let outcome = snapshot.find_opponents(&user.user_id, k);
            let opponents = outcome.opponents();
            if k > 0 {
                assert_eq!(opponents.len(), k.min(n - 1));
            }
            assert!(opponents.iter().all(|o| o.user_id != user.user_id));
            assert!(opponents.windows(2).all(|w| w[0].distance <= w[1].distance));
        }
    }
}

#[test]
fn test_encoded_dimension_follows_catalog() {
    for styles in [vec!["A"], vec!["A", "B", "C", "D", "E"]] {
        let catalog = StyleCatalog::new(1, styles.clone()).unwrap();
        let encoder = FeatureEncoder::new(Arc::new(catalog), FeatureWeights::default()).unwrap();
        let batch = encoder.encode(&mock_users());
        assert!(batch.matrix.iter().all(|v| v.dim() == 2 + styles.len()));
        assert_eq!(batch.feature_names.len(), 2 + styles.len());
    }
}

#[test]
fn test_index_distances_non_decreasing() {
    let encoder = MatchConfig::default().into_encoder().unwrap();
    let batch = encoder.encode(&mock_users());
    let index = NeighborIndex::build(batch.matrix).unwrap();
    for row in 0..index.len() {
        let hits = index.query_row(row, index.len()).unwrap();
        assert_eq!(hits[0].row, row);
        assert_eq!(hits[0].distance, 0.0);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    }
}

#[test]
fn test_config_file_changes_ranking() {
    // Weight only age: nearest by age wins regardless of style
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"weights": {{"gender": 0.0, "age": 1.0, "style": 0.0}}}}"#).unwrap();

    let raw = std::fs::read_to_string(file.path()).unwrap();
    let encoder = MatchConfig::from_json(&raw).unwrap().into_encoder().unwrap();
    let snapshot = Snapshot::build(mock_users(), &encoder).unwrap();

    // u1 is 22; u4 is 21 and u5 is 23, everyone else two or more years off
    let mut ids = snapshot.opponent_ids("u1", 2);
    ids.sort();
    assert_eq!(ids, vec!["u4", "u5"]);
}

#[test]
fn test_bad_records_fail_fast() {
    let err = load_profiles(r#"[{"user_id": "u1", "gender": "female"}]"#).unwrap_err();
    assert_eq!(err, FeatureError::MissingAge("u1".to_string()));

    let err = load_profiles(r#"[{"user_id": "u1", "age": "old"}]"#).unwrap_err();
    assert!(matches!(err, FeatureError::InvalidAge { .. }));
}

#[test]
fn test_service_generations() {
    let service = MatchmakingService::with_profiles(
        MatchConfig::default().into_encoder().unwrap(),
        scenario_profiles(),
    )
    .unwrap();
    let before = service.generation();

    service.refresh(mock_users()).unwrap();

    assert_eq!(before.snapshot().opponent_ids("u1", 1), vec!["u2"]);
    assert_eq!(service.match_opponents("u1", 1).into_user_ids(), vec!["u5"]);
    assert_eq!(service.generation().id(), before.id() + 1);
}
