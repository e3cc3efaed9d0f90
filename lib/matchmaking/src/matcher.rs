//! Opponent matching
//!
//! Queries the snapshot's index for `k + 1` neighbors of the user's own
//! row, drops that row, and keeps up to `k` of the rest. Self is removed by
//! row position, never by distance: two different users may share a vector.

use crate::Snapshot;
use serde::Serialize;

/// A matched opponent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opponent {
    pub user_id: String,
    pub distance: f32,
}

/// Result of a match request. Only `Opponents` carries ids; the other
/// variants say why there are none.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Nearest first. May hold fewer than `k`, or none when the user is
    /// alone in the snapshot.
    Opponents(Vec<Opponent>),
    UnknownUser,
    EmptySnapshot,
    NothingRequested,
}

impl MatchOutcome {
    /// True when the requesting user was found in the snapshot
    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Opponents(_))
    }

    pub fn opponents(&self) -> &[Opponent] {
        match self {
            MatchOutcome::Opponents(opponents) => opponents,
            _ => &[],
        }
    }

    pub fn into_user_ids(self) -> Vec<String> {
        match self {
            MatchOutcome::Opponents(opponents) => {
                opponents.into_iter().map(|o| o.user_id).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Up to `k` users nearest to `user_id`, nearest first, never including
/// `user_id` itself.
pub fn match_opponents(snapshot: &Snapshot, user_id: &str, k: usize) -> MatchOutcome {
    if snapshot.is_empty() {
        return MatchOutcome::EmptySnapshot;
    }
    if k == 0 {
        return MatchOutcome::NothingRequested;
    }
    let Some(row) = snapshot.row_of(user_id) else {
        return MatchOutcome::UnknownUser;
    };

    // One extra slot for the user's own row
    let m = k.saturating_add(1).min(snapshot.len());
    let hits = match snapshot.index().query_row(row, m) {
        Ok(hits) => hits,
        Err(e) => {
            // rows come from the snapshot's own id map
            tracing::error!(user_id, row, error = %e, "id map and index disagree");
            return MatchOutcome::UnknownUser;
        }
    };

    let opponents = hits
        .into_iter()
        .filter(|hit| hit.row != row)
        .take(k)
        .filter_map(|hit| {
            snapshot.profile(hit.row).map(|p| Opponent {
                user_id: p.profile.user_id.clone(),
                distance: hit.distance,
            })
        })
        .collect();

    MatchOutcome::Opponents(opponents)
}
