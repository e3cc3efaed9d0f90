//! # stylematch Matchmaking
//!
//! Pairs users for outfit battles by similarity of style and demographics.
//!
//! ## Flow
//!
//! ```text
//! profiles ──> FeatureEncoder ──> weighted matrix ──> NeighborIndex
//!                                                        │
//!    match(user, k) ── query k+1 nearest to user's row ──┘
//!                      drop the user's own row
//!                      keep up to k ids, nearest first
//! ```
//!
//! A [`Snapshot`] bundles one round's profiles with their index. For
//! serving, [`GenerationStore`] publishes snapshots copy-on-write so
//! readers never block on a rebuild.
//!
//! ## Example
//!
//! ```rust
//! use stylematch_matchmaking::{MatchConfig, Snapshot};
//! use stylematch_features::{Gender, UserProfile};
//!
//! let encoder = MatchConfig::default().into_encoder().unwrap();
//! let snapshot = Snapshot::build(vec![
//!     UserProfile::new("u1", Gender::Female, 22, ["Streetwear", "Minimalist"]),
//!     UserProfile::new("u2", Gender::Female, 24, ["Streetwear", "Minimalist"]),
//!     UserProfile::new("u3", Gender::Male, 20, ["Sporty"]),
//! ], &encoder).unwrap();
//!
//! assert_eq!(snapshot.opponent_ids("u1", 1), vec!["u2"]);
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod matcher;
pub mod service;
pub mod snapshot;

pub use config::MatchConfig;
pub use error::{MatchError, Result};
pub use generation::{Generation, GenerationStore};
pub use matcher::{match_opponents, MatchOutcome, Opponent};
pub use service::MatchmakingService;
pub use snapshot::Snapshot;
