//! # stylematch
//!
//! Opponent matching for outfit battles.
//!
//! Users are encoded as weighted feature vectors (gender, normalized age,
//! one-hot style preferences) and paired with their nearest neighbors under
//! Euclidean distance. Style carries the most weight, so shared taste drives
//! the pairing more than demographics.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! stylematch --profiles demos/mock_users.json --user u1 -k 3
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use stylematch::prelude::*;
//!
//! let encoder = MatchConfig::default().into_encoder().unwrap();
//! let service = MatchmakingService::with_profiles(encoder, vec![
//!     UserProfile::new("u1", Gender::Female, 22, ["Streetwear", "Minimalist"]),
//!     UserProfile::new("u2", Gender::Female, 24, ["Streetwear", "Minimalist"]),
//!     UserProfile::new("u3", Gender::Male, 20, ["Sporty"]),
//! ]).unwrap();
//!
//! let opponents = service.match_opponents("u1", 1).into_user_ids();
//! assert_eq!(opponents, vec!["u2"]);
//! ```
//!
//! ## Crate Structure
//!
//! - `stylematch-core` - Vectors, Euclidean distance, exact neighbor index
//! - `stylematch-features` - Style catalog, profiles, weighted encoding
//! - `stylematch-matchmaking` - Snapshots, matching, copy-on-write generations

pub use stylematch_core::{Error, Neighbor, NeighborIndex, Result, Vector};

pub use stylematch_features::{
    load_profiles, EncodedBatch, EncodedProfile, FeatureEncoder, FeatureError, FeatureWeights,
    Gender, ProfileRecord, StyleCatalog, UserProfile,
};

pub use stylematch_matchmaking::{
    match_opponents, Generation, GenerationStore, MatchConfig, MatchError, MatchOutcome,
    MatchmakingService, Opponent, Snapshot,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FeatureEncoder, FeatureWeights, Gender, MatchConfig, MatchError, MatchOutcome,
        MatchmakingService, NeighborIndex, Opponent, Snapshot, StyleCatalog, UserProfile, Vector,
    };
}
