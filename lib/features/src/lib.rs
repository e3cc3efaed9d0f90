//! # stylematch Features
//!
//! Turns user profiles into weighted numeric vectors.
//!
//! ## Overview
//!
//! Each profile becomes a vector of dimension `2 + N` for a catalog of `N`
//! styles:
//!
//! ```text
//! [ gender_code * Wg | age_norm * Wa | style_1 * Ws ... style_N * Ws ]
//! ```
//!
//! - gender: male 0, female 1, anything else 2
//! - age: `age / 100`, clipped to `[0, 1]`
//! - styles: one-hot against the [`StyleCatalog`], case-insensitive,
//!   unknown styles ignored
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stylematch_features::{FeatureEncoder, FeatureWeights, Gender, StyleCatalog, UserProfile};
//!
//! let catalog = StyleCatalog::new(1, ["Streetwear", "Minimalist", "Sporty"]).unwrap();
//! let encoder = FeatureEncoder::new(Arc::new(catalog), FeatureWeights::default()).unwrap();
//!
//! let profile = UserProfile::new("u1", Gender::Female, 22, ["streetwear"]);
//! let vector = encoder.encode_profile(&profile);
//! assert_eq!(vector.dim(), 5);
//! ```

pub mod catalog;
pub mod encoder;
pub mod error;
pub mod profile;
pub mod weights;

pub use catalog::{StyleCatalog, DEFAULT_STYLES};
pub use encoder::{normalize_age, EncodedBatch, EncodedProfile, FeatureEncoder};
pub use error::{FeatureError, Result};
pub use profile::{load_profiles, Gender, ProfileRecord, UserProfile};
pub use weights::FeatureWeights;
