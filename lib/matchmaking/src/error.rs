use stylematch_features::FeatureError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Duplicate user_id in snapshot: {0}")]
    DuplicateUserId(String),

    #[error("A background rebuild is already running")]
    RebuildInProgress,

    #[error("Failed to start rebuild thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Core(#[from] stylematch_core::Error),
}
