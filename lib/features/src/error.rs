use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors raised while building catalogs and profiles or encoding them
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("Style catalog entry {0} is empty")]
    EmptyStyle(usize),

    #[error("Style '{0}' appears more than once in the catalog")]
    DuplicateStyle(String),

    #[error("Weight for '{feature}' must be finite and non-negative, got {value}")]
    InvalidWeight { feature: &'static str, value: f32 },

    #[error("Profile has an empty user_id")]
    EmptyUserId,

    #[error("Profile '{0}' has no age")]
    MissingAge(String),

    #[error("Profile '{user_id}' has a non-integer age: {value}")]
    InvalidAge { user_id: String, value: String },

    #[error("Malformed profile data: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FeatureError {
    fn from(e: serde_json::Error) -> Self {
        FeatureError::Malformed(e.to_string())
    }
}
