//! User profiles
//!
//! [`ProfileRecord`] is the loose shape a profile store hands over;
//! [`UserProfile`] is the validated record the encoder works on.

use crate::{FeatureError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Normalized gender. Anything unrecognized, including a missing value,
/// is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|g| g.trim().to_lowercase()).as_deref() {
            Some("male") => Gender::Male,
            Some("female") => Gender::Female,
            _ => Gender::Other,
        }
    }

    /// Numeric code: male 0, female 1, other 2
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Other => 2,
        }
    }
}

/// A validated user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub user_id: String,
    pub gender: Gender,
    pub age: i64,
    /// Declared styles. Order is irrelevant and duplicates collapse.
    pub style_preferences: BTreeSet<String>,
}

impl UserProfile {
    pub fn new<I, S>(user_id: impl Into<String>, gender: Gender, age: i64, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_id: user_id.into(),
            gender,
            age,
            style_preferences: preferences.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw profile as supplied by the profile store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(alias = "_id", alias = "id")]
    pub user_id: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default, alias = "style_preferences")]
    pub preferences: Option<Vec<String>>,
}

impl TryFrom<ProfileRecord> for UserProfile {
    type Error = FeatureError;

    /// Gender is normalized silently. Age has no safe default, so a missing
    /// or non-integer age fails here.
    fn try_from(record: ProfileRecord) -> Result<Self> {
        let user_id = record.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(FeatureError::EmptyUserId);
        }

        let age = match record.age {
            None | Some(Value::Null) => return Err(FeatureError::MissingAge(user_id)),
            Some(value) => match parse_age(&value) {
                Some(age) => age,
                None => {
                    return Err(FeatureError::InvalidAge {
                        user_id,
                        value: value.to_string(),
                    })
                }
            },
        };

        Ok(UserProfile {
            gender: Gender::from_raw(record.gender.as_deref()),
            age,
            style_preferences: record.preferences.unwrap_or_default().into_iter().collect(),
            user_id,
        })
    }
}

fn parse_age(value: &Value) -> Option<i64> {
    if let Some(age) = value.as_i64() {
        return Some(age);
    }
    // 22.0 is still an integer age
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}

/// Parse a JSON array of profile records into validated profiles
pub fn load_profiles(json: &str) -> Result<Vec<UserProfile>> {
    let records: Vec<ProfileRecord> = serde_json::from_str(json)?;
    records.into_iter().map(UserProfile::try_from).collect()
}
