//! Wire types exchanged with the external Auth API.
//!
//! DESIGN
//! ======
//! Field names follow the Auth API's snake_case JSON. Request types double as
//! the modal's submit payloads so validation happens once, before anything
//! is serialized.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Self-reported experience level collected at signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire and `<option value>` form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse an `<option value>`; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }
}

/// Login input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupProfile {
    pub email: String,
    pub password: String,
    pub experience_level: ExperienceLevel,
}

/// Successful login body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Failure body: `detail` is either a plain message or a list of field
/// errors each carrying `msg`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First human-readable message found in the body.
    pub fn into_message(self) -> Option<String> {
        let from_detail = match self.detail {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Array(items)) => items
                .into_iter()
                .find_map(|item| item.get("msg").and_then(|m| m.as_str()).map(str::to_owned)),
            _ => None,
        };
        from_detail.or(self.message).filter(|s| !s.trim().is_empty())
    }
}
