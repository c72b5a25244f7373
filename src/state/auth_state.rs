//! Store-owned authentication state, read-only to the forms

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile document of the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The profile has been fetched; forms must not render before this
    pub is_loaded: bool,
    /// Loaded, but no user is signed in
    pub is_empty: bool,
    pub uid: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// A loaded profile with no signed-in user
    pub fn empty() -> Self {
        Self {
            is_loaded: true,
            is_empty: true,
            ..Default::default()
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Snapshot published by the store after every action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub loading_auth: bool,
    pub auth_error: Option<String>,
    pub profile_error: Option<String>,
    pub profile: Profile,
    /// Sign-up and profile-update requests finished so far, success or failure
    pub settled_requests: u64,
}

impl AuthState {
    /// Initial state for a session whose profile is already known
    #[cfg(test)]
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }
}
