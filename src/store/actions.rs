//! Actions understood by the store

use crate::state::{Profile, ProfileValues, SignUpValues};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Fetch the signed-in user's profile
    LoadProfile,
    ProfileLoaded(Profile),
    ProfileLoadFailed(String),

    /// Create an account from the sign-up form
    SignUp(SignUpValues),
    SignUpSucceeded(Profile),
    SignUpFailed(String),

    /// Save the profile form
    UpdateProfile(ProfileValues),
    ProfileUpdated(Profile),
    ProfileUpdateFailed(String),
}

impl AuthAction {
    /// Short name for logging; never includes payloads
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadProfile => "load_profile",
            Self::ProfileLoaded(_) => "profile_loaded",
            Self::ProfileLoadFailed(_) => "profile_load_failed",
            Self::SignUp(_) => "sign_up",
            Self::SignUpSucceeded(_) => "sign_up_succeeded",
            Self::SignUpFailed(_) => "sign_up_failed",
            Self::UpdateProfile(_) => "update_profile",
            Self::ProfileUpdated(_) => "profile_updated",
            Self::ProfileUpdateFailed(_) => "profile_update_failed",
        }
    }
}
