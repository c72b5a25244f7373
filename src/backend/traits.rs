//! Trait abstraction for the auth backend to enable mocking in tests

use crate::state::{Profile, ProfileValues, SignUpValues};
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by the backend. The store shows them as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("The email address is already in use by another account.")]
    EmailInUse,
    #[error("Password should be at least {min} characters.")]
    WeakPassword { min: usize },
    #[error("You must be signed in to update your profile.")]
    NotSignedIn,
    #[error("Network error")]
    Unavailable,
}

/// Trait for backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Profile of the signed-in user, `None` when signed out
    async fn current_profile(&self) -> Result<Option<Profile>, BackendError>;

    /// Create an account, sign it in, and return its profile
    async fn sign_up(&self, values: &SignUpValues) -> Result<Profile, BackendError>;

    /// Update the signed-in user's profile
    async fn update_profile(&self, values: &ProfileValues) -> Result<Profile, BackendError>;
}
