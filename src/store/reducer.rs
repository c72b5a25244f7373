//! Pure state transitions

use super::actions::AuthAction;
use crate::state::{AuthState, Profile};

/// Compute the next state. Start actions raise the loading flag and clear the
/// matching error; results lower it, count the request as settled, and record
/// the profile or the error.
pub fn reduce(state: &AuthState, action: &AuthAction) -> AuthState {
    let mut next = state.clone();
    match action {
        AuthAction::LoadProfile => {}
        AuthAction::ProfileLoaded(profile) => {
            next.profile = profile.clone();
        }
        AuthAction::ProfileLoadFailed(error) => {
            next.profile = Profile::empty();
            next.profile_error = Some(error.clone());
        }
        AuthAction::SignUp(_) => {
            next.loading_auth = true;
            next.auth_error = None;
        }
        AuthAction::SignUpSucceeded(profile) => {
            next.loading_auth = false;
            next.settled_requests += 1;
            next.auth_error = None;
            next.profile = profile.clone();
        }
        AuthAction::SignUpFailed(error) => {
            next.loading_auth = false;
            next.settled_requests += 1;
            next.auth_error = Some(error.clone());
        }
        AuthAction::UpdateProfile(_) => {
            next.loading_auth = true;
            next.profile_error = None;
        }
        AuthAction::ProfileUpdated(profile) => {
            next.loading_auth = false;
            next.settled_requests += 1;
            next.profile_error = None;
            next.profile = profile.clone();
        }
        AuthAction::ProfileUpdateFailed(error) => {
            next.loading_auth = false;
            next.settled_requests += 1;
            next.profile_error = Some(error.clone());
        }
    }
    next
}
