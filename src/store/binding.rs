//! Projection of store state into form props, and the form dispatchers

use super::actions::AuthAction;
use super::runtime::StoreHandle;
use crate::state::{
    AuthState, FormController, FormKind, Profile, ProfileValues, SignUpValues, SubmitOutcome,
};

/// What the profile form reads from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileProps<'a> {
    pub profile: &'a Profile,
    pub profile_error: Option<&'a str>,
    pub loading: bool,
}

impl<'a> ProfileProps<'a> {
    pub fn from_state(state: &'a AuthState) -> Self {
        Self {
            profile: &state.profile,
            profile_error: state.profile_error.as_deref(),
            loading: state.loading_auth,
        }
    }
}

/// What the sign-up form reads from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupProps<'a> {
    pub auth_error: Option<&'a str>,
    pub loading: bool,
}

impl<'a> SignupProps<'a> {
    pub fn from_state(state: &'a AuthState) -> Self {
        Self {
            auth_error: state.auth_error.as_deref(),
            loading: state.loading_auth,
        }
    }
}

/// Fire-and-forget entry points the forms submit through
#[cfg_attr(test, mockall::automock)]
pub trait Dispatchers {
    fn submit_profile_update(&self, values: ProfileValues);
    fn submit_sign_up(&self, values: SignUpValues);
}

impl Dispatchers for StoreHandle {
    fn submit_profile_update(&self, values: ProfileValues) {
        self.dispatch(AuthAction::UpdateProfile(values));
    }

    fn submit_sign_up(&self, values: SignUpValues) {
        self.dispatch(AuthAction::SignUp(values));
    }
}

/// Submit a form through the dispatcher matching its kind
pub fn submit_form(form: &mut FormController, dispatchers: &dyn Dispatchers) -> SubmitOutcome {
    let kind = form.kind();
    let outcome = form.submit(|values| match kind {
        FormKind::Signup => dispatchers.submit_sign_up(SignUpValues::from_values(values)),
        FormKind::Profile => {
            dispatchers.submit_profile_update(ProfileValues::from_values(values))
        }
    });
    tracing::info!(form = ?kind, outcome = ?outcome, "form submitted");
    outcome
}
