//! Application state definitions

use super::auth_state::AuthState;
use super::forms::{FormController, PostSubmit};
use serde::{Deserialize, Serialize};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Signup,
    Profile,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Signup => "Sign Up",
            Self::Profile => "Edit Profile",
        }
    }
}

/// Main application state
pub struct AppState {
    pub current_view: View,
    pub post_submit: PostSubmit,

    /// Latest snapshot from the store
    pub auth: AuthState,

    // Forms
    pub signup_form: FormController,
    /// Created once the profile is loaded for a signed-in user
    pub profile_form: Option<FormController>,

    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(current_view: View, post_submit: PostSubmit) -> Self {
        Self {
            current_view,
            post_submit,
            auth: AuthState::default(),
            signup_form: FormController::signup(post_submit),
            profile_form: None,
            status_message: None,
        }
    }

    /// Take a new store snapshot.
    ///
    /// The profile form is seeded the first time a signed-in profile shows up
    /// and is dropped again if the profile goes away. Later profile updates
    /// become the form's reset values but do not overwrite values the user is
    /// editing.
    pub fn apply_auth(&mut self, auth: AuthState) {
        let signed_in = auth.profile.is_loaded && !auth.profile.is_empty;
        let same_user = self
            .profile_form
            .as_ref()
            .is_some_and(|_| self.auth.profile.uid == auth.profile.uid);

        let names_changed = self.auth.profile.first_name != auth.profile.first_name
            || self.auth.profile.last_name != auth.profile.last_name;

        if !signed_in {
            self.profile_form = None;
        } else if !same_user {
            tracing::debug!(uid = ?auth.profile.uid, "seeding profile form");
            self.profile_form = Some(FormController::profile(&auth.profile, self.post_submit));
        } else if names_changed {
            if let Some(form) = self.profile_form.as_mut() {
                tracing::debug!(uid = ?auth.profile.uid, "rebasing profile form");
                form.rebase_profile(&auth.profile);
            }
        }
        self.auth = auth;
    }

    /// The form shown in the current view, if any
    pub fn active_form_mut(&mut self) -> Option<&mut FormController> {
        match self.current_view {
            View::Signup => Some(&mut self.signup_form),
            View::Profile => self.profile_form.as_mut(),
        }
    }

    pub fn active_form(&self) -> Option<&FormController> {
        match self.current_view {
            View::Signup => Some(&self.signup_form),
            View::Profile => self.profile_form.as_ref(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(View::default(), PostSubmit::default())
    }
}
