//! Form controller: values, validation status, focus, and submit gating

use super::field::FormField;
use super::schema::Schema;
use super::values::{
    FieldErrors, FormValues, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD, PASSWORD_CONFIRMATION,
};
use crate::state::Profile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which account form a controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Signup,
    Profile,
}

impl FormKind {
    pub fn schema(self) -> Schema {
        match self {
            FormKind::Signup => Schema::signup(),
            FormKind::Profile => Schema::profile(),
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            FormKind::Signup => "Create an Account",
            FormKind::Profile => "Edit your Profile",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Signup => "Sign Up",
            FormKind::Profile => "Edit",
        }
    }

    /// Text shown while the store reports a request in flight
    pub fn loading_label(self) -> &'static str {
        match self {
            FormKind::Signup => "Signing up...",
            FormKind::Profile => "Updating...",
        }
    }

    fn fields(self) -> Vec<FormField> {
        match self {
            FormKind::Signup => vec![
                FormField::text(FIRST_NAME, "First Name"),
                FormField::text(LAST_NAME, "Last Name"),
                FormField::email(EMAIL, "Email"),
                FormField::password(PASSWORD, "Password"),
                FormField::password(PASSWORD_CONFIRMATION, "Confirm Password"),
            ],
            FormKind::Profile => vec![
                FormField::text(FIRST_NAME, "First Name"),
                FormField::text(LAST_NAME, "Last Name"),
            ],
        }
    }
}

/// What happens to the values after a successful dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostSubmit {
    /// Leave the values in place
    #[default]
    Keep,
    /// Restore the initial values and clear touched flags
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionState {
    pub is_submitting: bool,
    pub is_valid: bool,
}

/// Lifecycle of a form between user events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Valid,
    Submitting,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed validation; nothing was dispatched
    Blocked,
    /// The dispatcher was invoked with the current values
    Dispatched,
}

/// Owns a form's values and submission state
#[derive(Debug, Clone)]
pub struct FormController {
    kind: FormKind,
    schema: Schema,
    fields: Vec<FormField>,
    initial_values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<&'static str>,
    submission: SubmissionState,
    phase: FormPhase,
    post_submit: PostSubmit,
    submit_count: u32,
    /// Index into fields; `fields.len()` is the submit button row
    pub active_field_index: usize,
}

impl FormController {
    /// Create a controller seeded with `initial_values`; missing fields start empty
    pub fn new(kind: FormKind, initial_values: &FormValues, post_submit: PostSubmit) -> Self {
        let mut fields = kind.fields();
        for field in &mut fields {
            field.set_text(initial_values.get(field.name).to_string());
        }
        let mut controller = Self {
            kind,
            schema: kind.schema(),
            fields,
            initial_values: FormValues::new(),
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            submission: SubmissionState::default(),
            phase: FormPhase::Idle,
            post_submit,
            submit_count: 0,
            active_field_index: 0,
        };
        controller.initial_values = controller.values();
        controller.validate();
        controller
    }

    /// Empty sign-up form
    pub fn signup(post_submit: PostSubmit) -> Self {
        Self::new(FormKind::Signup, &FormValues::new(), post_submit)
    }

    /// Profile form seeded from loaded profile data
    pub fn profile(profile: &Profile, post_submit: PostSubmit) -> Self {
        Self::new(FormKind::Profile, &profile_seed(profile), post_submit)
    }

    /// Replace the values `reset` restores. A form still showing its old
    /// initial values picks up the new ones; edits in progress are kept.
    pub fn rebase(&mut self, seed: &FormValues) {
        let pristine = self.values() == self.initial_values;
        self.initial_values = self.fields.iter().fold(FormValues::new(), |values, field| {
            values.with(field.name, seed.get(field.name))
        });
        if pristine {
            for (name, value) in self.initial_values.clone().iter() {
                self.set_value(name, value);
            }
            self.touched.clear();
        }
        self.validate();
    }

    /// Seed the profile form from fresh profile data
    pub fn rebase_profile(&mut self, profile: &Profile) {
        self.rebase(&profile_seed(profile));
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Snapshot of the current values
    pub fn values(&self) -> FormValues {
        self.fields.iter().fold(FormValues::new(), |values, field| {
            values.with(field.name, field.as_text())
        })
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Error to show inline; only touched fields display theirs
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if self.is_touched(name) {
            self.errors.get(name)
        } else {
            None
        }
    }

    /// Submit is enabled only when valid and nothing is in flight
    pub fn can_submit(&self) -> bool {
        self.submission.is_valid && !self.submission.is_submitting
    }

    /// Recompute every field error from the current values
    pub fn validate(&mut self) -> bool {
        self.phase = FormPhase::Validating;
        self.errors = self.schema.validate(&self.values());
        let is_valid = self.errors.is_empty();
        self.submission.is_valid = is_valid;
        self.phase = if is_valid {
            FormPhase::Valid
        } else {
            FormPhase::Invalid
        };
        is_valid
    }

    /// Replace a field's value and re-validate. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let Some(field) = self.fields.iter_mut().find(|f| f.name == name) else {
            return;
        };
        field.set_text(value.into());
        self.validate();
    }

    /// Mark a field as visited and re-validate
    pub fn blur(&mut self, name: &str) {
        if let Some(field) = self.fields.iter().find(|f| f.name == name) {
            self.touched.insert(field.name);
        }
        self.validate();
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn active_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    /// Type into the active field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.push_char(c);
            self.validate();
        }
    }

    /// Delete the last character of the active field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.pop_char();
            self.validate();
        }
    }

    /// Move focus forward, blurring the field being left (wraps around)
    pub fn next_field(&mut self) {
        self.blur_active();
        self.active_field_index = (self.active_field_index + 1) % (self.fields.len() + 1);
    }

    /// Move focus backward, blurring the field being left (wraps around)
    pub fn prev_field(&mut self) {
        self.blur_active();
        if self.active_field_index == 0 {
            self.active_field_index = self.fields.len();
        } else {
            self.active_field_index -= 1;
        }
    }

    fn blur_active(&mut self) {
        if let Some(name) = self.active_field().map(|f| f.name) {
            self.blur(name);
        }
    }

    /// Run the submit workflow.
    ///
    /// Every field is marked touched and re-validated. If anything fails the
    /// submit is blocked. Otherwise `dispatch` is called exactly once with the
    /// current values; completion is reported later by the store, not here.
    pub fn submit<F>(&mut self, dispatch: F) -> SubmitOutcome
    where
        F: FnOnce(&FormValues),
    {
        if self.submission.is_submitting {
            return SubmitOutcome::Blocked;
        }
        self.submit_count += 1;
        for field in &self.fields {
            self.touched.insert(field.name);
        }
        if !self.validate() {
            let failing: Vec<_> = self.errors.iter().map(|(name, _)| name).collect();
            tracing::debug!(
                form = ?self.kind,
                attempt = self.submit_count,
                errors = self.errors.len(),
                fields = ?failing,
                "submit blocked by validation"
            );
            self.phase = FormPhase::Idle;
            return SubmitOutcome::Blocked;
        }

        self.submission.is_submitting = true;
        self.phase = FormPhase::Submitting;
        dispatch(&self.values());
        self.submission.is_submitting = false;
        self.phase = FormPhase::Idle;

        if self.post_submit == PostSubmit::Reset {
            self.reset();
        }
        SubmitOutcome::Dispatched
    }

    /// Restore initial values, clear touched flags, and focus the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.set_text(self.initial_values.get(field.name).to_string());
        }
        self.touched.clear();
        self.active_field_index = 0;
        self.validate();
    }
}

fn profile_seed(profile: &Profile) -> FormValues {
    FormValues::new()
        .with(FIRST_NAME, profile.first_name.clone())
        .with(LAST_NAME, profile.last_name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill_valid_signup(form: &mut FormController) {
        form.set_value(FIRST_NAME, "Jo");
        form.set_value(LAST_NAME, "Ng");
        form.set_value(EMAIL, "a@b.com");
        form.set_value(PASSWORD, "12345678");
        form.set_value(PASSWORD_CONFIRMATION, "12345678");
    }

    fn loaded_profile(first: &str, last: &str) -> Profile {
        Profile {
            is_loaded: true,
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        }
    }

    mod signup_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_empty_and_invalid() {
            let form = FormController::signup(PostSubmit::Keep);
            assert_eq!(form.fields().len(), 5);
            assert!(form.fields().iter().all(|f| f.as_text().is_empty()));
            assert!(!form.submission().is_valid);
            assert!(!form.can_submit());
            assert_eq!(form.phase(), FormPhase::Invalid);
        }

        #[test]
        fn test_errors_hidden_until_touched() {
            let mut form = FormController::signup(PostSubmit::Keep);
            assert_eq!(form.errors().get(FIRST_NAME), Some("Your name is required."));
            assert_eq!(form.visible_error(FIRST_NAME), None);

            form.blur(FIRST_NAME);
            assert_eq!(
                form.visible_error(FIRST_NAME),
                Some("Your name is required.")
            );
        }

        #[test]
        fn test_valid_values_enable_submit() {
            let mut form = FormController::signup(PostSubmit::Keep);
            fill_valid_signup(&mut form);
            assert!(form.errors().is_empty());
            assert!(form.can_submit());
            assert_eq!(form.phase(), FormPhase::Valid);
        }

        #[test]
        fn test_submit_dispatches_once_with_all_fields() {
            let mut form = FormController::signup(PostSubmit::Keep);
            fill_valid_signup(&mut form);

            let mut dispatched = Vec::new();
            let outcome = form.submit(|values| dispatched.push(values.clone()));

            assert_eq!(outcome, SubmitOutcome::Dispatched);
            assert_eq!(dispatched.len(), 1);
            let values = &dispatched[0];
            assert_eq!(values.iter().count(), 5);
            assert_eq!(values.get(FIRST_NAME), "Jo");
            assert_eq!(values.get(LAST_NAME), "Ng");
            assert_eq!(values.get(EMAIL), "a@b.com");
            assert_eq!(values.get(PASSWORD), "12345678");
            assert_eq!(values.get(PASSWORD_CONFIRMATION), "12345678");
            assert!(!form.submission().is_submitting);
            assert_eq!(form.phase(), FormPhase::Idle);
        }

        #[test]
        fn test_invalid_submit_is_blocked_and_touches_everything() {
            let mut form = FormController::signup(PostSubmit::Keep);
            form.set_value(FIRST_NAME, "Jo");

            let mut calls = 0;
            let outcome = form.submit(|_| calls += 1);

            assert_eq!(outcome, SubmitOutcome::Blocked);
            assert_eq!(calls, 0);
            assert_eq!(form.submit_count, 1);
            assert!(form.is_touched(EMAIL));
            assert_eq!(form.visible_error(EMAIL), Some("Email is required."));
            assert_eq!(form.visible_error(FIRST_NAME), None);
        }

        #[test]
        fn test_confirmation_mismatch_blocks_submit() {
            let mut form = FormController::signup(PostSubmit::Keep);
            fill_valid_signup(&mut form);
            form.set_value(PASSWORD_CONFIRMATION, "12345679");

            assert_eq!(
                form.errors().get(PASSWORD_CONFIRMATION),
                Some("Passwords must match.")
            );
            assert!(!form.can_submit());
        }

        #[test]
        fn test_changing_password_revalidates_confirmation() {
            let mut form = FormController::signup(PostSubmit::Keep);
            fill_valid_signup(&mut form);
            form.set_value(PASSWORD, "87654321");
            assert_eq!(
                form.errors().get(PASSWORD_CONFIRMATION),
                Some("Passwords must match.")
            );
        }

        #[test]
        fn test_keep_leaves_values_after_submit() {
            let mut form = FormController::signup(PostSubmit::Keep);
            fill_valid_signup(&mut form);
            form.submit(|_| {});
            assert_eq!(form.field(EMAIL).unwrap().as_text(), "a@b.com");
            assert!(form.can_submit());
        }

        #[test]
        fn test_reset_clears_values_after_submit() {
            let mut form = FormController::signup(PostSubmit::Reset);
            fill_valid_signup(&mut form);
            form.active_field_index = 3;
            form.submit(|_| {});

            assert!(form.fields().iter().all(|f| f.as_text().is_empty()));
            assert!(!form.is_touched(EMAIL));
            assert_eq!(form.active_field_index, 0);
            assert!(!form.can_submit());
        }
    }

    mod profile_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_seeded_from_profile() {
            let form = FormController::profile(&loaded_profile("X", "Y"), PostSubmit::Keep);
            assert_eq!(form.fields().len(), 2);
            assert_eq!(form.field(FIRST_NAME).unwrap().as_text(), "X");
            assert_eq!(form.field(LAST_NAME).unwrap().as_text(), "Y");
            // single-character names fail the length rule until edited
            assert!(!form.can_submit());
        }

        #[test]
        fn test_edit_and_submit_dispatches_two_fields() {
            let mut form = FormController::profile(&loaded_profile("X", "Y"), PostSubmit::Keep);
            form.set_value(FIRST_NAME, "Xavier");
            form.set_value(LAST_NAME, "Young");

            let mut dispatched = Vec::new();
            let outcome = form.submit(|values| dispatched.push(values.clone()));

            assert_eq!(outcome, SubmitOutcome::Dispatched);
            assert_eq!(dispatched.len(), 1);
            assert_eq!(
                dispatched[0].iter().collect::<Vec<_>>(),
                vec![(FIRST_NAME, "Xavier"), (LAST_NAME, "Young")]
            );
        }

        #[test]
        fn test_reset_restores_seeded_values() {
            let mut form = FormController::profile(&loaded_profile("Ann", "Lee"), PostSubmit::Reset);
            form.set_value(FIRST_NAME, "Annabel");
            form.submit(|_| {});
            assert_eq!(form.field(FIRST_NAME).unwrap().as_text(), "Ann");
        }

        #[test]
        fn test_rebase_after_reset_shows_latest_profile() {
            let mut form = FormController::profile(&loaded_profile("Ann", "Lee"), PostSubmit::Reset);
            form.set_value(FIRST_NAME, "Annabel");
            form.submit(|_| {});
            assert_eq!(form.field(FIRST_NAME).unwrap().as_text(), "Ann");

            form.rebase_profile(&loaded_profile("Annabel", "Lee"));
            assert_eq!(form.field(FIRST_NAME).unwrap().as_text(), "Annabel");
            assert!(!form.is_touched(FIRST_NAME));

            // The next reset restores the rebased values
            form.set_value(LAST_NAME, "Park");
            form.reset();
            assert_eq!(form.field(FIRST_NAME).unwrap().as_text(), "Annabel");
            assert_eq!(form.field(LAST_NAME).unwrap().as_text(), "Lee");
        }

        #[test]
        fn test_rebase_keeps_edits_in_progress() {
            let mut form = FormController::profile(&loaded_profile("Ann", "Lee"), PostSubmit::Keep);
            form.set_value(LAST_NAME, "Park");

            form.rebase_profile(&loaded_profile("Annie", "Lee"));
            assert_eq!(form.field(FIRST_NAME).unwrap().as_text(), "Ann");
            assert_eq!(form.field(LAST_NAME).unwrap().as_text(), "Park");

            form.reset();
            assert_eq!(form.field(FIRST_NAME).unwrap().as_text(), "Annie");
        }

        #[test]
        fn test_unknown_field_is_ignored() {
            let mut form = FormController::profile(&loaded_profile("Ann", "Lee"), PostSubmit::Keep);
            form.set_value(EMAIL, "a@b.com");
            assert!(form.field(EMAIL).is_none());
            assert!(form.can_submit());
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_cycles_through_button_row() {
            let mut form = FormController::profile(&loaded_profile("Ann", "Lee"), PostSubmit::Keep);
            form.next_field();
            form.next_field();
            assert!(form.is_buttons_row_active());
            assert!(form.active_field().is_none());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_button_row() {
            let mut form = FormController::signup(PostSubmit::Keep);
            form.prev_field();
            assert_eq!(form.active_field_index, 5);
        }

        #[test]
        fn test_leaving_field_marks_it_touched() {
            let mut form = FormController::signup(PostSubmit::Keep);
            form.push_char('A');
            form.next_field();
            assert!(form.is_touched(FIRST_NAME));
            assert_eq!(form.visible_error(FIRST_NAME), Some("Too Short."));
        }

        #[test]
        fn test_typing_on_button_row_is_ignored() {
            let mut form = FormController::signup(PostSubmit::Keep);
            form.active_field_index = 5;
            form.push_char('x');
            form.pop_char();
            assert!(form.fields().iter().all(|f| f.as_text().is_empty()));
        }

        #[test]
        fn test_typing_revalidates_on_every_keystroke() {
            let mut form = FormController::profile(&loaded_profile("", "Lee"), PostSubmit::Keep);
            form.push_char('A');
            assert_eq!(form.errors().get(FIRST_NAME), Some("Too Short."));
            form.push_char('n');
            assert_eq!(form.errors().get(FIRST_NAME), None);
            form.pop_char();
            assert_eq!(form.errors().get(FIRST_NAME), Some("Too Short."));
        }
    }
}
