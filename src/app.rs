//! Application state and core logic

use crate::config::AppConfig;
use crate::state::{AppState, AuthState, FormKind, SubmitOutcome, View};
use crate::store::{self, StoreHandle};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::watch;

/// A dispatched submit and the store's settled count when it was sent
#[derive(Debug, Clone, Copy)]
struct PendingRequest {
    kind: FormKind,
    settled_before: u64,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Sender into the store task
    pub store: StoreHandle,
    /// Snapshots published by the store
    auth_rx: watch::Receiver<AuthState>,
    /// Submission waiting on the store
    pending: Option<PendingRequest>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, store: StoreHandle, auth_rx: watch::Receiver<AuthState>) -> Self {
        Self {
            state: AppState::new(config.start_view(), config.post_submit),
            store,
            auth_rx,
            pending: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Pull the latest store snapshot, if it changed since the last frame
    pub fn sync_auth_state(&mut self) {
        if !self.auth_rx.has_changed().unwrap_or(false) {
            return;
        }
        let auth = self.auth_rx.borrow_and_update().clone();

        if let Some(pending) = self.pending {
            if auth.settled_requests > pending.settled_before {
                self.pending = None;
                self.state.status_message = Some(completion_message(pending.kind, &auth));
            }
        }
        self.state.apply_auth(auth);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return;
            }
            KeyCode::F(1) => {
                self.switch_view(View::Signup);
                return;
            }
            KeyCode::F(2) => {
                self.switch_view(View::Profile);
                return;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Enter => self.submit_current_form(),
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit_current_form()
            }
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.state.active_form_mut() {
                    form.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.state.active_form_mut() {
                    form.prev_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.state.active_form_mut() {
                    form.pop_char();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                if let Some(form) = self.state.active_form_mut() {
                    form.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn switch_view(&mut self, view: View) {
        if self.state.current_view != view {
            tracing::debug!(view = view.label(), "switching view");
            self.state.current_view = view;
            self.state.status_message = None;
        }
    }

    /// Validate and dispatch the form in the current view
    pub fn submit_current_form(&mut self) {
        let Some(form) = self.state.active_form_mut() else {
            self.state.status_message = Some("Sign up to edit your profile.".to_string());
            return;
        };
        let kind = form.kind();
        // Read before dispatching so the result cannot already be counted
        let settled_before = self.auth_rx.borrow().settled_requests;

        match store::submit_form(form, &self.store) {
            SubmitOutcome::Dispatched => {
                self.pending = Some(PendingRequest {
                    kind,
                    settled_before,
                });
                self.state.status_message = None;
            }
            SubmitOutcome::Blocked => {
                self.state.status_message = Some("Please fix the highlighted fields".to_string());
            }
        }
    }
}

fn completion_message(kind: FormKind, auth: &AuthState) -> String {
    match kind {
        FormKind::Signup => match &auth.auth_error {
            Some(_) => "Sign up failed".to_string(),
            None => format!("Signed in as {}", auth.profile.display_name()),
        },
        FormKind::Profile => match &auth.profile_error {
            Some(_) => "Profile update failed".to_string(),
            None => "Profile updated".to_string(),
        },
    }
}
