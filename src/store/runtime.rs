//! Store task and the handle used to dispatch into it

use super::actions::AuthAction;
use super::reducer::reduce;
use crate::backend::AuthBackend;
use crate::state::{AuthState, Profile};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Cheap, cloneable sender of actions into the store task
#[derive(Debug, Clone)]
pub struct StoreHandle {
    actions: mpsc::UnboundedSender<AuthAction>,
}

impl StoreHandle {
    pub fn new(actions: mpsc::UnboundedSender<AuthAction>) -> Self {
        Self { actions }
    }

    /// Queue an action without waiting for it to be handled
    pub fn dispatch(&self, action: AuthAction) {
        let name = action.name();
        if self.actions.send(action).is_err() {
            tracing::warn!(action = name, "store is gone, action dropped");
        } else {
            tracing::debug!(action = name, "action dispatched");
        }
    }
}

/// Owns the auth state; the only writer of it
pub struct Store {
    state: AuthState,
    backend: Arc<dyn AuthBackend>,
    published: watch::Sender<AuthState>,
}

impl Store {
    pub fn new(backend: Arc<dyn AuthBackend>) -> (Self, watch::Receiver<AuthState>) {
        let (published, receiver) = watch::channel(AuthState::default());
        let store = Self {
            state: AuthState::default(),
            backend,
            published,
        };
        (store, receiver)
    }

    /// Start the store task and request the initial profile.
    /// Must be called from within a tokio runtime.
    pub fn spawn(backend: Arc<dyn AuthBackend>) -> (StoreHandle, watch::Receiver<AuthState>) {
        let (store, receiver) = Self::new(backend);
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(store.run(rx));

        let handle = StoreHandle::new(tx);
        handle.dispatch(AuthAction::LoadProfile);
        (handle, receiver)
    }

    /// Handle actions until every handle is dropped
    pub async fn run(mut self, mut actions: mpsc::UnboundedReceiver<AuthAction>) {
        while let Some(action) = actions.recv().await {
            self.handle(action).await;
        }
        tracing::debug!("store stopped");
    }

    /// Apply an action, then run its backend call and apply the result
    pub async fn handle(&mut self, action: AuthAction) {
        self.apply(&action);
        if let Some(result) = self.effect(&action).await {
            self.apply(&result);
        }
    }

    fn apply(&mut self, action: &AuthAction) {
        tracing::debug!(action = action.name(), "reducing");
        self.state = reduce(&self.state, action);
        self.published.send_replace(self.state.clone());
    }

    async fn effect(&self, action: &AuthAction) -> Option<AuthAction> {
        let result = match action {
            AuthAction::LoadProfile => match self.backend.current_profile().await {
                Ok(profile) => AuthAction::ProfileLoaded(profile.unwrap_or_else(Profile::empty)),
                Err(e) => AuthAction::ProfileLoadFailed(e.to_string()),
            },
            AuthAction::SignUp(values) => match self.backend.sign_up(values).await {
                Ok(profile) => AuthAction::SignUpSucceeded(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "sign up failed");
                    AuthAction::SignUpFailed(e.to_string())
                }
            },
            AuthAction::UpdateProfile(values) => match self.backend.update_profile(values).await {
                Ok(profile) => AuthAction::ProfileUpdated(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "profile update failed");
                    AuthAction::ProfileUpdateFailed(e.to_string())
                }
            },
            _ => return None,
        };
        Some(result)
    }
}
