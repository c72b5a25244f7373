//! In-memory auth backend
//!
//! Accounts are keyed by lower-cased email. Signing up signs the new account
//! in, replacing any previous session. Nothing is persisted.

use super::traits::{AuthBackend, BackendError};
use crate::state::{Profile, ProfileValues, SignUpValues};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Minimum password length the backend itself accepts
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    email: String,
    first_name: String,
    last_name: String,
    updated_at: DateTime<Utc>,
}

impl Account {
    fn profile(&self) -> Profile {
        Profile {
            is_loaded: true,
            is_empty: false,
            uid: Some(self.uid.clone()),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            updated_at: Some(self.updated_at),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    current_email: Option<String>,
}

impl Inner {
    fn create(&mut self, values: &SignUpValues) -> Result<Profile, BackendError> {
        let key = values.email.to_lowercase();
        if self.accounts.contains_key(&key) {
            return Err(BackendError::EmailInUse);
        }
        if values.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(BackendError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }

        let account = Account {
            uid: Uuid::new_v4().to_string(),
            email: values.email.clone(),
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            updated_at: Utc::now(),
        };
        let profile = account.profile();
        self.accounts.insert(key.clone(), account);
        self.current_email = Some(key);
        Ok(profile)
    }
}

/// Backend that keeps accounts in process memory
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    inner: Mutex<Inner>,
    /// Simulated round-trip time for every call
    latency: Duration,
    /// Every call fails as if the network were down
    offline: bool,
}

impl InMemoryBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            latency,
            offline: false,
        }
    }

    /// Make every call fail with [`BackendError::Unavailable`]
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Start with an existing account that is already signed in
    pub fn with_signed_in_account(mut self, values: &SignUpValues) -> Result<Self, BackendError> {
        self.inner.get_mut().create(values)?;
        Ok(self)
    }

    async fn round_trip(&self) -> Result<(), BackendError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.offline {
            tracing::warn!("backend offline, request dropped");
            return Err(BackendError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl AuthBackend for InMemoryBackend {
    async fn current_profile(&self) -> Result<Option<Profile>, BackendError> {
        self.round_trip().await?;
        let inner = self.inner.lock().await;
        Ok(inner
            .current_email
            .as_ref()
            .and_then(|email| inner.accounts.get(email))
            .map(Account::profile))
    }

    async fn sign_up(&self, values: &SignUpValues) -> Result<Profile, BackendError> {
        self.round_trip().await?;
        let mut inner = self.inner.lock().await;
        let profile = inner.create(values)?;
        tracing::info!(uid = ?profile.uid, "account created");
        Ok(profile)
    }

    async fn update_profile(&self, values: &ProfileValues) -> Result<Profile, BackendError> {
        self.round_trip().await?;
        let mut inner = self.inner.lock().await;
        let Some(email) = inner.current_email.clone() else {
            return Err(BackendError::NotSignedIn);
        };
        let account = inner
            .accounts
            .get_mut(&email)
            .ok_or(BackendError::NotSignedIn)?;
        account.first_name = values.first_name.clone();
        account.last_name = values.last_name.clone();
        account.updated_at = Utc::now();
        tracing::info!(uid = %account.uid, "profile updated");
        Ok(account.profile())
    }
}
