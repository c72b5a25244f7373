//! Configuration handling for the TUI

use crate::state::{PostSubmit, SignUpValues, View};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment override for the simulated backend latency
const LATENCY_ENV: &str = "ACCOUNT_FORMS_BACKEND_LATENCY_MS";

/// Account created and signed in at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SeedAccount {
    pub fn to_sign_up(&self) -> SignUpValues {
        SignUpValues {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirmation: self.password.clone(),
        }
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// What a form does with its values after dispatching
    #[serde(default)]
    pub post_submit: PostSubmit,
    /// Simulated backend round-trip in milliseconds
    pub backend_latency_ms: Option<u64>,
    /// View shown at startup
    pub start_view: Option<View>,
    /// Signed-in account to start with
    pub seed_account: Option<SeedAccount>,
    /// Backend rejects every request with a network error
    #[serde(default)]
    pub offline: bool,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "account-forms", "account-forms-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        if let Ok(value) = std::env::var(LATENCY_ENV) {
            config.apply_latency_override(&value)?;
        }
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    fn apply_latency_override(&mut self, value: &str) -> Result<()> {
        let ms = value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{LATENCY_ENV} must be a number of milliseconds"))?;
        self.backend_latency_ms = Some(ms);
        Ok(())
    }

    pub fn backend_latency(&self) -> Duration {
        Duration::from_millis(self.backend_latency_ms.unwrap_or(0))
    }

    pub fn start_view(&self) -> View {
        self.start_view.unwrap_or_default()
    }
}
