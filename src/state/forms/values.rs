//! Form values, derived field errors, and typed submit payloads

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const PASSWORD_CONFIRMATION: &str = "passwordConfirmation";

/// Field name to value mapping, kept in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(&'static str, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used when seeding a form
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, value.into());
        self
    }

    /// Get a value, `""` for unknown fields
    pub fn get(&self, field: &str) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, field: &'static str, value: String) {
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Field name to message mapping. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, message)| (*name, message.as_str()))
    }
}

/// Payload handed to the sign-up dispatcher
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl SignUpValues {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: values.get(FIRST_NAME).to_string(),
            last_name: values.get(LAST_NAME).to_string(),
            email: values.get(EMAIL).to_string(),
            password: values.get(PASSWORD).to_string(),
            password_confirmation: values.get(PASSWORD_CONFIRMATION).to_string(),
        }
    }
}

impl fmt::Debug for SignUpValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpValues")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .finish()
    }
}

/// Payload handed to the profile update dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileValues {
    pub first_name: String,
    pub last_name: String,
}

impl ProfileValues {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: values.get(FIRST_NAME).to_string(),
            last_name: values.get(LAST_NAME).to_string(),
        }
    }
}
