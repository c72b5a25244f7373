//! Form field value objects

/// How a field is entered and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub value: String,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Text,
            value: String::new(),
        }
    }

    /// Create a new email field
    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: InputKind::Email,
            ..Self::text(name, label)
        }
    }

    /// Create a new password field (masked when displayed)
    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: InputKind::Password,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            InputKind::Password => "•".repeat(self.value.chars().count()),
            InputKind::Text | InputKind::Email => self.as_text().to_string(),
        }
    }
}
