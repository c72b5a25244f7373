//! Declarative per-field validation rules
//!
//! A [`Schema`] is an ordered list of fields, each with an ordered list of
//! [`Rule`]s. Rules are evaluated in order and the first failure is the
//! field's message. Validation is a pure function of the values.

use super::values::{
    FieldErrors, FormValues, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD, PASSWORD_CONFIRMATION,
};
use regex::Regex;
use std::sync::LazyLock;

/// One dot-separated piece of the local part: ASCII atext or any non-ASCII,
/// non-space character
const LOCAL_ATOM: &str = r"(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]|[^\x00-\x7F\s])+";

/// Hostname labels, at least two of them
const DOMAIN: &str = r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = ["^", LOCAL_ATOM, r"(?:\.", LOCAL_ATOM, ")*@", DOMAIN, "$"].concat();
    Regex::new(&pattern).expect("email pattern is a valid regex")
});

/// A single check on a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty
    Required(&'static str),
    /// At least this many characters
    MinLength(usize, &'static str),
    /// At most this many characters
    MaxLength(usize, &'static str),
    /// Must look like an email address
    Email(&'static str),
    /// Must equal another field's value exactly
    Matches(&'static str, &'static str),
}

impl Rule {
    /// Check a value, returning the rule's message on failure
    pub fn check(&self, value: &str, values: &FormValues) -> Result<(), &'static str> {
        let passed = match self {
            Rule::Required(_) => !value.is_empty(),
            Rule::MinLength(min, _) => value.chars().count() >= *min,
            Rule::MaxLength(max, _) => value.chars().count() <= *max,
            Rule::Email(_) => EMAIL_PATTERN.is_match(value),
            Rule::Matches(other, _) => value == values.get(other),
        };
        if passed {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(message)
            | Rule::MinLength(_, message)
            | Rule::MaxLength(_, message)
            | Rule::Email(message)
            | Rule::Matches(_, message) => *message,
        }
    }
}

#[derive(Debug, Clone)]
struct FieldRules {
    field: &'static str,
    rules: Vec<Rule>,
}

/// Ordered set of field rules for one form
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with its rules
    pub fn field(mut self, field: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldRules { field, rules });
        self
    }

    /// Rules for the sign-up form
    pub fn signup() -> Self {
        Self::new()
            .field(FIRST_NAME, name_rules("Your name is required."))
            .field(LAST_NAME, name_rules("Your last name is required."))
            .field(
                EMAIL,
                vec![
                    Rule::Required("Email is required."),
                    Rule::Email("Invalid email."),
                ],
            )
            .field(
                PASSWORD,
                vec![
                    Rule::Required("No password provided."),
                    Rule::MinLength(8, "Password is too short - should be 8 chars minimum."),
                ],
            )
            .field(
                PASSWORD_CONFIRMATION,
                vec![
                    Rule::Required("You must re-type your password."),
                    Rule::Matches(PASSWORD, "Passwords must match."),
                ],
            )
    }

    /// Rules for the profile edit form
    pub fn profile() -> Self {
        Self::new()
            .field(FIRST_NAME, name_rules("Your name is required."))
            .field(LAST_NAME, name_rules("Your last name is required."))
    }

    /// Validate one field, returning its first failing message
    pub fn validate_field(&self, field: &str, values: &FormValues) -> Option<&'static str> {
        let rules = self.fields.iter().find(|f| f.field == field)?;
        let value = values.get(field);
        rules
            .rules
            .iter()
            .find_map(|rule| rule.check(value, values).err())
    }

    /// Validate every field
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for rules in &self.fields {
            if let Some(message) = self.validate_field(rules.field, values) {
                errors.insert(rules.field, message);
            }
        }
        errors
    }
}

fn name_rules(required: &'static str) -> Vec<Rule> {
    vec![
        Rule::Required(required),
        Rule::MinLength(2, "Too Short."),
        Rule::MaxLength(50, "Too Long."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signup_values(
        first: &str,
        last: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> FormValues {
        FormValues::new()
            .with(FIRST_NAME, first)
            .with(LAST_NAME, last)
            .with(EMAIL, email)
            .with(PASSWORD, password)
            .with(PASSWORD_CONFIRMATION, confirmation)
    }

    fn valid_signup() -> FormValues {
        signup_values("Jo", "Ng", "a@b.com", "12345678", "12345678")
    }

    mod name_length {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_one_char_is_too_short() {
            let values = FormValues::new().with(FIRST_NAME, "A").with(LAST_NAME, "Ng");
            let errors = Schema::profile().validate(&values);
            assert_eq!(errors.get(FIRST_NAME), Some("Too Short."));
        }

        #[test]
        fn test_fifty_one_chars_is_too_long() {
            let values = FormValues::new()
                .with(FIRST_NAME, "a".repeat(51))
                .with(LAST_NAME, "Ng");
            let errors = Schema::profile().validate(&values);
            assert_eq!(errors.get(FIRST_NAME), Some("Too Long."));
        }

        #[test]
        fn test_boundaries_are_accepted() {
            let schema = Schema::profile();
            for len in [2, 50] {
                let values = FormValues::new()
                    .with(FIRST_NAME, "a".repeat(len))
                    .with(LAST_NAME, "b".repeat(len));
                assert!(schema.validate(&values).is_empty(), "length {len}");
            }
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            let values = FormValues::new().with(FIRST_NAME, "Zoë").with(LAST_NAME, "Ñu");
            assert!(Schema::profile().validate(&values).is_empty());
        }

        #[test]
        fn test_empty_names_report_required() {
            let values = FormValues::new().with(FIRST_NAME, "").with(LAST_NAME, "");
            let errors = Schema::profile().validate(&values);
            assert_eq!(errors.get(FIRST_NAME), Some("Your name is required."));
            assert_eq!(errors.get(LAST_NAME), Some("Your last name is required."));
        }
    }

    mod signup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_values_have_no_errors() {
            assert!(Schema::signup().validate(&valid_signup()).is_empty());
        }

        #[test]
        fn test_every_missing_field_reports_required() {
            let errors = Schema::signup().validate(&signup_values("", "", "", "", ""));
            assert_eq!(errors.len(), 5);
            assert_eq!(errors.get(EMAIL), Some("Email is required."));
            assert_eq!(errors.get(PASSWORD), Some("No password provided."));
            assert_eq!(
                errors.get(PASSWORD_CONFIRMATION),
                Some("You must re-type your password.")
            );
        }

        #[test]
        fn test_missing_key_counts_as_empty() {
            let values = FormValues::new().with(FIRST_NAME, "Jo");
            let errors = Schema::signup().validate(&values);
            assert_eq!(errors.get(LAST_NAME), Some("Your last name is required."));
            assert_eq!(errors.get(FIRST_NAME), None);
        }

        #[test]
        fn test_invalid_email() {
            let schema = Schema::signup();
            for email in [
                "plainaddress",
                "a@",
                "@b.com",
                "a b@c.com",
                "a@b",
                "a..b@c.com",
                ".a@b.com",
                "a.@b.com",
            ] {
                let values = signup_values("Jo", "Ng", email, "12345678", "12345678");
                assert_eq!(
                    schema.validate(&values).get(EMAIL),
                    Some("Invalid email."),
                    "{email}"
                );
            }
        }

        #[test]
        fn test_accepts_common_emails() {
            let schema = Schema::signup();
            for email in [
                "a@b.com",
                "first.last+tag@mail.example.org",
                "x_y@sub-domain.io",
                "josé@example.com",
                "用户@example.com",
            ] {
                let values = signup_values("Jo", "Ng", email, "12345678", "12345678");
                assert!(schema.validate(&values).is_empty(), "{email}");
            }
        }

        #[test]
        fn test_short_password() {
            let values = signup_values("Jo", "Ng", "a@b.com", "1234567", "1234567");
            assert_eq!(
                Schema::signup().validate(&values).get(PASSWORD),
                Some("Password is too short - should be 8 chars minimum.")
            );
        }

        #[test]
        fn test_confirmation_mismatch_is_case_sensitive() {
            let values = signup_values("Jo", "Ng", "a@b.com", "Password1", "password1");
            let errors = Schema::signup().validate(&values);
            assert_eq!(errors.get(PASSWORD_CONFIRMATION), Some("Passwords must match."));
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_whitespace_is_not_trimmed() {
            let values = signup_values("Jo", "Ng", "a@b.com", "12345678", "12345678 ");
            assert_eq!(
                Schema::signup().validate(&values).get(PASSWORD_CONFIRMATION),
                Some("Passwords must match.")
            );
        }
    }

    #[test]
    fn test_validate_field_unknown_is_none() {
        assert_eq!(
            Schema::profile().validate_field(EMAIL, &FormValues::new()),
            None
        );
    }

    #[test]
    fn test_rule_message() {
        assert_eq!(Rule::MinLength(2, "Too Short.").message(), "Too Short.");
        assert_eq!(
            Rule::Matches(PASSWORD, "Passwords must match.").message(),
            "Passwords must match."
        );
    }
}
