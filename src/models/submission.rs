// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact submission domain model and validation helpers (UI-agnostic).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// One of the three required form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Form key used both in the UI and in the relay payload.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw values as typed into the form, before any validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    #[allow(dead_code)]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Value for a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Reasons a submission is refused before any network activity.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(Field),
    #[error("bad email")]
    BadEmail,
}

/// A submission that passed presence and format checks.
///
/// Only constructible through [`Submission::validate`], so holding one means
/// the relay may be contacted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
    message: String,
}

impl Submission {
    /// Run the presence check, then the email shape check.
    ///
    /// Values are forwarded as typed; whitespace-only input counts as present.
    pub fn validate(fields: &FormFields) -> Result<Self, ValidationError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if fields.get(field).is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        if !is_valid_email_shape(&fields.email) {
            return Err(ValidationError::BadEmail);
        }

        Ok(Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// Browser `\s`: differs from the regex crate's `\s` by including U+FEFF
// and excluding U+0085.
const SPACE: &str = concat!(
    r"\t\n\x0B\x0C\r ",
    r"\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}",
    r"\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[^{SPACE}@]+@[^{SPACE}@]+\\.[^{SPACE}@]+$"))
        .expect("email shape pattern is valid")
});

/// Check the basic `local@domain.tld` shape: `^[^\s@]+@[^\s@]+\.[^\s@]+$`,
/// with `\s` meaning the browser's whitespace set.
pub fn is_valid_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FormFields {
        FormFields::new("A", "a@b.com", "hi")
    }

    #[test]
    fn validate_accepts_minimal_valid_fields() {
        let submission = Submission::validate(&valid_fields()).unwrap();
        assert_eq!(submission.name(), "A");
        assert_eq!(submission.email(), "a@b.com");
        assert_eq!(submission.message(), "hi");
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut fields = valid_fields();
        fields.name.clear();
        assert_eq!(
            Submission::validate(&fields),
            Err(ValidationError::MissingField(Field::Name))
        );

        let mut fields = valid_fields();
        fields.message.clear();
        assert_eq!(
            Submission::validate(&fields),
            Err(ValidationError::MissingField(Field::Message))
        );
    }

    // An empty email is a presence failure, not a format failure.
    #[test]
    fn validate_checks_presence_before_format() {
        let fields = FormFields::new("A", "", "hi");
        assert_eq!(
            Submission::validate(&fields),
            Err(ValidationError::MissingField(Field::Email))
        );
    }

    #[test]
    fn validate_rejects_bad_email_even_with_other_fields_valid() {
        let fields = FormFields::new("Ada", "not-an-email", "Long message body");
        assert_eq!(Submission::validate(&fields), Err(ValidationError::BadEmail));
    }

    #[test]
    fn validate_keeps_whitespace_only_values_as_present() {
        let fields = FormFields::new(" ", "a@b.com", "\n");
        assert!(Submission::validate(&fields).is_ok());
    }

    #[test]
    fn email_shape_accepts_common_addresses() {
        for email in [
            "a@b.com",
            "first.last@example.co.uk",
            "user+tag@sub.domain.org",
            "x@y.z",
            "a@b..c",
            "a@.b.c",
        ] {
            assert!(is_valid_email_shape(email), "{email} should be accepted");
        }
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "@b.com",
            "a@",
            "a@b",
            "a@b.",
            "a@.com",
            "a@@b.com",
            "a@b@c.com",
            "a b@c.com",
            "a@b .com",
            "a@b.co m",
            "a@b.com\t",
            "\u{feff}a@b.com",
            "a@b.c\u{a0}om",
            "a\u{2028}@b.com",
            "a@b.\u{3000}com",
        ] {
            assert!(!is_valid_email_shape(email), "{email:?} should be rejected");
        }
    }

    // NEL is not whitespace for the browser pattern, so it is an ordinary character.
    #[test]
    fn email_shape_treats_next_line_as_ordinary_character() {
        assert!(is_valid_email_shape("a\u{85}@b.com"));
        assert!(is_valid_email_shape("a@b\u{85}.com"));
    }

    #[test]
    fn clear_empties_every_field() {
        let mut fields = valid_fields();
        fields.clear();
        assert_eq!(fields, FormFields::default());
    }

    #[test]
    fn validation_errors_render_readable_text() {
        assert_eq!(
            ValidationError::MissingField(Field::Email).to_string(),
            "missing field: email"
        );
        assert_eq!(ValidationError::BadEmail.to_string(), "bad email");
    }
}
