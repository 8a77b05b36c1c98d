// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Tagged submission outcomes and the user-facing notifications they map to.

use super::submission::ValidationError;

/// Result of one submit attempt, reported back to the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The relay accepted the message.
    Confirmation,
    /// Input was refused before any network activity.
    ValidationError(ValidationError),
    /// The relay answered but reported failure.
    SubmissionError,
    /// The relay could not be reached or its reply was unreadable.
    TransportError(String),
}

impl SubmissionOutcome {
    pub fn is_confirmation(&self) -> bool {
        matches!(self, SubmissionOutcome::Confirmation)
    }
}

/// Icon shown next to a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Modal notification content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub text: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            title: "Success!".to_string(),
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: "Error!".to_string(),
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&SubmissionOutcome> for Notification {
    fn from(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Confirmation => Notification::success("Message sent successfully!"),
            SubmissionOutcome::ValidationError(ValidationError::MissingField(_)) => {
                Notification::error("All fields are required.")
            }
            SubmissionOutcome::ValidationError(ValidationError::BadEmail) => {
                Notification::error("Invalid email format.")
            }
            SubmissionOutcome::SubmissionError => {
                Notification::error("Something went wrong. Please try again.")
            }
            SubmissionOutcome::TransportError(_) => Notification::error(
                "Could not reach the contact service. Please check your connection and try again.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::Field;

    #[test]
    fn confirmation_maps_to_success_notification() {
        let note = Notification::from(&SubmissionOutcome::Confirmation);
        assert_eq!(note.title, "Success!");
        assert_eq!(note.text, "Message sent successfully!");
        assert_eq!(note.severity, Severity::Success);
    }

    #[test]
    fn validation_errors_map_to_distinct_texts() {
        let missing = Notification::from(&SubmissionOutcome::ValidationError(
            ValidationError::MissingField(Field::Message),
        ));
        let bad_email =
            Notification::from(&SubmissionOutcome::ValidationError(ValidationError::BadEmail));

        assert!(missing.is_error() && bad_email.is_error());
        assert_eq!(missing.text, "All fields are required.");
        assert_eq!(bad_email.text, "Invalid email format.");
    }

    // Transport failures must not read like a relay rejection.
    #[test]
    fn transport_error_is_distinct_from_rejection() {
        let rejected = Notification::from(&SubmissionOutcome::SubmissionError);
        let offline = Notification::from(&SubmissionOutcome::TransportError("timeout".into()));

        assert_eq!(rejected.title, "Error!");
        assert_eq!(offline.title, "Error!");
        assert_ne!(rejected.text, offline.text);
        assert!(!offline.text.contains("timeout"));
    }
}
