// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Submission handler: validate raw form values, forward them to the relay,
//! and fold every result into a [`SubmissionOutcome`].
//!
//! Nothing here returns an error to the caller; failures become outcome
//! variants so the UI always has something to show.

use tracing::{error, info, warn};

use crate::logic::relay::Relay;
use crate::models::outcome::SubmissionOutcome;
use crate::models::submission::{FormFields, Submission};

/// Validation stage. `Err` already carries the outcome to report.
pub fn prepare(fields: &FormFields) -> Result<Submission, SubmissionOutcome> {
    Submission::validate(fields).map_err(|err| {
        info!(reason = %err, "submission refused before sending");
        SubmissionOutcome::ValidationError(err)
    })
}

/// Network stage: one POST, no retry.
pub fn deliver(submission: &Submission, relay: &dyn Relay) -> SubmissionOutcome {
    match relay.submit(submission) {
        Ok(reply) if reply.success => {
            info!("relay accepted submission");
            SubmissionOutcome::Confirmation
        }
        Ok(reply) => {
            warn!(
                relay_message = reply.message.as_deref().unwrap_or("<none>"),
                "relay rejected submission"
            );
            SubmissionOutcome::SubmissionError
        }
        Err(err) => {
            error!(error = %err, "relay unreachable or replied with garbage");
            SubmissionOutcome::TransportError(err.to_string())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Canned, RecordingRelay};
    use super::*;
    use crate::models::submission::{Field, ValidationError};

    fn handle_submit(fields: &FormFields, relay: &dyn Relay) -> SubmissionOutcome {
        match prepare(fields) {
            Ok(submission) => deliver(&submission, relay),
            Err(outcome) => outcome,
        }
    }

    #[test]
    fn missing_fields_never_reach_the_relay() {
        let relay = RecordingRelay::new(Canned::Accept);

        for fields in [
            FormFields::new("", "a@b.com", "hi"),
            FormFields::new("A", "", "hi"),
            FormFields::new("A", "a@b.com", ""),
            FormFields::default(),
        ] {
            let outcome = handle_submit(&fields, &relay);
            assert!(matches!(
                outcome,
                SubmissionOutcome::ValidationError(ValidationError::MissingField(_))
            ));
        }

        assert_eq!(relay.calls(), 0);
    }

    #[test]
    fn bad_email_never_reaches_the_relay() {
        let relay = RecordingRelay::new(Canned::Accept);

        let outcome = handle_submit(&FormFields::new("A", "a@b", "hi"), &relay);

        assert_eq!(
            outcome,
            SubmissionOutcome::ValidationError(ValidationError::BadEmail)
        );
        assert_eq!(relay.calls(), 0);
    }

    #[test]
    fn valid_fields_issue_exactly_one_request() {
        let relay = RecordingRelay::new(Canned::Accept);

        let outcome = handle_submit(&FormFields::new("A", "a@b.com", "hi"), &relay);

        assert_eq!(outcome, SubmissionOutcome::Confirmation);
        let seen = relay.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].email(), "a@b.com");
    }

    #[test]
    fn relay_rejection_maps_to_submission_error() {
        let relay = RecordingRelay::new(Canned::Reject);
        let outcome = handle_submit(&FormFields::new("A", "a@b.com", "hi"), &relay);
        assert_eq!(outcome, SubmissionOutcome::SubmissionError);
    }

    #[test]
    fn unreadable_reply_maps_to_transport_error() {
        let relay = RecordingRelay::new(Canned::BadJson);
        let outcome = handle_submit(&FormFields::new("A", "a@b.com", "hi"), &relay);
        assert!(matches!(outcome, SubmissionOutcome::TransportError(_)));
    }

    #[test]
    fn prepare_reports_the_missing_field() {
        let err = prepare(&FormFields::new("A", "a@b.com", "")).unwrap_err();
        assert_eq!(
            err,
            SubmissionOutcome::ValidationError(ValidationError::MissingField(Field::Message))
        );
    }
}
