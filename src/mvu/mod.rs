// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use crate::logic::relay::Relay;
use crate::logic::submission;
use crate::models::outcome::{Notification, SubmissionOutcome};
use crate::models::submission::Submission;
use crate::ui::components::contact_form::{
    self, ContactFormEvent, ContactFormModel, ContactFormMsg,
};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Contact form state.
    pub form: ContactFormModel,
    /// Notification currently shown in the modal.
    pub notification: Option<Notification>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Count of submissions still waiting on the relay.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    Form(ContactFormMsg),
    SubmissionFinished(SubmissionOutcome),
    DismissNotification,
}

/// Commands represent side-effects executed off the UI thread.
pub enum Command {
    Submit(Submission),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Form(m) => {
            if let Some(ContactFormEvent::SubmitRequested(fields)) =
                contact_form::update(&mut model.form, m)
            {
                match submission::prepare(&fields) {
                    Ok(valid) => {
                        model.status = Some("Sending message…".to_string());
                        cmds.push(Command::Submit(valid));
                    }
                    Err(outcome) => surface_outcome(model, &outcome),
                }
            }
        }
        Msg::SubmissionFinished(outcome) => {
            if outcome.is_confirmation() {
                contact_form::update(&mut model.form, ContactFormMsg::Reset);
            }
            surface_outcome(model, &outcome);
        }
        Msg::DismissNotification => model.notification = None,
    }
}

/// Execute a command on the calling thread and return the resulting message.
pub fn run_command(cmd: Command, relay: &dyn Relay) -> Msg {
    match cmd {
        Command::Submit(valid) => Msg::SubmissionFinished(submission::deliver(&valid, relay)),
    }
}

/// Show the outcome in the modal and mirror it in the status bar.
fn surface_outcome(model: &mut AppModel, outcome: &SubmissionOutcome) {
    let note = Notification::from(outcome);
    model.status = Some(note.text.clone());
    model.notification = Some(note);
}
