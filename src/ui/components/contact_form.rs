// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form component in MVU shape: three inputs and a submit button.

use eframe::egui;

use crate::models::submission::{Field, FormFields};

/// UI model for the form, holding the raw typed values.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ContactFormModel {
    fields: FormFields,
}

/// Messages emitted by the form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactFormMsg {
    Edit { field: Field, value: String },
    SubmitClicked,
    Reset,
}

/// Signals the parent must act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactFormEvent {
    /// Snapshot of the values at the moment of the click.
    SubmitRequested(FormFields),
}

impl ContactFormModel {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }
}

/// Apply a message to the model. Returns an event when the parent must react.
pub fn update(model: &mut ContactFormModel, msg: ContactFormMsg) -> Option<ContactFormEvent> {
    match msg {
        ContactFormMsg::Edit { field, value } => {
            match field {
                Field::Name => model.fields.name = value,
                Field::Email => model.fields.email = value,
                Field::Message => model.fields.message = value,
            }
            None
        }
        ContactFormMsg::SubmitClicked => {
            Some(ContactFormEvent::SubmitRequested(model.fields.clone()))
        }
        ContactFormMsg::Reset => {
            model.fields.clear();
            None
        }
    }
}

/// Render the form and return any messages triggered by user interaction.
///
/// The submit button stays enabled while a request is in flight.
pub fn view(ui: &mut egui::Ui, model: &ContactFormModel) -> Vec<ContactFormMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("FILL OUT THE FORM BELOW TO GET IN TOUCH:")
                    .color(egui::Color32::from_gray(110)),
            );
            ui.add_space(10.0);

            render_singleline(ui, model, Field::Name, "Your name", &mut msgs);
            ui.add_space(8.0);
            render_singleline(ui, model, Field::Email, "Your email", &mut msgs);
            ui.add_space(8.0);

            let mut message = model.fields().message.clone();
            if ui
                .add(
                    egui::TextEdit::multiline(&mut message)
                        .id_salt(Field::Message.key())
                        .hint_text("Type your message here!")
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                msgs.push(ContactFormMsg::Edit {
                    field: Field::Message,
                    value: message,
                });
            }

            ui.add_space(10.0);
            if ui
                .add(egui::Button::new(format!(
                    "{} SEND EMAIL",
                    egui_phosphor::regular::PAPER_PLANE_TILT
                )))
                .clicked()
            {
                msgs.push(ContactFormMsg::SubmitClicked);
            }
        });

    msgs
}

fn render_singleline(
    ui: &mut egui::Ui,
    model: &ContactFormModel,
    field: Field,
    hint: &str,
    msgs: &mut Vec<ContactFormMsg>,
) {
    let mut value = model.fields().get(field).to_string();
    if ui
        .add(
            egui::TextEdit::singleline(&mut value)
                .id_salt(field.key())
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(ContactFormMsg::Edit { field, value });
    }
}
