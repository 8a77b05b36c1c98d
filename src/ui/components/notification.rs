// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Blocking notification modal for submission outcomes.

use eframe::egui;

use crate::models::outcome::Notification;

/// Render `note` centered on screen. Returns true once the user dismisses it.
pub fn view(ctx: &egui::Context, note: &Notification) -> bool {
    let mut dismissed = false;
    let color = if note.is_error() {
        egui::Color32::from_rgb(207, 34, 46)
    } else {
        egui::Color32::from_rgb(46, 160, 67)
    };

    egui::Window::new(note.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(crate::utils::severity_icon(note.severity))
                        .size(48.0)
                        .color(color),
                );
                ui.add_space(6.0);
                ui.label(note.text.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    dismissed
}
