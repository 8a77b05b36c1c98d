// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only contact panel: introduction card and the ordered info list.

use eframe::egui;

use crate::models::contact_info::ContactEntry;

/// Render the introduction card followed by `entries` in the given order.
pub fn view(ui: &mut egui::Ui, entries: &[ContactEntry]) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.heading("Let's connect!");
                ui.add_space(4.0);
                ui.label(
                    "Reach out to discuss opportunities, projects, \
                     or simply to start a conversation.",
                );
            });
        });

    ui.add_space(12.0);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    ui.add_space(14.0);
                }
                render_entry(ui, entry);
            }
        });
}

fn render_entry(ui: &mut egui::Ui, entry: &ContactEntry) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(crate::utils::icon_for(entry.icon)).size(28.0));
        ui.add_space(10.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(entry.title.to_uppercase()).strong());
            ui.label(
                egui::RichText::new(entry.description)
                    .size(16.0)
                    .color(egui::Color32::from_gray(140)),
            );
        });
    });
}
