// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the contact page.
//! Handles layout, the worker pool for relay requests, and the notification modal.

pub mod components;

use std::sync::Arc;

use eframe::egui;
use tracing::warn;

use crate::logic::relay::Relay;
use crate::models::contact_info::CONTACT_INFO;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::{contact_form, contact_info, notification};

/// Stateful egui application showing contact details and the contact form.
pub struct LetsConnectApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl LetsConnectApp {
    /// Create the app and spawn workers that run commands against `relay`.
    pub fn new(relay: Arc<dyn Relay>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // Two workers let a second click proceed while the first is in flight.
        for _ in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let relay = Arc::clone(&relay);
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, relay.as_ref());
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for LetsConnectApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which the
    /// runtime still invokes immediately before this.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: drains worker results, applies queued messages to the
    /// model, dispatches resulting commands, then renders the page and any open modal.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                } else {
                    warn!("command worker pool is gone; dropping submission");
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Contact");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(2.0);
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_notification(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                if ui.available_width() >= 720.0 {
                    ui.columns(2, |cols| {
                        contact_info::view(&mut cols[0], &CONTACT_INFO);
                        self.render_form(&mut cols[1]);
                    });
                } else {
                    contact_info::view(ui, &CONTACT_INFO);
                    ui.add_space(12.0);
                    self.render_form(ui);
                }
            });
        });

        // Messages emitted by this frame's views are applied on the next one.
        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl LetsConnectApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let msgs = contact_form::view(ui, &self.model.form);
        self.inbox.extend(msgs.into_iter().map(Msg::Form));
    }

    /// Render the outcome modal while a notification is pending.
    fn render_notification(&mut self, ctx: &egui::Context) {
        if let Some(note) = &self.model.notification
            && notification::view(ctx, note)
        {
            self.inbox.push(Msg::DismissNotification);
        }
    }

    /// Render latest status message, with a spinner while requests are in flight.
    fn render_status(&self, ui: &mut egui::Ui) {
        let Some(text) = &self.model.status else {
            return;
        };
        let display = if self.model.pending_commands > 0 {
            format!("{}  ({} sending…)", text, self.model.pending_commands)
        } else {
            text.to_string()
        };
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} message(s) waiting on the relay",
                    self.model.pending_commands
                ));
            }
        });
    }
}
