// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring config, the relay client and egui/eframe.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;
use tracing::info;

use crate::config::RelayConfig;
use crate::logic::relay::Web3FormsRelay;
use crate::ui::LetsConnectApp;

/// Resolve configuration, then run the main egui event loop.
pub fn run() -> Result<()> {
    let config = RelayConfig::from_env().context("Failed to load relay configuration")?;
    info!(endpoint = %config.endpoint, timeout = ?config.timeout, "relay configured");
    let relay = Web3FormsRelay::new(config).context("Failed to create relay client")?;

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Let's connect",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(LetsConnectApp::new(Arc::new(relay))))
        }),
    )
    .map_err(|err| anyhow!("Failed to run the UI: {err}"))
}
