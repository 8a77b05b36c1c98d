// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI components.

pub mod contact_icons;

/// Select a Phosphor icon for a contact entry.
pub use contact_icons::icon_for;
/// Select a Phosphor icon for a notification severity.
pub use contact_icons::severity_icon;
