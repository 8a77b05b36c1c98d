// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! Phosphor glyphs for contact entries and notification severities.

use crate::models::contact_info::ContactIcon;
use crate::models::outcome::Severity;

/// Return the Phosphor glyph for a contact entry icon.
pub fn icon_for(icon: ContactIcon) -> &'static str {
    match icon {
        ContactIcon::Phone => egui_phosphor::regular::PHONE,
        ContactIcon::Envelope => egui_phosphor::regular::ENVELOPE,
        ContactIcon::MapPin => egui_phosphor::regular::MAP_PIN,
    }
}

/// Return the Phosphor glyph shown in a notification modal.
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => egui_phosphor::regular::CHECK_CIRCLE,
        Severity::Error => egui_phosphor::regular::X_CIRCLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_contact_icon_has_its_own_glyph() {
        let glyphs = [
            icon_for(ContactIcon::Phone),
            icon_for(ContactIcon::Envelope),
            icon_for(ContactIcon::MapPin),
        ];
        assert_ne!(glyphs[0], glyphs[1]);
        assert_ne!(glyphs[1], glyphs[2]);
        assert_ne!(glyphs[0], glyphs[2]);
    }

    #[test]
    fn severities_use_distinct_glyphs() {
        assert_ne!(
            severity_icon(Severity::Success),
            severity_icon(Severity::Error)
        );
    }
}
