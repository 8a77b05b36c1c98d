// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Static contact details shown beside the form.

/// Icon identifier for a contact entry, mapped to a glyph by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactIcon {
    Phone,
    Envelope,
    MapPin,
}

/// A single row of the contact information panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    pub icon: ContactIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Contact entries in display order.
pub const CONTACT_INFO: [ContactEntry; 3] = [
    ContactEntry {
        icon: ContactIcon::Phone,
        title: "Phone",
        description: "(+212) 630 718 753",
    },
    ContactEntry {
        icon: ContactIcon::Envelope,
        title: "Email",
        description: "sanaaennaji93@gmail.com",
    },
    ContactEntry {
        icon: ContactIcon::MapPin,
        title: "Location",
        description: "Morocco",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_info_keeps_insertion_order() {
        let titles: Vec<_> = CONTACT_INFO.iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Phone", "Email", "Location"]);

        let icons: Vec<_> = CONTACT_INFO.iter().map(|e| e.icon).collect();
        assert_eq!(
            icons,
            [ContactIcon::Phone, ContactIcon::Envelope, ContactIcon::MapPin]
        );
    }

    #[test]
    fn contact_info_descriptions_are_filled() {
        assert!(CONTACT_INFO.iter().all(|e| !e.description.is_empty()));
    }
}
