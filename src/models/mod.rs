// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types and validation helpers shared between UI and relay logic.

pub mod contact_info;
pub mod outcome;
pub mod submission;
