// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Non-UI logic: the relay client and the submission handler built on it.

pub mod relay;
pub mod submission;
