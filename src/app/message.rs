// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::chip;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Periodic tick driving animations and timers.
    Tick(Instant),
    Chip(chip::Message),
    ShowPressed,
    HidePressed,
    HideNowPressed,
    ExportDiagnostics,
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Show a progress indicator instead of the icon.
    pub progress: bool,
    /// Keep the chip up until it is dismissed.
    pub sticky: bool,
}
