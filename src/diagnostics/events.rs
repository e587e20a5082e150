// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for banner activity.
//!
//! Events record what the banner did (state transitions), what the user or
//! caller asked for (actions), and which failures were absorbed (warnings).

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::banner::BannerState;

/// Caller- or user-initiated requests on a banner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// The banner was asked to appear.
    Show,

    /// A dismissal was requested by the caller or the auto-dismiss timer.
    Hide {
        /// Whether the exit animation was skipped.
        immediate: bool,
    },

    /// A swipe gesture crossed the dismiss threshold.
    SwipeDismiss,

    /// The banner body was clicked.
    BodyClick,

    /// An action button was clicked.
    ButtonClick {
        /// Position of the button in the row.
        index: usize,
    },
}

/// Categories of absorbed failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The overlay host could not be reached.
    HostUnavailable,
    /// The host failed to remove the surface.
    HostRemovalFailed,
    /// An action was ignored because of the current state.
    IllegalTransition,
    /// An animation was deferred until the banner is measured.
    MissingMeasurement,
    /// Other warning type not covered by specific categories.
    Other,
}

/// An absorbed failure, with a human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    /// Category of the warning.
    pub warning_type: WarningType,
    /// Description of what was ignored.
    pub message: String,
}

impl WarningEvent {
    /// Creates a new warning event.
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// The banner moved from one lifecycle state to another.
    StateTransition {
        /// Previous state name.
        from: String,
        /// New state name.
        to: String,
    },

    /// A request made on the banner.
    UserAction {
        /// The specific action performed.
        action: UserAction,
    },

    /// A failure that was absorbed instead of surfaced.
    Warning {
        /// The warning details.
        event: WarningEvent,
    },
}

impl DiagnosticEventKind {
    /// Builds a state transition event.
    #[must_use]
    pub fn transition(from: BannerState, to: BannerState) -> Self {
        Self::StateTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
