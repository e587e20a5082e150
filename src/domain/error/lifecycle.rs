// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle error taxonomy.
//!
//! None of these are surfaced to callers of the dismiss entry points: the
//! lifecycle absorbs them and reports them to diagnostics instead.

use crate::domain::banner::BannerState;
use std::fmt;

/// Lifecycle operations that can be attempted from the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Insert the banner into its host.
    Show,
    /// Host notified the banner it was attached.
    Attach,
    /// Start the exit.
    Dismiss,
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleAction::Show => write!(f, "show"),
            LifecycleAction::Attach => write!(f, "attach"),
            LifecycleAction::Dismiss => write!(f, "dismiss"),
        }
    }
}

/// Errors raised (and absorbed) by the banner lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    /// The action is not valid in the current state, e.g. a show after removal.
    IllegalTransition {
        /// State the banner was in.
        from: BannerState,
        /// What was attempted.
        action: LifecycleAction,
    },

    /// An animation needs the banner height but no layout pass reported one.
    MissingMeasurement,
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::IllegalTransition { from, action } => {
                write!(f, "Cannot {action} a banner that is {from}")
            }
            LifecycleError::MissingMeasurement => {
                write!(f, "Banner height has not been measured yet")
            }
        }
    }
}

impl std::error::Error for LifecycleError {}
