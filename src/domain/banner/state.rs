// SPDX-License-Identifier: MPL-2.0
//! Banner presentation states.

use std::fmt;

/// Where a banner is in its presentation lifecycle.
///
/// States only ever move forward:
/// `Unattached → Entering → Idle → Exiting → Removed`, with `Entering` and
/// `Idle` both allowed to jump straight to `Exiting` or `Removed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerState {
    /// Created but not inserted into the host yet.
    #[default]
    Unattached,
    /// Attached; waiting for a measurement or playing the enter animation.
    Entering,
    /// Fully shown and interactive.
    Idle,
    /// Exit requested; the exit animation is playing or pending.
    Exiting,
    /// Detached from the host. Terminal.
    Removed,
}

impl BannerState {
    /// Returns true while the surface is held by the host.
    #[must_use]
    pub fn is_attached(self) -> bool {
        matches!(self, Self::Entering | Self::Idle | Self::Exiting)
    }

    /// Returns true once a dismissal has started or completed.
    #[must_use]
    pub fn is_dismissing(self) -> bool {
        matches!(self, Self::Exiting | Self::Removed)
    }

    /// Returns true for the terminal state.
    #[must_use]
    pub fn is_removed(self) -> bool {
        matches!(self, Self::Removed)
    }

    /// Ordinal used to assert forward-only progress.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Unattached => 0,
            Self::Entering => 1,
            Self::Idle => 2,
            Self::Exiting => 3,
            Self::Removed => 4,
        }
    }
}

impl fmt::Display for BannerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unattached => "unattached",
            Self::Entering => "entering",
            Self::Idle => "idle",
            Self::Exiting => "exiting",
            Self::Removed => "removed",
        };
        f.write_str(name)
    }
}
