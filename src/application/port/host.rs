// SPDX-License-Identifier: MPL-2.0
//! Overlay host port definition.
//!
//! This module defines the [`OverlayHost`] trait: the platform service that
//! can place the banner surface above the application content and take it
//! away again. The iced adapter lives in `ui::chip::WindowOverlay`.
//!
//! # Design Notes
//!
//! - The host is **not** trusted to be present: `is_available` may turn
//!   false at any time (window closed, service torn down)
//! - Removal is synchronous; the lifecycle schedules its own delays
//! - The host may detach the surface on its own; `is_attached` is the
//!   source of truth the lifecycle re-checks before removing

use std::fmt;

// =============================================================================
// HostError
// =============================================================================

/// Errors reported by an overlay host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The overlay service cannot be reached.
    Unavailable,

    /// The handle does not refer to an attached surface.
    NotAttached,

    /// The host refused the operation for a platform-specific reason.
    Rejected(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Unavailable => write!(f, "Overlay host unavailable"),
            HostError::NotAttached => write!(f, "Surface is not attached"),
            HostError::Rejected(msg) => write!(f, "Overlay host rejected request: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

// =============================================================================
// HostHandle
// =============================================================================

/// Opaque token identifying an inserted surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostHandle(u64);

impl HostHandle {
    /// Wraps a host-specific identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the host-specific identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

// =============================================================================
// OverlayHost Trait
// =============================================================================

/// Port for inserting and removing the banner surface.
///
/// # Lifecycle
///
/// 1. `insert()` places the surface and returns a handle
/// 2. `is_attached(handle)` stays true until either side removes it
/// 3. `remove_immediate(handle)` detaches synchronously
pub trait OverlayHost {
    /// Returns whether the overlay service can currently be used.
    fn is_available(&self) -> bool;

    /// Inserts the banner surface above the application content.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Unavailable`] when no overlay layer exists, or
    /// [`HostError::Rejected`] when the platform refuses the insertion.
    fn insert(&mut self) -> Result<HostHandle, HostError>;

    /// Returns whether the surface behind `handle` is still attached.
    fn is_attached(&self, handle: HostHandle) -> bool;

    /// Removes the surface synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::NotAttached`] if the surface is already gone.
    fn remove_immediate(&mut self, handle: HostHandle) -> Result<(), HostError>;
}
