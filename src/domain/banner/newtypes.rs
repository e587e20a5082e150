// SPDX-License-Identifier: MPL-2.0
//! Banner newtypes.
//!
//! Type-safe wrappers for the timing and geometry values that drive the
//! banner lifecycle, each clamped into its valid range on construction.

use std::time::Duration;

// =============================================================================
// Animation Duration
// =============================================================================

/// Animation duration bounds (50 ms to 5 s).
pub mod animation_bounds {
    /// Minimum animation duration in milliseconds.
    pub const MIN_MS: u64 = 50;
    /// Maximum animation duration in milliseconds.
    pub const MAX_MS: u64 = 5_000;
    /// Default animation duration in milliseconds.
    pub const DEFAULT_MS: u64 = 500;
}

/// Duration of the enter and exit slide animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new animation duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(animation_bounds::MIN_MS, animation_bounds::MAX_MS))
    }

    /// Returns the raw value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Resting Offset
// =============================================================================

/// Resting offset bounds (-400 to 400 logical pixels).
pub mod offset_bounds {
    /// Minimum resting offset.
    pub const MIN: f32 = -400.0;
    /// Maximum resting offset.
    pub const MAX: f32 = 400.0;
    /// Default resting offset.
    pub const DEFAULT: f32 = -80.0;
}

/// Vertical translation of the banner once it is fully visible.
///
/// The banner layout reserves room above the content (for the status bar
/// and the overshoot of the enter curve), so the resting position is a
/// negative translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestingOffset(f32);

impl RestingOffset {
    /// Creates a new resting offset, clamping to the valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(offset_bounds::MIN, offset_bounds::MAX))
    }

    /// Returns the offset in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for RestingOffset {
    fn default() -> Self {
        Self(offset_bounds::DEFAULT)
    }
}

// =============================================================================
// Display Time
// =============================================================================

/// Display time bounds (0.5 s to 60 s).
pub mod display_bounds {
    /// Minimum display time in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum display time in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default display time in milliseconds.
    pub const DEFAULT_MS: u64 = 3_000;
}

/// How long the banner stays up before it dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime(u64);

impl DisplayTime {
    /// Creates a new display time, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(display_bounds::MIN_MS, display_bounds::MAX_MS))
    }

    /// Returns the raw value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DisplayTime {
    fn default() -> Self {
        Self(display_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Measured Height
// =============================================================================

/// Height of the banner reported by the first usable layout pass.
///
/// Unlike the other newtypes this one does not clamp: a zero, negative or
/// NaN height means "not measured yet" and is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredHeight(f32);

impl MeasuredHeight {
    /// Returns a measured height if `px` is a usable, strictly positive value.
    #[must_use]
    pub fn new(px: f32) -> Option<Self> {
        (px.is_finite() && px > 0.0).then_some(Self(px))
    }

    /// Returns the height in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Translation at which the banner is fully hidden above the screen edge.
    #[must_use]
    pub fn hidden_offset(self) -> f32 {
        -self.0
    }
}
