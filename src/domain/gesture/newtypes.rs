// SPDX-License-Identifier: MPL-2.0
//! Gesture tuning newtypes.
//!
//! The fling thresholds and fade coefficient of the swipe recognizer are
//! tuning constants; they are exposed as validated values so hosts can
//! adjust them per device density.

// =============================================================================
// Fling Velocity
// =============================================================================

/// Fling velocity bounds in logical pixels per second.
pub mod fling_bounds {
    /// Lowest accepted velocity threshold.
    pub const MIN: f32 = 50.0;
    /// Highest accepted velocity threshold.
    pub const MAX: f32 = 20_000.0;
    /// Default minimum velocity for a fling to count as a dismiss.
    pub const DEFAULT_MIN: f32 = 800.0;
    /// Default velocity above which a fling is ignored as noise.
    pub const DEFAULT_MAX: f32 = 8_000.0;
}

/// A velocity threshold in logical pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingVelocity(f32);

impl FlingVelocity {
    /// Creates a new threshold, clamping to the valid range.
    #[must_use]
    pub fn new(px_per_sec: f32) -> Self {
        if px_per_sec.is_nan() {
            return Self(fling_bounds::DEFAULT_MIN);
        }
        Self(px_per_sec.clamp(fling_bounds::MIN, fling_bounds::MAX))
    }

    /// Returns the threshold in px/s.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// Dismiss Fraction
// =============================================================================

/// Dismiss fraction bounds.
pub mod fraction_bounds {
    /// Smallest fraction of the width a drag must cross.
    pub const MIN: f32 = 0.1;
    /// Largest fraction (the full width).
    pub const MAX: f32 = 1.0;
    /// Default: half of the view width.
    pub const DEFAULT: f32 = 0.5;
}

/// Fraction of the view width a drag must exceed to dismiss on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissFraction(f32);

impl DismissFraction {
    /// Creates a new fraction, clamping to the valid range.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::default();
        }
        Self(fraction.clamp(fraction_bounds::MIN, fraction_bounds::MAX))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Distance in pixels for a view of the given width.
    #[must_use]
    pub fn of(self, width: f32) -> f32 {
        width * self.0
    }
}

impl Default for DismissFraction {
    fn default() -> Self {
        Self(fraction_bounds::DEFAULT)
    }
}

// =============================================================================
// Touch Slop
// =============================================================================

/// Touch slop bounds in logical pixels.
pub mod slop_bounds {
    /// Minimum slop.
    pub const MIN: f32 = 1.0;
    /// Maximum slop.
    pub const MAX: f32 = 64.0;
    /// Default slop, matching common platform conventions.
    pub const DEFAULT: f32 = 8.0;
}

/// Distance a pointer must travel before a drag is classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSlop(f32);

impl TouchSlop {
    /// Creates a new slop, clamping to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(slop_bounds::MIN, slop_bounds::MAX))
    }

    /// Returns the slop in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for TouchSlop {
    fn default() -> Self {
        Self(slop_bounds::DEFAULT)
    }
}
