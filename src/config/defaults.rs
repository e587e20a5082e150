// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the values a fresh
//! `settings.toml` resolves to. Where a domain newtype validates the same
//! quantity, the compile-time checks below keep both in agreement.
//!
//! # Categories
//!
//! - **Banner**: Animation timing, resting offset and display time
//! - **Swipe**: Gesture thresholds and settle timing
//! - **Diagnostics**: Event buffer sizing

use crate::domain::banner::newtypes::{animation_bounds, display_bounds, offset_bounds};
use crate::domain::gesture::newtypes::{fling_bounds, fraction_bounds, slop_bounds};

// ==========================================================================
// Banner Defaults
// ==========================================================================

/// Duration of the enter and exit animations (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 500;

/// Vertical translation of the banner while shown (in logical pixels).
pub const DEFAULT_RESTING_OFFSET: f32 = -80.0;

/// How long a banner stays up before hiding itself (in milliseconds).
pub const DEFAULT_DISPLAY_TIME_MS: u64 = 3_000;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Horizontal travel before a drag is classified (in logical pixels).
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Minimum release velocity for a fling (px/s).
pub const DEFAULT_MIN_FLING_VELOCITY: f32 = 800.0;

/// Release velocity above which a fling is ignored (px/s).
pub const DEFAULT_MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Fraction of the width a slow drag must cover to dismiss.
pub const DEFAULT_DISMISS_FRACTION: f32 = 0.5;

/// Alpha lost per width fraction dragged.
pub const DEFAULT_FADE_FACTOR: f32 = 2.0;

/// Minimum fade factor (no fading).
pub const MIN_FADE_FACTOR: f32 = 0.0;

/// Maximum fade factor.
pub const MAX_FADE_FACTOR: f32 = 10.0;

/// Duration of snap-back and fly-away animations (in milliseconds).
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 200;

/// Minimum settle duration (in milliseconds).
pub const MIN_SETTLE_DURATION_MS: u64 = 50;

/// Maximum settle duration (in milliseconds).
pub const MAX_SETTLE_DURATION_MS: u64 = 2_000;

/// Vertical-to-horizontal travel ratio that aborts a swipe.
pub const DEFAULT_VERTICAL_ABORT_RATIO: f32 = 1.0;

/// Minimum vertical abort ratio.
pub const MIN_VERTICAL_ABORT_RATIO: f32 = 0.25;

/// Maximum vertical abort ratio.
pub const MAX_VERTICAL_ABORT_RATIO: f32 = 4.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Banner validation
    assert!(DEFAULT_ANIMATION_DURATION_MS == animation_bounds::DEFAULT_MS);
    assert!(DEFAULT_RESTING_OFFSET == offset_bounds::DEFAULT);
    assert!(DEFAULT_DISPLAY_TIME_MS == display_bounds::DEFAULT_MS);
    assert!(DEFAULT_DISPLAY_TIME_MS >= DEFAULT_ANIMATION_DURATION_MS);

    // Swipe validation
    assert!(DEFAULT_TOUCH_SLOP == slop_bounds::DEFAULT);
    assert!(DEFAULT_MIN_FLING_VELOCITY == fling_bounds::DEFAULT_MIN);
    assert!(DEFAULT_MAX_FLING_VELOCITY == fling_bounds::DEFAULT_MAX);
    assert!(DEFAULT_MIN_FLING_VELOCITY < DEFAULT_MAX_FLING_VELOCITY);
    assert!(DEFAULT_DISMISS_FRACTION == fraction_bounds::DEFAULT);
    assert!(DEFAULT_FADE_FACTOR >= MIN_FADE_FACTOR);
    assert!(DEFAULT_FADE_FACTOR <= MAX_FADE_FACTOR);
    assert!(MIN_SETTLE_DURATION_MS > 0);
    assert!(DEFAULT_SETTLE_DURATION_MS >= MIN_SETTLE_DURATION_MS);
    assert!(DEFAULT_SETTLE_DURATION_MS <= MAX_SETTLE_DURATION_MS);
    assert!(MIN_VERTICAL_ABORT_RATIO > 0.0);
    assert!(DEFAULT_VERTICAL_ABORT_RATIO >= MIN_VERTICAL_ABORT_RATIO);
    assert!(DEFAULT_VERTICAL_ABORT_RATIO <= MAX_VERTICAL_ABORT_RATIO);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
};
