// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Translations, alphas and eased progress are all `f32`; tests compare
//! them with the `approx` macros instead of `assert_eq!`.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;
