// SPDX-License-Identifier: MPL-2.0
//! Iced adapter for the banner core.
//!
//! - [`chip`] - Surface and overlay host implementations plus the chip view
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod chip;
pub mod design_tokens;

pub use chip::{ChipSurface, PointerTracker, WindowOverlay};
