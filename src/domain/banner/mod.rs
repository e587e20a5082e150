// SPDX-License-Identifier: MPL-2.0
//! Banner domain types.
//!
//! Presentation states and the validated timing/geometry values used by
//! the banner lifecycle, independent of any presentation framework.

pub mod newtypes;
pub mod state;

pub use newtypes::{AnimationDuration, DisplayTime, MeasuredHeight, RestingOffset};
pub use state::BannerState;
