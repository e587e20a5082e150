// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core banner rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`banner`]: Lifecycle states ([`BannerState`](banner::BannerState)) and
//!   timing values ([`AnimationDuration`](banner::AnimationDuration),
//!   [`RestingOffset`](banner::RestingOffset), [`DisplayTime`](banner::DisplayTime))
//! - [`error`]: Domain error types ([`LifecycleError`](error::LifecycleError))
//! - [`gesture`]: Pointer events and swipe thresholds
//!   ([`PointerEvent`](gesture::PointerEvent), [`FlingVelocity`](gesture::FlingVelocity))

pub mod banner;
pub mod error;
pub mod gesture;
