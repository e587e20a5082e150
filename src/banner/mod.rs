// SPDX-License-Identifier: MPL-2.0
//! Banner presentation core.
//!
//! This module holds the framework-independent behaviour of the chip:
//!
//! - [`lifecycle`]: the attach → enter → idle → exit → detach state machine
//! - [`swipe`]: the horizontal swipe-to-dismiss recognizer
//! - [`animation`]: easing curves and time-sampled animations
//! - [`options`]: per-banner options and shared settings
//!
//! Adapters plug in through the ports in [`crate::application::port`].

pub mod animation;
pub mod lifecycle;
pub mod options;
pub mod swipe;

#[cfg(test)]
mod tests;

pub use animation::{Animation, Easing};
pub use lifecycle::BannerLifecycle;
pub use options::{BannerOptions, BannerSettings, ButtonSpec};
pub use swipe::{BodyTransform, PointerResponse, SwipeCallbacks, SwipeDismissRecognizer, SwipeSettings};
