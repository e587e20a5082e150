// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that adapters implement.
//! These traits use only domain types, ensuring the banner core remains
//! independent of concrete presentation frameworks.
//!
//! # Available Ports
//!
//! - [`host`]: Overlay insertion and removal
//! - [`surface`]: Visual slots and decoration hooks
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced widgets or handles)
//! - Everything runs on the UI thread, so no `Send`/`Sync` bounds
//! - Host failures are reported with [`HostError`]; the lifecycle decides
//!   which ones to absorb

pub mod host;
pub mod surface;

// Re-export main types for convenience
pub use host::{HostError, HostHandle, OverlayHost};
pub use surface::{BannerSurface, ButtonStyle, Decorations, Slot, SlotContent, VisualSlots};
