// SPDX-License-Identifier: MPL-2.0
//! Application layer - Port definitions.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Adapters (the `ui` module, test doubles) implement application layer ports
//! - The banner core drives the ports and never names a concrete adapter
//!
//! # Example
//!
//! ```ignore
//! use iced_chip::application::port::{HostError, HostHandle, OverlayHost};
//!
//! struct Compositor { /* ... */ }
//! impl OverlayHost for Compositor { /* ... */ }
//! ```

pub mod port;
