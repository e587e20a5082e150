// SPDX-License-Identifier: MPL-2.0
//! `iced_chip` is a transient notification chip for the Iced GUI framework.
//!
//! The chip slides in from the top of the window, shows a title, subtitle,
//! icon or progress indicator and action buttons, and slides out again
//! after a timeout, on request, or when swiped away.
//!
//! The presentation logic lives in [`banner`] and only talks to the outside
//! world through the ports in [`application::port`]; [`ui`] implements those
//! ports with iced widgets.

#![doc(html_root_url = "https://docs.rs/iced_chip/0.1.0")]

pub mod app;
pub mod application;
pub mod banner;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
