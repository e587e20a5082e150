// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting banner activity.
//!
//! This module captures lifecycle transitions, user actions and absorbed
//! failures, stores them in a memory-bounded circular buffer, and exports
//! them as JSON reports.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event wrapper
//! - [`DiagnosticsHandle`]: Non-blocking, cloneable sender used by the banner
//! - [`DiagnosticsCollector`]: Drains the channel and builds reports

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningType};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
