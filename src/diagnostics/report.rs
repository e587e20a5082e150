// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and JSON export.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

// =============================================================================
// Report Metadata
// =============================================================================

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (ISO 8601)
    pub generated_at: String,
    /// Version of the crate that generated the report
    pub version: String,
    /// When diagnostic collection started (ISO 8601)
    pub collection_started_at: String,
    /// Duration of collection in milliseconds
    pub collection_duration_ms: u64,
    /// Total number of events in the report
    pub event_count: usize,
    /// Events that fell out of the buffer before export
    pub evicted_events: u64,
}

impl ReportMetadata {
    /// Creates new report metadata.
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
        evicted_events: u64,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
            evicted_events,
        }
    }
}

// =============================================================================
// Serializable Event
// =============================================================================

/// An event with its timestamp made relative to the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    /// The event data
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    /// Creates a serializable event from a diagnostic event.
    ///
    /// Events stamped before `collection_start` get a zero offset.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

// =============================================================================
// Diagnostic Report
// =============================================================================

/// Complete exported report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    /// Report metadata.
    pub metadata: ReportMetadata,
    /// Events, oldest first.
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    /// Creates a report from metadata and events.
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        Self { metadata, events }
    }
}
