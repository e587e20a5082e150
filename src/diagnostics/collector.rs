// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The banner lifecycle logs through a cloneable [`DiagnosticsHandle`]; the
//! [`DiagnosticsCollector`] drains the channel into a circular buffer and
//! can export everything as JSON.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport, ReportMetadata,
    SerializableEvent, UserAction, WarningEvent,
};
use crate::domain::banner::BannerState;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a lifecycle state transition.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_transition(&self, from: BannerState, to: BannerState) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::transition(from, to));
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a user action event.
    ///
    /// This method is non-blocking.
    pub fn log_action(&self, action: UserAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an absorbed failure.
    ///
    /// This method is non-blocking.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event: warning });
        let _ = self.event_tx.try_send(event);
    }

    /// Attempts to send an action, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log_action(&self, action: UserAction) -> Result<(), TrySendError<DiagnosticEvent>> {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        self.event_tx.try_send(event)
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    /// Circular buffer storing diagnostic events.
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Receiver for incoming events.
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// When collection started (monotonic clock for duration calculations).
    collection_started_at: Instant,
    /// When collection started (wall clock for report metadata).
    collection_started_at_utc: DateTime<Utc>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector keeping at most `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_channel_capacity(capacity, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a collector with an explicit channel size.
    ///
    /// Useful for exercising backpressure with tiny channels.
    #[must_use]
    pub fn with_channel_capacity(capacity: usize, channel_capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(channel_capacity.max(1));

        Self {
            buffer: CircularBuffer::with_capacity(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns how many events were evicted to make room for newer ones.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.buffer.evicted()
    }

    /// Returns the buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all collected events as a JSON diagnostic report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
            self.buffer.evicted(),
        );

        DiagnosticReport::new(metadata, events)
    }
}
