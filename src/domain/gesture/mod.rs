// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! Pointer events as seen by the swipe recognizer and the validated
//! thresholds it classifies them with.

pub mod newtypes;
pub mod pointer;

pub use newtypes::{DismissFraction, FlingVelocity, TouchSlop};
pub use pointer::{PointerEvent, PointerPhase, Position, SwipeDirection};
