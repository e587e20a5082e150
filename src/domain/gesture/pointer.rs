// SPDX-License-Identifier: MPL-2.0
//! Framework-independent pointer events.

use std::time::Instant;

/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Finger or button pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Finger lifted or button released.
    Up,
    /// The platform took the gesture away (e.g. a parent started scrolling).
    Cancel,
}

/// A single pointer event delivered to the banner body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub phase: PointerPhase,
    /// Position in the coordinate space of the body's parent.
    pub position: Position,
    /// When the event was produced.
    pub at: Instant,
}

impl PointerEvent {
    /// Creates a pointer-down event.
    #[must_use]
    pub fn down(x: f32, y: f32, at: Instant) -> Self {
        Self::new(PointerPhase::Down, x, y, at)
    }

    /// Creates a pointer-move event.
    #[must_use]
    pub fn moved(x: f32, y: f32, at: Instant) -> Self {
        Self::new(PointerPhase::Move, x, y, at)
    }

    /// Creates a pointer-up event.
    #[must_use]
    pub fn up(x: f32, y: f32, at: Instant) -> Self {
        Self::new(PointerPhase::Up, x, y, at)
    }

    /// Creates a pointer-cancel event.
    #[must_use]
    pub fn cancel(x: f32, y: f32, at: Instant) -> Self {
        Self::new(PointerPhase::Cancel, x, y, at)
    }

    fn new(phase: PointerPhase, x: f32, y: f32, at: Instant) -> Self {
        Self {
            phase,
            position: Position::new(x, y),
            at,
        }
    }
}

/// Direction a swipe leaves the screen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
}

impl SwipeDirection {
    /// Direction matching the sign of a horizontal delta.
    #[must_use]
    pub fn from_delta(dx: f32) -> Self {
        if dx < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Sign multiplier (-1 for left, 1 for right).
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}
