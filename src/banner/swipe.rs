// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe-to-dismiss gesture recognition.
//!
//! The recognizer consumes the pointer stream of the banner body. It tracks
//! at most one gesture at a time, applies the drag as a live translation and
//! fade, and on release either flies the body off-screen (then reports a
//! dismiss) or snaps it back. Vertical drags are left to the caller, and a
//! pointer sequence that never became a swipe resolves as a click.

use super::animation::{Animation, Easing};
use crate::domain::gesture::{
    DismissFraction, FlingVelocity, PointerEvent, PointerPhase, Position, SwipeDirection, TouchSlop,
};
use crate::domain::gesture::newtypes::fling_bounds;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default fade coefficient: the body is fully transparent at half the width.
pub const DEFAULT_FADE_FACTOR: f32 = 2.0;

/// Default duration of snap-back and fly-away animations.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(200);

/// Default ratio of vertical to horizontal travel that aborts a session.
pub const DEFAULT_VERTICAL_ABORT_RATIO: f32 = 1.0;

/// Default window over which release velocity is measured.
pub const DEFAULT_VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Upper bound on retained velocity samples.
const MAX_SAMPLES: usize = 20;

/// Tuning of the swipe classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSettings {
    /// Horizontal travel required before a drag counts as a swipe.
    pub touch_slop: TouchSlop,
    /// Minimum release velocity for a fling.
    pub min_fling: FlingVelocity,
    /// Release velocities above this are treated as noise.
    pub max_fling: FlingVelocity,
    /// Fraction of the width a drag must cover to dismiss without a fling.
    pub dismiss_fraction: DismissFraction,
    /// Alpha lost per width fraction travelled.
    pub fade_factor: f32,
    /// Duration of the snap-back and fly-away animations.
    pub settle_duration: Duration,
    /// Vertical travel, relative to horizontal, that aborts tracking.
    pub vertical_abort_ratio: f32,
    /// Window of recent samples used for the release velocity.
    pub velocity_window: Duration,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            touch_slop: TouchSlop::default(),
            min_fling: FlingVelocity::new(fling_bounds::DEFAULT_MIN),
            max_fling: FlingVelocity::new(fling_bounds::DEFAULT_MAX),
            dismiss_fraction: DismissFraction::default(),
            fade_factor: DEFAULT_FADE_FACTOR,
            settle_duration: DEFAULT_SETTLE_DURATION,
            vertical_abort_ratio: DEFAULT_VERTICAL_ABORT_RATIO,
            velocity_window: DEFAULT_VELOCITY_WINDOW,
        }
    }
}

/// Receiver of recognizer decisions.
pub trait SwipeCallbacks {
    /// Whether a new gesture may start tracking.
    fn can_dismiss(&self) -> bool;

    /// The body finished flying off-screen.
    fn on_dismiss(&mut self);

    /// A tracked gesture started (`true`) or ended (`false`).
    fn on_touch(&mut self, is_down: bool);
}

/// How the recognizer treated a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerResponse {
    /// Not handled; the caller may route it elsewhere (e.g. scrolling).
    Ignored,
    /// Handled as part of a gesture.
    Consumed,
    /// The pointer sequence ended as a click on the body.
    Click,
}

/// Visual transform applied to the banner body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    /// Horizontal translation in logical pixels.
    pub translation_x: f32,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

impl Default for BodyTransform {
    fn default() -> Self {
        Self {
            translation_x: 0.0,
            alpha: 1.0,
        }
    }
}

#[derive(Debug, Default)]
struct VelocityTracker {
    samples: VecDeque<(Instant, Position)>,
}

impl VelocityTracker {
    fn add(&mut self, at: Instant, position: Position, window: Duration) {
        self.samples.push_back((at, position));
        while self.samples.len() > MAX_SAMPLES {
            self.samples.pop_front();
        }
        while let Some(&(oldest, _)) = self.samples.front() {
            if at.saturating_duration_since(oldest) > window {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity in px/s between the oldest and newest retained samples.
    fn velocity(&self) -> (f32, f32) {
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back()) else {
            return (0.0, 0.0);
        };
        let dt = t1.saturating_duration_since(t0).as_secs_f32();
        if dt <= 0.0 {
            return (0.0, 0.0);
        }
        ((p1.x - p0.x) / dt, (p1.y - p0.y) / dt)
    }
}

#[derive(Debug)]
struct SwipeSession {
    start: Position,
    /// The pointer travelled beyond the touch slop at some point.
    left_slop: bool,
    swiping: bool,
    aborted: bool,
    tracker: VelocityTracker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettleKind {
    SnapBack,
    FlyAway,
}

#[derive(Debug, Clone, Copy)]
struct Settle {
    kind: SettleKind,
    translation: Animation,
    alpha: Animation,
}

/// Classifies the pointer stream of one banner body.
#[derive(Debug)]
pub struct SwipeDismissRecognizer {
    settings: SwipeSettings,
    width: f32,
    session: Option<SwipeSession>,
    settle: Option<Settle>,
    transform: BodyTransform,
    dismissed: bool,
}

impl SwipeDismissRecognizer {
    /// Creates a recognizer for a body of the given width.
    #[must_use]
    pub fn attach(width: f32, settings: SwipeSettings) -> Self {
        let mut recognizer = Self {
            settings,
            width: 0.0,
            session: None,
            settle: None,
            transform: BodyTransform::default(),
            dismissed: false,
        };
        recognizer.set_width(width);
        recognizer
    }

    /// Updates the body width. A zero or invalid width disables tracking.
    pub fn set_width(&mut self, width: f32) {
        self.width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    /// Current body width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Replaces the tuning. Takes effect on the next gesture.
    pub fn set_settings(&mut self, settings: SwipeSettings) {
        self.settings = settings;
    }

    /// Returns true while a gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Returns true while a snap-back or fly-away animation runs.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Returns true once a fly-away completed and the dismiss was reported.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Transform of the body at `now`.
    #[must_use]
    pub fn transform(&self, now: Instant) -> BodyTransform {
        match self.settle {
            Some(settle) => BodyTransform {
                translation_x: settle.translation.value_at(now),
                alpha: settle.alpha.value_at(now).clamp(0.0, 1.0),
            },
            None => self.transform,
        }
    }

    /// Feeds one pointer event.
    pub fn handle(&mut self, event: PointerEvent, callbacks: &mut impl SwipeCallbacks) -> PointerResponse {
        if self.dismissed {
            return PointerResponse::Ignored;
        }
        match event.phase {
            PointerPhase::Down => self.on_down(event, callbacks),
            PointerPhase::Move => self.on_move(event),
            PointerPhase::Up => self.on_up(event, callbacks),
            PointerPhase::Cancel => self.on_cancel(event, callbacks),
        }
    }

    /// Advances the settle animation; reports the dismiss once a fly-away
    /// completes.
    pub fn tick(&mut self, now: Instant, callbacks: &mut impl SwipeCallbacks) {
        let Some(settle) = self.settle else {
            return;
        };
        if !settle.translation.is_finished(now) {
            return;
        }
        self.settle = None;
        self.transform = BodyTransform {
            translation_x: settle.translation.to(),
            alpha: settle.alpha.to(),
        };
        if settle.kind == SettleKind::FlyAway {
            self.dismissed = true;
            callbacks.on_dismiss();
        }
    }

    /// Ends the tracked gesture without a decision and snaps the body back.
    /// Returns whether a gesture was being tracked.
    pub fn cancel(&mut self, at: Instant, callbacks: &mut impl SwipeCallbacks) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        callbacks.on_touch(false);
        self.snap_back(at);
        true
    }

    /// Drops any gesture and animation and restores the identity transform.
    pub fn reset(&mut self) {
        self.session = None;
        self.settle = None;
        self.transform = BodyTransform::default();
        self.dismissed = false;
    }

    fn on_down(&mut self, event: PointerEvent, callbacks: &mut impl SwipeCallbacks) -> PointerResponse {
        if self.settle.is_some() || self.width <= 0.0 || !callbacks.can_dismiss() {
            return PointerResponse::Ignored;
        }
        let mut tracker = VelocityTracker::default();
        tracker.add(event.at, event.position, self.settings.velocity_window);
        self.session = Some(SwipeSession {
            start: event.position,
            left_slop: false,
            swiping: false,
            aborted: false,
            tracker,
        });
        callbacks.on_touch(true);
        PointerResponse::Consumed
    }

    fn on_move(&mut self, event: PointerEvent) -> PointerResponse {
        let window = self.settings.velocity_window;
        let Some(session) = self.session.as_mut() else {
            return PointerResponse::Ignored;
        };
        session.tracker.add(event.at, event.position, window);
        let dx = event.position.x - session.start.x;
        let dy = event.position.y - session.start.y;
        Self::classify(&self.settings, session, dx, dy);

        if session.aborted {
            return PointerResponse::Ignored;
        }
        if session.swiping {
            self.transform = self.drag_transform(dx);
        }
        PointerResponse::Consumed
    }

    fn on_up(&mut self, event: PointerEvent, callbacks: &mut impl SwipeCallbacks) -> PointerResponse {
        let Some(mut session) = self.session.take() else {
            return PointerResponse::Ignored;
        };
        session
            .tracker
            .add(event.at, event.position, self.settings.velocity_window);
        let dx = event.position.x - session.start.x;
        let dy = event.position.y - session.start.y;
        Self::classify(&self.settings, &mut session, dx, dy);
        callbacks.on_touch(false);

        if session.aborted {
            self.snap_back(event.at);
            return PointerResponse::Ignored;
        }
        if !session.swiping {
            if !session.left_slop {
                return PointerResponse::Click;
            }
            // Diagonal drags that never met the swipe rule resolve on
            // their horizontal travel.
            if dx.abs() <= self.settings.touch_slop.value() {
                self.snap_back(event.at);
                return PointerResponse::Consumed;
            }
            session.swiping = true;
        }

        let (vx, vy) = session.tracker.velocity();
        let far_enough = dx.abs() >= self.settings.dismiss_fraction.of(self.width);
        if far_enough || self.is_fling(dx, vx, vy) {
            self.fly_away(SwipeDirection::from_delta(dx), event.at);
        } else {
            self.snap_back(event.at);
        }
        PointerResponse::Consumed
    }

    fn on_cancel(&mut self, event: PointerEvent, callbacks: &mut impl SwipeCallbacks) -> PointerResponse {
        let Some(session) = self.session.take() else {
            return PointerResponse::Ignored;
        };
        callbacks.on_touch(false);
        self.snap_back(event.at);
        if session.swiping {
            PointerResponse::Consumed
        } else {
            PointerResponse::Ignored
        }
    }

    fn classify(settings: &SwipeSettings, session: &mut SwipeSession, dx: f32, dy: f32) {
        let slop = settings.touch_slop.value();
        if dx.abs() > slop || dy.abs() > slop {
            session.left_slop = true;
        }
        if session.swiping || session.aborted {
            return;
        }
        if dx.abs() > slop && dy.abs() < dx.abs() / 2.0 {
            session.swiping = true;
        } else if dy.abs() > slop && dy.abs() > dx.abs() * settings.vertical_abort_ratio {
            session.aborted = true;
        }
    }

    fn is_fling(&self, dx: f32, vx: f32, vy: f32) -> bool {
        let speed = vx.abs();
        dx != 0.0
            && speed >= self.settings.min_fling.value()
            && speed <= self.settings.max_fling.value()
            && vy.abs() < speed
            && vx.signum() == dx.signum()
    }

    fn drag_transform(&self, dx: f32) -> BodyTransform {
        let travelled = if self.width > 0.0 { dx.abs() / self.width } else { 0.0 };
        BodyTransform {
            translation_x: dx,
            alpha: (1.0 - self.settings.fade_factor * travelled).clamp(0.0, 1.0),
        }
    }

    fn snap_back(&mut self, at: Instant) {
        if self.transform == BodyTransform::default() {
            return;
        }
        self.start_settle(SettleKind::SnapBack, BodyTransform::default(), at);
    }

    fn fly_away(&mut self, direction: SwipeDirection, at: Instant) {
        let target = BodyTransform {
            translation_x: direction.sign() * self.width,
            alpha: 0.0,
        };
        self.start_settle(SettleKind::FlyAway, target, at);
    }

    fn start_settle(&mut self, kind: SettleKind, target: BodyTransform, at: Instant) {
        let duration = self.settings.settle_duration;
        let from = self.transform;
        self.settle = Some(Settle {
            kind,
            translation: Animation::new(
                from.translation_x,
                target.translation_x,
                at,
                duration,
                Easing::AccelerateDecelerate,
            ),
            alpha: Animation::new(from.alpha, target.alpha, at, duration, Easing::AccelerateDecelerate),
        });
    }
}
