// SPDX-License-Identifier: MPL-2.0
//! Time-based property animations.
//!
//! Animations are pure values: they know where they started, where they go
//! and when, and are sampled with an explicit `now`. Nothing is scheduled;
//! the owner decides when to sample and when to consider them finished.

use std::time::{Duration, Instant};

/// Default tension of the overshoot curve.
pub const OVERSHOOT_TENSION: f32 = 2.0;

/// Default tension of the anticipate-overshoot curve (overshoot tension × 1.5).
pub const ANTICIPATE_OVERSHOOT_TENSION: f32 = OVERSHOOT_TENSION * 1.5;

/// Easing curve mapping linear progress `t ∈ [0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end, fast middle.
    AccelerateDecelerate,
    /// Flings past the target, then settles back.
    Overshoot {
        /// Amount of overshoot; 0 behaves like a plain deceleration.
        tension: f32,
    },
    /// Pulls back first, flings past the target, then settles back.
    AnticipateOvershoot {
        /// Amount of anticipation and overshoot.
        tension: f32,
    },
}

impl Easing {
    /// Overshoot with the default tension.
    pub const OVERSHOOT: Self = Self::Overshoot {
        tension: OVERSHOOT_TENSION,
    };

    /// Anticipate-overshoot with the default tension.
    pub const ANTICIPATE_OVERSHOOT: Self = Self::AnticipateOvershoot {
        tension: ANTICIPATE_OVERSHOOT_TENSION,
    };

    /// Applies the curve. Input is clamped to `[0, 1]`; output is exactly 0
    /// at `t = 0` and exactly 1 at `t = 1`, but may leave that range between.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => {
                ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
            Easing::Overshoot { tension } => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
            Easing::AnticipateOvershoot { tension } => {
                if t < 0.5 {
                    0.5 * anticipate(t * 2.0, tension)
                } else {
                    0.5 * (overshoot(t * 2.0 - 2.0, tension) + 2.0)
                }
            }
        }
    }
}

fn anticipate(t: f32, s: f32) -> f32 {
    t * t * ((s + 1.0) * t - s)
}

fn overshoot(t: f32, s: f32) -> f32 {
    t * t * ((s + 1.0) * t + s)
}

/// A single scalar property animating from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Animation {
    /// Creates an animation starting at `started_at`.
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Value of the property at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    /// Returns true once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }

    /// Instant at which the animation reaches its target.
    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Start value.
    #[must_use]
    pub fn from(&self) -> f32 {
        self.from
    }

    /// Target value.
    #[must_use]
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Curve used by this animation.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::AccelerateDecelerate,
        Easing::OVERSHOOT,
        Easing::ANTICIPATE_OVERSHOOT,
    ];

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for curve in CURVES {
            assert_abs_diff_eq!(curve.apply(0.0), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(curve.apply(1.0), 1.0, epsilon = F32_EPSILON);
        }
    }

    #[test]
    fn overshoot_exceeds_target_before_settling() {
        let peak = (1..100)
            .map(|i| Easing::OVERSHOOT.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "overshoot peak was {peak}");
    }

    #[test]
    fn anticipate_overshoot_pulls_back_first() {
        assert!(Easing::ANTICIPATE_OVERSHOOT.apply(0.1) < 0.0);
        assert!(Easing::ANTICIPATE_OVERSHOOT.apply(0.9) > 1.0);
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        assert_abs_diff_eq!(Easing::Linear.apply(-3.0), 0.0);
        assert_abs_diff_eq!(Easing::OVERSHOOT.apply(7.0), 1.0);
    }

    #[test]
    fn animation_interpolates_between_endpoints() {
        let start = Instant::now();
        let anim = Animation::new(
            -100.0,
            -80.0,
            start,
            Duration::from_millis(500),
            Easing::Linear,
        );

        assert_abs_diff_eq!(anim.value_at(start), -100.0);
        assert_abs_diff_eq!(
            anim.value_at(start + Duration::from_millis(250)),
            -90.0,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(anim.value_at(start + Duration::from_secs(2)), -80.0);
    }

    #[test]
    fn animation_finishes_exactly_at_duration() {
        let start = Instant::now();
        let anim = Animation::new(0.0, 1.0, start, Duration::from_millis(500), Easing::OVERSHOOT);

        assert!(!anim.is_finished(start + Duration::from_millis(499)));
        assert!(anim.is_finished(start + Duration::from_millis(500)));
        assert_eq!(anim.ends_at(), start + Duration::from_millis(500));
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let start = Instant::now();
        let anim = Animation::new(3.0, 9.0, start, Duration::ZERO, Easing::Linear);
        assert!(anim.is_finished(start));
        assert_abs_diff_eq!(anim.value_at(start), 9.0);
    }

    #[test]
    fn sampling_before_start_returns_start_value() {
        let start = Instant::now() + Duration::from_secs(1);
        let anim = Animation::new(5.0, 10.0, start, Duration::from_millis(100), Easing::Linear);
        assert_abs_diff_eq!(anim.value_at(Instant::now()), 5.0);
    }
}
