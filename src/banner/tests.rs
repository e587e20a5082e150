// SPDX-License-Identifier: MPL-2.0
//! Lifecycle scenarios driven through mock host and surface ports.

use super::*;
use crate::application::port::{
    ButtonStyle, Decorations, HostError, HostHandle, OverlayHost, Slot, SlotContent, VisualSlots,
};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, UserAction, WarningType};
use crate::domain::banner::{BannerState, DisplayTime};
use crate::domain::gesture::PointerEvent;
use crate::error::Error;
use crate::test_utils::assert_abs_diff_eq;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 120.0;
const HANDLE: HostHandle = HostHandle::new(7);

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Debug)]
struct HostLog {
    available: bool,
    attached: bool,
    fail_removal: bool,
    inserts: usize,
    removals: usize,
    failed_removals: usize,
}

impl Default for HostLog {
    fn default() -> Self {
        Self {
            available: true,
            attached: false,
            fail_removal: false,
            inserts: 0,
            removals: 0,
            failed_removals: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct MockHost(Rc<RefCell<HostLog>>);

impl OverlayHost for MockHost {
    fn is_available(&self) -> bool {
        self.0.borrow().available
    }

    fn insert(&mut self) -> std::result::Result<HostHandle, HostError> {
        let mut log = self.0.borrow_mut();
        log.inserts += 1;
        log.attached = true;
        Ok(HANDLE)
    }

    fn is_attached(&self, handle: HostHandle) -> bool {
        self.0.borrow().attached && handle == HANDLE
    }

    fn remove_immediate(&mut self, handle: HostHandle) -> std::result::Result<(), HostError> {
        let mut log = self.0.borrow_mut();
        if !log.attached || handle != HANDLE {
            log.failed_removals += 1;
            return Err(HostError::NotAttached);
        }
        if log.fail_removal {
            log.failed_removals += 1;
            return Err(HostError::Rejected("window closing".into()));
        }
        log.attached = false;
        log.removals += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct RecordingSurface {
    visible: HashMap<Slot, bool>,
    content: HashMap<Slot, SlotContent>,
    buttons: Vec<(String, ButtonStyle)>,
    pulses: usize,
    haptics: usize,
}

impl RecordingSurface {
    fn is_visible(&self, slot: Slot) -> bool {
        self.visible.get(&slot).copied().unwrap_or(false)
    }
}

impl VisualSlots for RecordingSurface {
    fn set_visible(&mut self, slot: Slot, visible: bool) {
        self.visible.insert(slot, visible);
    }

    fn set_content(&mut self, slot: Slot, content: SlotContent) {
        self.content.insert(slot, content);
    }

    fn push_button(&mut self, label: &str, style: ButtonStyle) {
        self.buttons.push((label.to_string(), style));
    }
}

impl Decorations for RecordingSurface {
    fn pulse_icon(&mut self) {
        self.pulses += 1;
    }

    fn haptic_feedback(&mut self) {
        self.haptics += 1;
    }
}

struct Fixture {
    banner: BannerLifecycle<MockHost, RecordingSurface>,
    host: Rc<RefCell<HostLog>>,
    shows: Rc<Cell<usize>>,
    dismisses: Rc<Cell<usize>>,
    base: Instant,
}

impl Fixture {
    fn new(options: BannerOptions) -> Self {
        let host = MockHost::default();
        let log = Rc::clone(&host.0);
        let mut banner = BannerLifecycle::new(
            host,
            RecordingSurface::default(),
            BannerSettings::default(),
            options,
        );

        let shows = Rc::new(Cell::new(0));
        let dismisses = Rc::new(Cell::new(0));
        let counter = Rc::clone(&shows);
        banner.on_show(move || counter.set(counter.get() + 1));
        let counter = Rc::clone(&dismisses);
        banner.on_dismiss(move || counter.set(counter.get() + 1));

        Self {
            banner,
            host: log,
            shows,
            dismisses,
            base: Instant::now(),
        }
    }

    fn sticky() -> Self {
        Self::new(BannerOptions::default().infinite_duration())
    }

    fn at(&self, millis: u64) -> Instant {
        self.base + Duration::from_millis(millis)
    }

    /// Shows, measures and finishes the enter animation: idle at t = 500 ms.
    fn idle(mut self) -> Self {
        self.banner.show(self.at(0)).expect("show");
        self.banner.on_layout(WIDTH, HEIGHT, self.at(0));
        self.banner.tick(self.at(500));
        assert_eq!(self.banner.state(), BannerState::Idle);
        self
    }

    fn removals(&self) -> usize {
        self.host.borrow().removals
    }
}

// =============================================================================
// Attach and enter
// =============================================================================

#[test]
fn show_attaches_and_fires_on_show_once() {
    let mut f = Fixture::sticky();

    f.banner.show(f.at(0)).expect("show");
    assert_eq!(f.banner.state(), BannerState::Entering);
    assert_eq!(f.shows.get(), 1);

    f.banner.show(f.at(10)).expect("second show is a no-op");
    f.banner.on_attached(HANDLE, f.at(20));
    assert_eq!(f.host.borrow().inserts, 1);
    assert_eq!(f.shows.get(), 1);
}

#[test]
fn show_fails_when_host_unavailable() {
    let mut f = Fixture::sticky();
    f.host.borrow_mut().available = false;

    let result = f.banner.show(f.at(0));

    assert!(matches!(result, Err(Error::Host(HostError::Unavailable))));
    assert_eq!(f.banner.state(), BannerState::Unattached);
    assert_eq!(f.shows.get(), 0);
}

#[test]
fn host_notified_attach_starts_presentation() {
    let mut f = Fixture::sticky();
    f.host.borrow_mut().attached = true;

    f.banner.on_attached(HANDLE, f.at(0));
    f.banner.on_layout(WIDTH, HEIGHT, f.at(0));
    f.banner.tick(f.at(500));

    assert_eq!(f.banner.state(), BannerState::Idle);
    f.banner.hide_now(f.at(600));
    assert_eq!(f.removals(), 1);
}

#[test]
fn enter_animation_plays_once_across_layout_passes() {
    let mut f = Fixture::sticky();
    f.banner.show(f.at(0)).expect("show");
    f.banner.on_layout(WIDTH, HEIGHT, f.at(0));
    assert_abs_diff_eq!(f.banner.translation_y(f.at(0)).unwrap_or(f32::NAN), -HEIGHT);

    let first = Animation::new(
        -HEIGHT,
        -80.0,
        f.at(0),
        Duration::from_millis(500),
        Easing::OVERSHOOT,
    );

    // A second layout pass with another height must not restart the animation.
    f.banner.on_layout(WIDTH, 200.0, f.at(250));
    assert_abs_diff_eq!(
        f.banner.translation_y(f.at(250)).unwrap_or(f32::NAN),
        first.value_at(f.at(250))
    );

    f.banner.tick(f.at(500));
    assert_eq!(f.banner.state(), BannerState::Idle);
    f.banner.on_layout(WIDTH, 200.0, f.at(600));
    assert_eq!(f.banner.state(), BannerState::Idle);
    assert_abs_diff_eq!(f.banner.translation_y(f.at(600)).unwrap_or(f32::NAN), -80.0);
    assert_abs_diff_eq!(f.banner.measured_height().map_or(0.0, |h| h.value()), HEIGHT);
}

#[test]
fn enter_waits_for_first_measurement() {
    let mut f = Fixture::sticky();
    f.banner.show(f.at(0)).expect("show");

    f.banner.tick(f.at(1_000));
    assert_eq!(f.banner.state(), BannerState::Entering);
    assert!(f.banner.translation_y(f.at(1_000)).is_none());

    f.banner.on_layout(WIDTH, 0.0, f.at(1_100));
    assert!(f.banner.measured_height().is_none());

    f.banner.on_layout(WIDTH, HEIGHT, f.at(1_200));
    f.banner.tick(f.at(1_699));
    assert_eq!(f.banner.state(), BannerState::Entering);
    f.banner.tick(f.at(1_700));
    assert_eq!(f.banner.state(), BannerState::Idle);
}

#[test]
fn measurement_before_attach_starts_enter_at_attach() {
    let mut f = Fixture::sticky();
    f.banner.on_layout(WIDTH, HEIGHT, f.at(0));
    assert_abs_diff_eq!(f.banner.translation_y(f.at(0)).unwrap_or(f32::NAN), -HEIGHT);

    f.banner.show(f.at(100)).expect("show");
    f.banner.tick(f.at(599));
    assert_eq!(f.banner.state(), BannerState::Entering);
    f.banner.tick(f.at(600));
    assert_eq!(f.banner.state(), BannerState::Idle);
}

#[test]
fn repeated_layout_before_attach_keeps_first_height() {
    let mut f = Fixture::sticky();
    f.banner.on_layout(WIDTH, HEIGHT, f.at(0));
    f.banner.on_layout(WIDTH, 200.0, f.at(10));

    assert_abs_diff_eq!(f.banner.measured_height().map_or(0.0, |h| h.value()), HEIGHT);
    assert_abs_diff_eq!(f.banner.translation_y(f.at(10)).unwrap_or(f32::NAN), -HEIGHT);
}

#[test]
fn decorations_applied_at_attach() {
    let options = BannerOptions::default()
        .with_progress(true)
        .with_vibration(true)
        .add_button(ButtonSpec::new("Undo", ButtonStyle::Primary))
        .add_button(ButtonSpec::new("Close", ButtonStyle::Text));
    let mut f = Fixture::new(options);
    f.banner.show(f.at(0)).expect("show");

    let surface = f.banner.surface();
    assert!(!surface.is_visible(Slot::Icon));
    assert!(surface.is_visible(Slot::Progress));
    assert!(surface.is_visible(Slot::Buttons));
    assert_eq!(surface.pulses, 0);
    assert_eq!(surface.haptics, 1);
    assert_eq!(
        surface.buttons,
        [
            ("Undo".to_string(), ButtonStyle::Primary),
            ("Close".to_string(), ButtonStyle::Text)
        ]
    );
}

#[test]
fn default_decorations_pulse_icon_without_haptics() {
    let mut f = Fixture::sticky();
    f.banner.show(f.at(0)).expect("show");

    let surface = f.banner.surface();
    assert!(surface.is_visible(Slot::Icon));
    assert!(!surface.is_visible(Slot::Progress));
    assert!(!surface.is_visible(Slot::Buttons));
    assert_eq!(surface.pulses, 1);
    assert_eq!(surface.haptics, 0);
}

#[test]
fn options_are_frozen_after_attach() {
    let mut f = Fixture::sticky();
    assert!(f.banner.set_options(BannerOptions::default().infinite_duration()));
    f.banner.show(f.at(0)).expect("show");
    assert!(!f.banner.set_options(BannerOptions::default().with_progress(true)));
    assert!(!f.banner.options().progress);
}

// =============================================================================
// Dismissal
// =============================================================================

#[test]
fn immediate_dismiss_detaches_synchronously() {
    let mut f = Fixture::sticky().idle();

    f.banner.hide_now(f.at(1_000));

    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.removals(), 1);
    assert_eq!(f.dismisses.get(), 1);
}

#[test]
fn animated_dismiss_detaches_after_duration() {
    let mut f = Fixture::sticky().idle();

    f.banner.hide(f.at(1_000));
    assert_eq!(f.banner.state(), BannerState::Exiting);

    f.banner.tick(f.at(1_499));
    assert_eq!(f.removals(), 0);
    assert_eq!(f.dismisses.get(), 0);

    f.banner.tick(f.at(1_500));
    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.removals(), 1);
    assert_eq!(f.dismisses.get(), 1);
    assert_abs_diff_eq!(f.banner.translation_y(f.at(1_500)).unwrap_or(f32::NAN), -HEIGHT);
}

#[test]
fn exit_travels_from_resting_offset_to_hidden() {
    let mut f = Fixture::sticky().idle();
    f.banner.hide(f.at(1_000));

    assert_abs_diff_eq!(f.banner.translation_y(f.at(1_000)).unwrap_or(f32::NAN), -80.0);
    // Anticipation first pulls the banner down, past the resting offset.
    assert!(f.banner.translation_y(f.at(1_050)).unwrap_or(f32::NAN) > -80.0);
    assert_abs_diff_eq!(
        f.banner.translation_y(f.at(1_500)).unwrap_or(f32::NAN),
        -HEIGHT,
        epsilon = 1e-3
    );
}

#[test]
fn every_dismiss_sequence_fires_once_and_detaches_once() {
    let sequences: [&[bool]; 6] = [
        &[false],
        &[true],
        &[false, false],
        &[true, true],
        &[false, true],
        &[true, false, true, false],
    ];

    for sequence in sequences {
        let mut f = Fixture::sticky().idle();
        for (i, &immediate) in sequence.iter().enumerate() {
            f.banner.request_dismiss(immediate, f.at(1_000 + 100 * i as u64));
        }
        f.banner.tick(f.at(5_000));
        f.banner.tick(f.at(6_000));

        assert_eq!(f.banner.state(), BannerState::Removed, "{sequence:?}");
        assert_eq!(f.dismisses.get(), 1, "{sequence:?}");
        assert_eq!(f.removals(), 1, "{sequence:?}");
        assert_eq!(f.host.borrow().failed_removals, 0, "{sequence:?}");
    }
}

#[test]
fn immediate_dismiss_while_exiting_cancels_exit() {
    let mut f = Fixture::sticky().idle();

    f.banner.hide(f.at(1_000));
    f.banner.hide_now(f.at(1_100));
    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.removals(), 1);

    f.banner.tick(f.at(1_500));
    assert_eq!(f.removals(), 1);
    assert_eq!(f.dismisses.get(), 1);
}

#[test]
fn dismiss_during_enter_starts_from_current_position() {
    let mut f = Fixture::sticky();
    f.banner.show(f.at(0)).expect("show");
    f.banner.on_layout(WIDTH, HEIGHT, f.at(0));
    let before = f.banner.translation_y(f.at(200)).unwrap_or(f32::NAN);

    f.banner.hide(f.at(200));

    assert_eq!(f.banner.state(), BannerState::Exiting);
    assert_abs_diff_eq!(f.banner.translation_y(f.at(200)).unwrap_or(f32::NAN), before);
    f.banner.tick(f.at(700));
    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.dismisses.get(), 1);
}

#[test]
fn dismiss_before_measurement_defers_exit_animation() {
    let mut f = Fixture::sticky();
    f.banner.show(f.at(0)).expect("show");

    f.banner.hide(f.at(100));
    assert_eq!(f.banner.state(), BannerState::Exiting);
    assert!(f.banner.translation_y(f.at(100)).is_none());

    f.banner.on_layout(WIDTH, HEIGHT, f.at(300));
    assert_abs_diff_eq!(f.banner.translation_y(f.at(300)).unwrap_or(f32::NAN), -80.0);

    // The detach is pushed back so the exit animation can complete.
    f.banner.tick(f.at(700));
    assert_eq!(f.banner.state(), BannerState::Exiting);
    f.banner.tick(f.at(800));
    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.dismisses.get(), 1);
}

#[test]
fn unmeasured_banner_still_detaches_on_schedule() {
    let mut f = Fixture::sticky();
    f.banner.show(f.at(0)).expect("show");

    f.banner.hide(f.at(100));
    f.banner.tick(f.at(600));

    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.removals(), 1);
}

#[test]
fn out_of_band_detach_during_exit_skips_removal() {
    let mut f = Fixture::sticky().idle();
    f.banner.hide(f.at(1_000));

    f.host.borrow_mut().attached = false;
    f.banner.tick(f.at(1_500));

    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.removals(), 0);
    assert_eq!(f.host.borrow().failed_removals, 0);
    assert_eq!(f.dismisses.get(), 0);
}

#[test]
fn detach_notification_moves_to_removed_silently() {
    let mut f = Fixture::sticky().idle();
    f.host.borrow_mut().attached = false;

    f.banner.on_detached();
    f.banner.hide_now(f.at(1_000));

    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.removals(), 0);
    assert_eq!(f.dismisses.get(), 0);
}

#[test]
fn dismiss_is_inert_while_host_unavailable() {
    let mut f = Fixture::sticky().idle();
    f.host.borrow_mut().available = false;

    f.banner.hide_now(f.at(1_000));
    assert_eq!(f.banner.state(), BannerState::Idle);
    assert!(f.banner.is_interactive());

    f.host.borrow_mut().available = true;
    f.banner.hide_now(f.at(1_100));
    assert_eq!(f.banner.state(), BannerState::Removed);
}

#[test]
fn dismiss_before_attach_is_ignored() {
    let mut f = Fixture::sticky();
    f.banner.hide_now(f.at(0));
    f.banner.hide(f.at(0));

    assert_eq!(f.banner.state(), BannerState::Unattached);
    assert_eq!(f.dismisses.get(), 0);
}

#[test]
fn removal_failure_is_absorbed() {
    let mut f = Fixture::sticky().idle();
    f.host.borrow_mut().fail_removal = true;

    f.banner.hide_now(f.at(1_000));

    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.dismisses.get(), 1);
    assert_eq!(f.host.borrow().failed_removals, 1);
}

#[test]
fn calls_after_removal_are_noops() {
    let mut f = Fixture::sticky().idle();
    f.banner.hide_now(f.at(1_000));

    f.banner.show(f.at(1_100)).expect("no-op show");
    f.banner.hide(f.at(1_200));
    f.banner.hide_now(f.at(1_300));
    f.banner.on_layout(WIDTH, HEIGHT, f.at(1_400));
    f.banner.on_detached();
    f.banner.tick(f.at(9_000));

    assert_eq!(f.banner.state(), BannerState::Removed);
    assert!(!f.banner.click_button(0));
    assert_eq!(f.host.borrow().inserts, 1);
    assert_eq!(f.removals(), 1);
    assert_eq!(f.dismisses.get(), 1);
    assert_eq!(f.shows.get(), 1);
}

#[test]
fn last_registered_dismiss_callback_wins() {
    let mut f = Fixture::sticky().idle();
    let replaced = Rc::new(Cell::new(0));
    let counter = Rc::clone(&replaced);
    f.banner.on_dismiss(move || counter.set(counter.get() + 1));

    f.banner.hide_now(f.at(1_000));

    assert_eq!(replaced.get(), 1);
    assert_eq!(f.dismisses.get(), 0);
}

// =============================================================================
// Auto dismiss
// =============================================================================

#[test]
fn auto_dismiss_fires_once_after_display_time() {
    let mut f = Fixture::new(BannerOptions::default()).idle();

    f.banner.tick(f.at(2_999));
    assert_eq!(f.banner.state(), BannerState::Idle);

    f.banner.tick(f.at(3_000));
    assert_eq!(f.banner.state(), BannerState::Exiting);

    f.banner.tick(f.at(3_500));
    f.banner.tick(f.at(10_000));
    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.dismisses.get(), 1);
    assert_eq!(f.removals(), 1);
}

#[test]
fn infinite_duration_never_auto_dismisses() {
    let mut f = Fixture::sticky().idle();
    f.banner.tick(f.at(120_000));
    assert_eq!(f.banner.state(), BannerState::Idle);
}

#[test]
fn auto_dismiss_waits_for_release() {
    let options = BannerOptions::default()
        .with_display_time(DisplayTime::from_millis(1_000))
        .with_swipe_to_dismiss(true);
    let mut f = Fixture::new(options).idle();

    f.banner.handle_pointer(PointerEvent::down(100.0, 20.0, f.at(900)));
    f.banner.tick(f.at(1_100));
    assert_eq!(f.banner.state(), BannerState::Idle);

    f.banner.handle_pointer(PointerEvent::up(100.0, 20.0, f.at(1_200)));
    f.banner.tick(f.at(1_250));
    assert_eq!(f.banner.state(), BannerState::Exiting);
}

// =============================================================================
// Interaction
// =============================================================================

#[test]
fn interaction_is_disabled_once_exit_begins() {
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let options = BannerOptions::default()
        .infinite_duration()
        .add_button(ButtonSpec::new("Undo", ButtonStyle::Primary).on_click(move || counter.set(counter.get() + 1)));
    let mut f = Fixture::new(options).idle();

    assert!(f.banner.is_interactive());
    assert!(f.banner.click_button(0));
    assert!(!f.banner.click_button(3));

    f.banner.hide(f.at(1_000));
    assert!(!f.banner.is_interactive());
    assert!(!f.banner.click_button(0));
    assert_eq!(
        f.banner.handle_pointer(PointerEvent::down(10.0, 10.0, f.at(1_100))),
        PointerResponse::Ignored
    );

    f.banner.tick(f.at(1_500));
    assert!(!f.banner.is_interactive());
    assert_eq!(clicks.get(), 1);
}

#[test]
fn body_click_delivered_without_swipe() {
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let mut f = Fixture::sticky().idle();
    f.banner.on_body_click(move || counter.set(counter.get() + 1));

    f.banner.handle_pointer(PointerEvent::down(50.0, 10.0, f.at(600)));
    let response = f.banner.handle_pointer(PointerEvent::up(50.0, 10.0, f.at(650)));

    assert_eq!(response, PointerResponse::Click);
    assert_eq!(clicks.get(), 1);

    // A release without a press is not a click.
    f.banner.handle_pointer(PointerEvent::up(50.0, 10.0, f.at(700)));
    assert_eq!(clicks.get(), 1);
}

#[test]
fn press_interrupted_by_exit_is_not_a_click() {
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let mut f = Fixture::sticky().idle();
    f.banner.on_body_click(move || counter.set(counter.get() + 1));

    f.banner.handle_pointer(PointerEvent::down(50.0, 10.0, f.at(600)));
    f.banner.hide(f.at(620));
    let response = f.banner.handle_pointer(PointerEvent::up(50.0, 10.0, f.at(650)));

    assert_eq!(response, PointerResponse::Ignored);
    assert_eq!(clicks.get(), 0);
}

#[test]
fn press_dragged_beyond_slop_is_not_a_click() {
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let mut f = Fixture::sticky().idle();
    f.banner.on_body_click(move || counter.set(counter.get() + 1));

    f.banner.handle_pointer(PointerEvent::down(10.0, 20.0, f.at(600)));
    f.banner.handle_pointer(PointerEvent::moved(380.0, 20.0, f.at(650)));
    let response = f.banner.handle_pointer(PointerEvent::up(380.0, 20.0, f.at(700)));
    assert_eq!(response, PointerResponse::Ignored);
    assert_eq!(clicks.get(), 0);

    // Jitter inside the slop still counts.
    f.banner.handle_pointer(PointerEvent::down(10.0, 20.0, f.at(800)));
    f.banner.handle_pointer(PointerEvent::moved(14.0, 23.0, f.at(820)));
    let response = f.banner.handle_pointer(PointerEvent::up(14.0, 23.0, f.at(850)));
    assert_eq!(response, PointerResponse::Click);
    assert_eq!(clicks.get(), 1);
}

#[test]
fn diagonal_drag_past_half_width_dismisses_banner() {
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let options = BannerOptions::default()
        .infinite_duration()
        .with_swipe_to_dismiss(true);
    let mut f = Fixture::new(options).idle();
    f.banner.on_body_click(move || counter.set(counter.get() + 1));

    f.banner.handle_pointer(PointerEvent::down(50.0, 20.0, f.at(1_000)));
    f.banner.handle_pointer(PointerEvent::moved(300.0, 170.0, f.at(1_050)));
    let response = f.banner.handle_pointer(PointerEvent::up(300.0, 170.0, f.at(1_100)));

    assert_eq!(response, PointerResponse::Consumed);
    assert_eq!(clicks.get(), 0);

    f.banner.tick(f.at(1_350));
    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.dismisses.get(), 1);
}

#[test]
fn exit_cancels_swipe_in_progress() {
    let options = BannerOptions::default()
        .infinite_duration()
        .with_swipe_to_dismiss(true);
    let mut f = Fixture::new(options).idle();

    f.banner.handle_pointer(PointerEvent::down(100.0, 20.0, f.at(1_000)));
    f.banner.handle_pointer(PointerEvent::moved(130.0, 20.0, f.at(1_050)));
    f.banner.hide(f.at(1_060));

    let response = f.banner.handle_pointer(PointerEvent::moved(330.0, 20.0, f.at(1_100)));
    assert_eq!(response, PointerResponse::Ignored);
    assert!(f.banner.body_transform(f.at(1_100)).translation_x <= 30.0);
    let response = f.banner.handle_pointer(PointerEvent::up(330.0, 20.0, f.at(1_150)));
    assert_eq!(response, PointerResponse::Ignored);

    f.banner.tick(f.at(1_360));
    assert_eq!(f.banner.state(), BannerState::Exiting);
    assert_eq!(f.removals(), 0);

    f.banner.tick(f.at(1_560));
    assert_eq!(f.banner.state(), BannerState::Removed);
    assert_eq!(f.removals(), 1);
    assert_eq!(f.dismisses.get(), 1);
}

#[test]
fn swipe_past_half_width_dismisses_once() {
    let options = BannerOptions::default()
        .infinite_duration()
        .with_swipe_to_dismiss(true);
    let mut f = Fixture::new(options).idle();

    f.banner.handle_pointer(PointerEvent::down(100.0, 20.0, f.at(1_000)));
    f.banner.handle_pointer(PointerEvent::moved(200.0, 20.0, f.at(1_400)));
    f.banner.handle_pointer(PointerEvent::moved(330.0, 20.0, f.at(1_800)));
    f.banner.handle_pointer(PointerEvent::up(330.0, 20.0, f.at(2_000)));
    assert_eq!(f.banner.state(), BannerState::Idle);

    f.banner.tick(f.at(2_200));
    assert_eq!(f.banner.state(), BannerState::Removed);
    f.banner.tick(f.at(3_000));
    assert_eq!(f.dismisses.get(), 1);
    assert_eq!(f.removals(), 1);
}

#[test]
fn short_swipe_snaps_back_and_stays() {
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let options = BannerOptions::default()
        .infinite_duration()
        .with_swipe_to_dismiss(true);
    let mut f = Fixture::new(options).idle();
    f.banner.on_body_click(move || counter.set(counter.get() + 1));

    f.banner.handle_pointer(PointerEvent::down(100.0, 20.0, f.at(1_000)));
    f.banner.handle_pointer(PointerEvent::moved(160.0, 20.0, f.at(1_400)));
    assert_abs_diff_eq!(f.banner.body_transform(f.at(1_400)).translation_x, 60.0);
    let response = f.banner.handle_pointer(PointerEvent::up(160.0, 20.0, f.at(1_800)));

    assert_eq!(response, PointerResponse::Consumed);
    assert_eq!(clicks.get(), 0);

    f.banner.tick(f.at(2_100));
    assert_eq!(f.banner.state(), BannerState::Idle);
    assert_eq!(f.banner.body_transform(f.at(2_100)), BodyTransform::default());
}

#[test]
fn vertical_drag_never_dismisses_banner() {
    let options = BannerOptions::default()
        .infinite_duration()
        .with_swipe_to_dismiss(true);
    let mut f = Fixture::new(options).idle();

    f.banner.handle_pointer(PointerEvent::down(100.0, 20.0, f.at(1_000)));
    f.banner.handle_pointer(PointerEvent::moved(110.0, 120.0, f.at(1_050)));
    f.banner.handle_pointer(PointerEvent::moved(380.0, 140.0, f.at(1_080)));
    f.banner.handle_pointer(PointerEvent::up(380.0, 140.0, f.at(1_100)));
    f.banner.tick(f.at(2_000));

    assert_eq!(f.banner.state(), BannerState::Idle);
    assert_eq!(f.dismisses.get(), 0);
}

// =============================================================================
// Content
// =============================================================================

#[test]
fn text_setters_show_only_non_empty_text() {
    let mut f = Fixture::sticky();

    f.banner.set_title("Saved");
    f.banner.set_subtitle("");
    f.banner.set_icon("check");
    f.banner.show_icon(false);

    let surface = f.banner.surface();
    assert!(surface.is_visible(Slot::Title));
    assert_eq!(
        surface.content.get(&Slot::Title),
        Some(&SlotContent::Text("Saved".into()))
    );
    assert!(!surface.is_visible(Slot::Subtitle));
    assert!(!surface.content.contains_key(&Slot::Subtitle));
    assert_eq!(
        surface.content.get(&Slot::Icon),
        Some(&SlotContent::Icon("check".into()))
    );
    assert!(!surface.is_visible(Slot::Icon));
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn lifecycle_activity_is_logged() {
    let mut collector = DiagnosticsCollector::new(64);
    let mut f = Fixture::sticky();
    f.banner.set_diagnostics(collector.handle());

    f.banner.show(f.at(0)).expect("show");
    f.banner.on_layout(WIDTH, HEIGHT, f.at(0));
    f.banner.tick(f.at(500));
    f.banner.hide(f.at(600));
    f.banner.hide(f.at(700));
    f.banner.tick(f.at(1_100));
    collector.process_pending();

    let transitions: Vec<(String, String)> = collector
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::StateTransition { from, to } => Some((from.clone(), to.clone())),
            _ => None,
        })
        .collect();
    let expected = [
        ("unattached", "entering"),
        ("entering", "idle"),
        ("idle", "exiting"),
        ("exiting", "removed"),
    ]
    .map(|(from, to)| (from.to_string(), to.to_string()));
    assert_eq!(transitions, expected);

    let actions: Vec<UserAction> = collector
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action } => Some(*action),
            _ => None,
        })
        .collect();
    assert_eq!(
        actions,
        [
            UserAction::Show,
            UserAction::Hide { immediate: false },
            UserAction::Hide { immediate: false }
        ]
    );

    let illegal = collector.iter().any(|event| {
        matches!(
            &event.kind,
            DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::IllegalTransition
        )
    });
    assert!(illegal, "second hide should be recorded as ignored");
}
