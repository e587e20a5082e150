// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle of a single banner.
//!
//! [`BannerLifecycle`] owns the banner state machine. Every external trigger
//! (host notifications, layout passes, dismiss requests, timer ticks) is
//! turned into an [`Event`] and fed through one transition function, so the
//! guards against duplicate triggers live in exactly one place.
//!
//! ```text
//! Unattached ──attach──▶ Entering ──enter done──▶ Idle
//!                            │                     │
//!                            └──────dismiss────────┤
//!                                                  ▼
//!                  Removed ◀──detach due / immediate── Exiting
//! ```

use super::animation::{Animation, Easing};
use super::options::{BannerOptions, BannerSettings};
use super::swipe::{BodyTransform, PointerResponse, SwipeCallbacks, SwipeDismissRecognizer, SwipeSettings};
use crate::application::port::{BannerSurface, HostError, HostHandle, OverlayHost, Slot, SlotContent};
use crate::diagnostics::{DiagnosticsHandle, UserAction, WarningEvent, WarningType};
use crate::domain::banner::{BannerState, MeasuredHeight};
use crate::domain::error::{LifecycleAction, LifecycleError};
use crate::domain::gesture::{PointerEvent, PointerPhase, Position};
use crate::error::Result;
use std::time::Instant;

type Callback = Box<dyn FnOnce()>;
type ClickHandler = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Unattached,
    /// `enter` is `None` until the first measurement arrives.
    Entering { enter: Option<Animation> },
    Idle,
    /// `exit` is `None` when the dismissal happened before any measurement.
    Exiting {
        exit: Option<Animation>,
        detach_at: Instant,
    },
    Removed,
}

impl Phase {
    fn state(&self) -> BannerState {
        match self {
            Phase::Unattached => BannerState::Unattached,
            Phase::Entering { .. } => BannerState::Entering,
            Phase::Idle => BannerState::Idle,
            Phase::Exiting { .. } => BannerState::Exiting,
            Phase::Removed => BannerState::Removed,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Event {
    Attached { handle: HostHandle, at: Instant },
    Measured { height: MeasuredHeight, at: Instant },
    EnterFinished,
    Dismiss { immediate: bool, at: Instant },
    DetachDue,
    DetachedOutOfBand,
}

/// Adapts lifecycle state to the recognizer callbacks without re-entering
/// the lifecycle while the recognizer is borrowed.
struct SwipeGate {
    interactive: bool,
    dismissed: bool,
    touch: Option<bool>,
}

impl SwipeGate {
    fn new(interactive: bool) -> Self {
        Self {
            interactive,
            dismissed: false,
            touch: None,
        }
    }
}

impl SwipeCallbacks for SwipeGate {
    fn can_dismiss(&self) -> bool {
        self.interactive
    }

    fn on_dismiss(&mut self) {
        self.dismissed = true;
    }

    fn on_touch(&mut self, is_down: bool) {
        self.touch = Some(is_down);
    }
}

/// Drives one banner from insertion to removal.
///
/// The lifecycle is single-threaded and never blocks: animations are sampled
/// with the `now` passed to each call, and [`tick`](Self::tick) performs
/// whatever became due since the previous call. Callbacks run synchronously
/// and must not call back into the lifecycle.
pub struct BannerLifecycle<H: OverlayHost, S: BannerSurface> {
    host: H,
    surface: S,
    settings: BannerSettings,
    options: BannerOptions,
    swipe_settings: SwipeSettings,
    phase: Phase,
    handle: Option<HostHandle>,
    height: Option<MeasuredHeight>,
    width: f32,
    /// Start of the auto-dismiss countdown; taken when it fires.
    attached_at: Option<Instant>,
    swipe: Option<SwipeDismissRecognizer>,
    touching: bool,
    /// Where a click candidate went down; cleared once it leaves the slop.
    press_origin: Option<Position>,
    on_show: Option<Callback>,
    on_dismiss: Option<Callback>,
    on_body_click: Option<ClickHandler>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<H: OverlayHost, S: BannerSurface> BannerLifecycle<H, S> {
    /// Creates an unattached banner.
    pub fn new(host: H, surface: S, settings: BannerSettings, options: BannerOptions) -> Self {
        Self {
            host,
            surface,
            settings,
            options,
            swipe_settings: SwipeSettings::default(),
            phase: Phase::Unattached,
            handle: None,
            height: None,
            width: 0.0,
            attached_at: None,
            swipe: None,
            touching: false,
            press_origin: None,
            on_show: None,
            on_dismiss: None,
            on_body_click: None,
            diagnostics: None,
        }
    }

    /// Replaces the presentation options. Only possible before attach;
    /// returns whether the options were applied.
    pub fn set_options(&mut self, options: BannerOptions) -> bool {
        if !matches!(self.phase, Phase::Unattached) {
            return false;
        }
        self.options = options;
        true
    }

    /// Replaces the swipe tuning.
    pub fn set_swipe_settings(&mut self, settings: SwipeSettings) {
        self.swipe_settings = settings;
        if let Some(recognizer) = self.swipe.as_mut() {
            recognizer.set_settings(settings);
        }
    }

    /// Sets the diagnostics handle for logging lifecycle activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Registers the show callback, replacing any previous one.
    pub fn on_show(&mut self, callback: impl FnOnce() + 'static) {
        self.on_show = Some(Box::new(callback));
    }

    /// Registers the dismiss callback, replacing any previous one.
    pub fn on_dismiss(&mut self, callback: impl FnOnce() + 'static) {
        self.on_dismiss = Some(Box::new(callback));
    }

    /// Registers the body click handler, replacing any previous one.
    pub fn on_body_click(&mut self, handler: impl FnMut() + 'static) {
        self.on_body_click = Some(Box::new(handler));
    }

    // =========================================================================
    // Host notifications
    // =========================================================================

    /// Inserts the banner into the host and starts presenting it.
    ///
    /// Calling this on a banner that was already shown is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Unavailable`] (wrapped in [`crate::error::Error`])
    /// when the host cannot take an overlay, or the host's own insertion
    /// error. The banner stays unattached in both cases.
    pub fn show(&mut self, now: Instant) -> Result<()> {
        if !matches!(self.phase, Phase::Unattached) {
            return Ok(());
        }
        if !self.host.is_available() {
            self.warn(WarningType::HostUnavailable, HostError::Unavailable.to_string());
            return Err(HostError::Unavailable.into());
        }
        let handle = self.host.insert()?;
        self.log_action(UserAction::Show);
        self.apply(Event::Attached { handle, at: now });
        Ok(())
    }

    /// The host inserted the surface on its own.
    pub fn on_attached(&mut self, handle: HostHandle, now: Instant) {
        if !matches!(self.phase, Phase::Unattached) {
            self.warn_illegal(LifecycleAction::Attach);
            return;
        }
        self.apply(Event::Attached { handle, at: now });
    }

    /// A layout pass measured the banner.
    pub fn on_layout(&mut self, width: f32, height: f32, now: Instant) {
        self.width = width;
        if let Some(recognizer) = self.swipe.as_mut() {
            recognizer.set_width(width);
        }
        match MeasuredHeight::new(height) {
            Some(height) => self.apply(Event::Measured { height, at: now }),
            None => self.warn(
                WarningType::MissingMeasurement,
                format!("{} (reported {height})", LifecycleError::MissingMeasurement),
            ),
        }
    }

    /// The host removed the surface without being asked to.
    pub fn on_detached(&mut self) {
        self.apply(Event::DetachedOutOfBand);
    }

    // =========================================================================
    // Dismissal
    // =========================================================================

    /// Requests the banner to go away.
    ///
    /// Safe from any state and any trigger: requests that do not apply are
    /// ignored, and host failures are absorbed.
    pub fn request_dismiss(&mut self, immediate: bool, now: Instant) {
        if self.phase.state().is_attached() {
            self.log_action(UserAction::Hide { immediate });
        }
        self.dismiss(immediate, now);
    }

    /// Hides the banner with the exit animation.
    pub fn hide(&mut self, now: Instant) {
        self.request_dismiss(false, now);
    }

    /// Removes the banner immediately.
    pub fn hide_now(&mut self, now: Instant) {
        self.request_dismiss(true, now);
    }

    /// Performs everything that became due by `now`.
    pub fn tick(&mut self, now: Instant) {
        self.tick_swipe(now);

        let due = match self.phase {
            Phase::Entering { enter: Some(enter) } if enter.is_finished(now) => Some(Event::EnterFinished),
            Phase::Exiting { detach_at, .. } if now >= detach_at => Some(Event::DetachDue),
            _ => None,
        };
        if let Some(event) = due {
            self.apply(event);
        }

        self.tick_auto_dismiss(now);
    }

    fn dismiss(&mut self, immediate: bool, now: Instant) {
        if !self.phase.state().is_attached() {
            self.warn_illegal(LifecycleAction::Dismiss);
            return;
        }
        if !self.host.is_available() {
            self.warn(WarningType::HostUnavailable, "Dismiss ignored: host unavailable");
            return;
        }
        if let Some(handle) = self.handle {
            if !self.host.is_attached(handle) {
                self.apply(Event::DetachedOutOfBand);
                return;
            }
        }
        self.apply(Event::Dismiss { immediate, at: now });
    }

    fn tick_swipe(&mut self, now: Instant) {
        let interactive = self.is_interactive();
        let Some(recognizer) = self.swipe.as_mut() else {
            return;
        };
        let mut gate = SwipeGate::new(interactive);
        recognizer.tick(now, &mut gate);
        // A fly-away that lands after the exit began leaves the exit in charge.
        if gate.dismissed && interactive {
            self.log_action(UserAction::SwipeDismiss);
            self.dismiss(true, now);
        }
    }

    fn tick_auto_dismiss(&mut self, now: Instant) {
        let (Some(display), Some(attached_at)) = (self.options.auto_dismiss, self.attached_at) else {
            return;
        };
        if self.touching || now < attached_at + display.as_duration() {
            return;
        }
        self.attached_at = None;
        if matches!(self.phase, Phase::Entering { .. } | Phase::Idle) {
            self.dismiss(false, now);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Routes a pointer event on the banner body.
    ///
    /// With swipe-to-dismiss enabled the recognizer sees the stream first;
    /// otherwise a press followed by a release is a click. Clicks are only
    /// reported while the banner is interactive.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerResponse {
        let interactive = self.is_interactive();
        let response = match self.swipe.as_mut() {
            Some(recognizer) => {
                let mut gate = SwipeGate::new(interactive);
                let response = recognizer.handle(event, &mut gate);
                if let Some(touching) = gate.touch {
                    self.touching = touching;
                }
                response
            }
            None => self.track_press(event, interactive),
        };

        if response != PointerResponse::Click {
            return response;
        }
        if !self.is_interactive() {
            return PointerResponse::Ignored;
        }
        self.log_action(UserAction::BodyClick);
        if let Some(handler) = self.on_body_click.as_mut() {
            handler();
        }
        PointerResponse::Click
    }

    fn track_press(&mut self, event: PointerEvent, interactive: bool) -> PointerResponse {
        match event.phase {
            PointerPhase::Down => {
                self.press_origin = interactive.then_some(event.position);
                if interactive {
                    PointerResponse::Consumed
                } else {
                    PointerResponse::Ignored
                }
            }
            PointerPhase::Move => {
                let slop = self.swipe_settings.touch_slop.value();
                let left_slop = self.press_origin.is_some_and(|origin| {
                    (event.position.x - origin.x).abs() > slop || (event.position.y - origin.y).abs() > slop
                });
                if left_slop {
                    self.press_origin = None;
                }
                PointerResponse::Ignored
            }
            PointerPhase::Up if self.press_origin.take().is_some() => PointerResponse::Click,
            PointerPhase::Cancel => {
                self.press_origin = None;
                PointerResponse::Ignored
            }
            PointerPhase::Up => PointerResponse::Ignored,
        }
    }

    /// Clicks the action button at `index`. Returns whether a handler ran.
    pub fn click_button(&mut self, index: usize) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let Some(button) = self.options.buttons.get_mut(index) else {
            return false;
        };
        let clicked = button.click();
        self.log_action(UserAction::ButtonClick { index });
        clicked
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Sets the title. An empty title hides the slot.
    pub fn set_title(&mut self, title: &str) {
        self.set_text(Slot::Title, title);
    }

    /// Sets the subtitle. An empty subtitle hides the slot.
    pub fn set_subtitle(&mut self, subtitle: &str) {
        self.set_text(Slot::Subtitle, subtitle);
    }

    /// Sets the icon by name.
    pub fn set_icon(&mut self, name: &str) {
        self.surface
            .set_content(Slot::Icon, SlotContent::Icon(name.to_string()));
    }

    /// Shows or hides the icon slot.
    pub fn show_icon(&mut self, visible: bool) {
        self.surface.set_visible(Slot::Icon, visible);
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        if text.is_empty() {
            self.surface.set_visible(slot, false);
            return;
        }
        self.surface
            .set_content(slot, SlotContent::Text(text.to_string()));
        self.surface.set_visible(slot, true);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> BannerState {
        self.phase.state()
    }

    /// Whether the body accepts clicks and gestures.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, Phase::Entering { .. } | Phase::Idle)
    }

    /// Measured banner height, once known.
    #[must_use]
    pub fn measured_height(&self) -> Option<MeasuredHeight> {
        self.height
    }

    /// Vertical translation of the banner at `now`, or `None` while the
    /// position cannot be known (no measurement yet).
    #[must_use]
    pub fn translation_y(&self, now: Instant) -> Option<f32> {
        match self.phase {
            Phase::Entering { enter: Some(anim) }
            | Phase::Exiting {
                exit: Some(anim), ..
            } => Some(anim.value_at(now)),
            Phase::Idle => Some(self.settings.resting_offset.value()),
            Phase::Unattached | Phase::Removed => self.height.map(MeasuredHeight::hidden_offset),
            Phase::Entering { enter: None } | Phase::Exiting { exit: None, .. } => None,
        }
    }

    /// Horizontal swipe transform of the body at `now`.
    #[must_use]
    pub fn body_transform(&self, now: Instant) -> BodyTransform {
        self.swipe
            .as_ref()
            .map(|recognizer| recognizer.transform(now))
            .unwrap_or_default()
    }

    /// Timing and geometry in use.
    #[must_use]
    pub fn settings(&self) -> BannerSettings {
        self.settings
    }

    /// Presentation options in use.
    #[must_use]
    pub fn options(&self) -> &BannerOptions {
        &self.options
    }

    /// The overlay host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The overlay host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The visual surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn apply(&mut self, event: Event) {
        let from = self.phase.state();
        match (self.phase, event) {
            (Phase::Unattached, Event::Attached { handle, at }) => {
                self.handle = Some(handle);
                self.attached_at = Some(at);
                if self.options.swipe_to_dismiss {
                    self.swipe = Some(SwipeDismissRecognizer::attach(self.width, self.swipe_settings));
                }
                self.phase = Phase::Entering {
                    enter: self.height.map(|height| self.enter_animation(height, at)),
                };
                self.log_transition(from);
                self.decorate();
                if let Some(callback) = self.on_show.take() {
                    callback();
                }
                return;
            }
            (Phase::Unattached, Event::Measured { height, .. }) => {
                self.height.get_or_insert(height);
            }
            (Phase::Entering { enter: None }, Event::Measured { height, at }) => {
                self.height = Some(height);
                self.phase = Phase::Entering {
                    enter: Some(self.enter_animation(height, at)),
                };
            }
            (Phase::Exiting { exit: None, .. }, Event::Measured { height, at }) => {
                self.height = Some(height);
                let duration = self.settings.animation_duration.as_duration();
                self.phase = Phase::Exiting {
                    exit: Some(Animation::new(
                        self.settings.resting_offset.value(),
                        height.hidden_offset(),
                        at,
                        duration,
                        Easing::ANTICIPATE_OVERSHOOT,
                    )),
                    detach_at: at + duration,
                };
            }
            (Phase::Entering { enter: Some(_) }, Event::EnterFinished) => {
                self.phase = Phase::Idle;
            }
            (Phase::Entering { .. } | Phase::Idle, Event::Dismiss { immediate: false, at }) => {
                self.begin_exit(at);
            }
            (
                Phase::Entering { .. } | Phase::Idle | Phase::Exiting { .. },
                Event::Dismiss { immediate: true, .. },
            )
            | (Phase::Exiting { .. }, Event::DetachDue) => {
                self.detach();
                self.phase = Phase::Removed;
            }
            (Phase::Entering { .. } | Phase::Idle | Phase::Exiting { .. }, Event::DetachedOutOfBand) => {
                self.handle = None;
                self.phase = Phase::Removed;
            }
            (Phase::Exiting { .. } | Phase::Removed, Event::Dismiss { .. }) => {
                self.warn_illegal(LifecycleAction::Dismiss);
            }
            _ => {}
        }
        self.log_transition(from);
    }

    fn enter_animation(&self, height: MeasuredHeight, at: Instant) -> Animation {
        Animation::new(
            height.hidden_offset(),
            self.settings.resting_offset.value(),
            at,
            self.settings.animation_duration.as_duration(),
            Easing::OVERSHOOT,
        )
    }

    fn begin_exit(&mut self, at: Instant) {
        let duration = self.settings.animation_duration.as_duration();
        let exit = match self.height {
            Some(height) => {
                let from = self
                    .translation_y(at)
                    .unwrap_or(self.settings.resting_offset.value());
                Some(Animation::new(
                    from,
                    height.hidden_offset(),
                    at,
                    duration,
                    Easing::ANTICIPATE_OVERSHOOT,
                ))
            }
            None => {
                self.warn(
                    WarningType::MissingMeasurement,
                    format!("Exit animation deferred: {}", LifecycleError::MissingMeasurement),
                );
                None
            }
        };
        self.press_origin = None;
        if let Some(recognizer) = self.swipe.as_mut() {
            let mut gate = SwipeGate::new(false);
            recognizer.cancel(at, &mut gate);
        }
        self.touching = false;
        self.phase = Phase::Exiting {
            exit,
            detach_at: at + duration,
        };
    }

    /// Fires `on_dismiss` and removes the surface, unless the host already
    /// let go of it.
    fn detach(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if !self.host.is_attached(handle) {
            return;
        }
        if let Some(callback) = self.on_dismiss.take() {
            callback();
        }
        if let Err(err) = self.host.remove_immediate(handle) {
            self.warn(WarningType::HostRemovalFailed, err.to_string());
        }
    }

    fn decorate(&mut self) {
        let progress = self.options.progress;
        self.surface.set_visible(Slot::Icon, !progress);
        self.surface.set_visible(Slot::Progress, progress);
        if self.options.pulse_icon && !progress {
            self.surface.pulse_icon();
        }
        for button in &self.options.buttons {
            self.surface.push_button(button.label(), button.style());
        }
        self.surface
            .set_visible(Slot::Buttons, !self.options.buttons.is_empty());
        if self.options.vibration {
            self.surface.haptic_feedback();
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    fn log_transition(&self, from: BannerState) {
        let to = self.phase.state();
        if from == to {
            return;
        }
        if let Some(handle) = &self.diagnostics {
            handle.log_transition(from, to);
        }
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn warn(&self, warning_type: WarningType, message: impl Into<String>) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(WarningEvent::new(warning_type, message));
        }
    }

    fn warn_illegal(&self, action: LifecycleAction) {
        let err = LifecycleError::IllegalTransition {
            from: self.phase.state(),
            action,
        };
        self.warn(WarningType::IllegalTransition, err.to_string());
    }
}
