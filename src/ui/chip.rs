// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the banner chip.
//!
//! This module adapts the framework-independent banner core to iced:
//!
//! - [`ChipSurface`] stores what the lifecycle pushes into the slots
//! - [`WindowOverlay`] is the single overlay slot of the main window
//! - [`view`] draws the chip at its animated position
//! - [`PointerTracker`] turns iced input messages into [`PointerEvent`]s

use crate::application::port::{
    ButtonStyle, Decorations, HostError, HostHandle, OverlayHost, Slot, SlotContent, VisualSlots,
};
use crate::banner::{BannerLifecycle, BannerSettings};
use crate::domain::gesture::{PointerEvent, Position};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, event, mouse, touch, window, Color, Element, Length, Padding, Point, Theme};
use std::collections::HashSet;
use std::time::{Duration, Instant};

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const SPINNER_FRAME_MS: u128 = 80;

// =============================================================================
// Surface
// =============================================================================

/// In-memory slot state rendered by [`view`].
#[derive(Debug, Clone, Default)]
pub struct ChipSurface {
    title: Option<String>,
    subtitle: Option<String>,
    icon: Option<String>,
    visible: HashSet<Slot>,
    buttons: Vec<(String, ButtonStyle)>,
    pulse_started: Option<Instant>,
    progress_started: Option<Instant>,
    haptic_requests: u32,
}

impl ChipSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self, slot: Slot) -> bool {
        self.visible.contains(&slot)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|_| self.is_visible(Slot::Title))
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle
            .as_deref()
            .filter(|_| self.is_visible(Slot::Subtitle))
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn buttons(&self) -> &[(String, ButtonStyle)] {
        &self.buttons
    }

    /// Number of haptic feedback requests. Desktop windows have no haptic
    /// device, so requests are only counted.
    #[must_use]
    pub fn haptic_requests(&self) -> u32 {
        self.haptic_requests
    }

    /// Icon scale at `now`; 1.0 unless the pulse is running.
    #[must_use]
    pub fn pulse_scale(&self, now: Instant) -> f32 {
        let Some(started) = self.pulse_started else {
            return 1.0;
        };
        let period = u128::from(sizing::PULSE_PERIOD_MS);
        let elapsed = now.saturating_duration_since(started).as_millis() % period;
        let phase = elapsed as f32 / period as f32;
        let depth = 0.5 - 0.5 * (std::f32::consts::TAU * phase).cos();
        1.0 - (1.0 - sizing::PULSE_MIN_SCALE) * depth
    }

    /// Height of the chip body (without the top inset).
    #[must_use]
    pub fn body_height(&self) -> f32 {
        if self.is_visible(Slot::Buttons) && !self.buttons.is_empty() {
            sizing::CHIP_HEIGHT + sizing::BUTTON_HEIGHT + spacing::XS
        } else {
            sizing::CHIP_HEIGHT
        }
    }

    fn spinner_frame(&self, now: Instant) -> &'static str {
        let elapsed = self
            .progress_started
            .map_or(Duration::ZERO, |started| now.saturating_duration_since(started));
        let index = (elapsed.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[index]
    }
}

impl VisualSlots for ChipSurface {
    fn set_visible(&mut self, slot: Slot, visible: bool) {
        if visible {
            if slot == Slot::Progress && !self.visible.contains(&slot) {
                self.progress_started = Some(Instant::now());
            }
            self.visible.insert(slot);
        } else {
            self.visible.remove(&slot);
        }
    }

    fn set_content(&mut self, slot: Slot, content: SlotContent) {
        match (slot, content) {
            (Slot::Title, SlotContent::Text(text)) => self.title = Some(text),
            (Slot::Subtitle, SlotContent::Text(text)) => self.subtitle = Some(text),
            (Slot::Icon, SlotContent::Icon(name)) => self.icon = Some(name),
            // Progress and the button row have no settable content.
            _ => {}
        }
    }

    fn push_button(&mut self, label: &str, style: ButtonStyle) {
        self.buttons.push((label.to_string(), style));
    }
}

impl Decorations for ChipSurface {
    fn pulse_icon(&mut self) {
        self.pulse_started = Some(Instant::now());
    }

    fn haptic_feedback(&mut self) {
        self.haptic_requests = self.haptic_requests.saturating_add(1);
    }
}

// =============================================================================
// Overlay host
// =============================================================================

/// The overlay layer of the main window: a single slot that is either empty
/// or holds the chip.
#[derive(Debug, Clone, Default)]
pub struct WindowOverlay {
    closing: bool,
    next_id: u64,
    occupant: Option<HostHandle>,
}

impl WindowOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the window as closing; no further insertions or removals.
    pub fn close(&mut self) {
        self.closing = true;
    }

    /// Drops the occupant without going through the banner, as happens when
    /// the window content is rebuilt.
    pub fn clear(&mut self) {
        self.occupant = None;
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

impl OverlayHost for WindowOverlay {
    fn is_available(&self) -> bool {
        !self.closing
    }

    fn insert(&mut self) -> Result<HostHandle, HostError> {
        if self.closing {
            return Err(HostError::Unavailable);
        }
        if self.occupant.is_some() {
            return Err(HostError::Rejected("overlay already holds a chip".into()));
        }
        self.next_id += 1;
        let handle = HostHandle::new(self.next_id);
        self.occupant = Some(handle);
        Ok(handle)
    }

    fn is_attached(&self, handle: HostHandle) -> bool {
        self.occupant == Some(handle)
    }

    fn remove_immediate(&mut self, handle: HostHandle) -> Result<(), HostError> {
        if self.closing {
            return Err(HostError::Unavailable);
        }
        if self.occupant != Some(handle) {
            return Err(HostError::NotAttached);
        }
        self.occupant = None;
        Ok(())
    }
}

// =============================================================================
// Input
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Press landed on the chip body.
    BodyPressed,
    /// Cursor or finger moved anywhere in the window.
    CursorMoved(Point),
    PointerReleased,
    /// The pointer left the window or the touch was lost.
    PointerLost,
    ButtonPressed(usize),
}

/// Maps raw window events to chip messages. Intended for
/// [`iced::event::listen_with`].
pub fn pointer_message(event: iced::Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position })
        | iced::Event::Touch(touch::Event::FingerMoved { position, .. })
        | iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::CursorMoved(position))
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | iced::Event::Touch(touch::Event::FingerLifted { .. }) => Some(Message::PointerReleased),
        iced::Event::Mouse(mouse::Event::CursorLeft) | iced::Event::Touch(touch::Event::FingerLost { .. }) => {
            Some(Message::PointerLost)
        }
        _ => None,
    }
}

/// Converts chip messages into pointer events for the banner body.
///
/// Only a press on the body starts a sequence; moves and releases are
/// forwarded until the sequence ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    cursor: Position,
    pressed: bool,
}

impl PointerTracker {
    pub fn translate(&mut self, message: Message, at: Instant) -> Option<PointerEvent> {
        match message {
            Message::BodyPressed => {
                self.pressed = true;
                Some(PointerEvent::down(self.cursor.x, self.cursor.y, at))
            }
            Message::CursorMoved(point) => {
                self.cursor = Position::new(point.x, point.y);
                self.pressed
                    .then(|| PointerEvent::moved(point.x, point.y, at))
            }
            Message::PointerReleased if self.pressed => {
                self.pressed = false;
                Some(PointerEvent::up(self.cursor.x, self.cursor.y, at))
            }
            Message::PointerLost if self.pressed => {
                self.pressed = false;
                Some(PointerEvent::cancel(self.cursor.x, self.cursor.y, at))
            }
            Message::PointerReleased | Message::PointerLost | Message::ButtonPressed(_) => None,
        }
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Space above the chip body, so the resting offset leaves a margin.
#[must_use]
pub fn top_inset(settings: BannerSettings) -> f32 {
    (-settings.resting_offset.value()).max(0.0) + spacing::MD
}

/// Size the lifecycle should be told about after layout.
#[must_use]
pub fn measured_size(surface: &ChipSurface, settings: BannerSettings) -> (f32, f32) {
    (
        sizing::CHIP_WIDTH,
        top_inset(settings) + surface.body_height(),
    )
}

/// Vertical placement of the chip body inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Distance from the window top to the visible part of the body.
    pub top: f32,
    /// Visible height; the body is clipped from the top when partly off-screen.
    pub visible_height: f32,
}

#[must_use]
pub fn placement(translation_y: f32, inset: f32, body_height: f32) -> Placement {
    let top = translation_y + inset;
    if top >= 0.0 {
        Placement {
            top,
            visible_height: body_height,
        }
    } else {
        Placement {
            top: 0.0,
            visible_height: (body_height + top).max(0.0),
        }
    }
}

// =============================================================================
// View
// =============================================================================

/// Renders the chip at its position for `now`, or nothing while it is not
/// in the overlay.
pub fn view<'a, H: OverlayHost>(banner: &'a BannerLifecycle<H, ChipSurface>, now: Instant) -> Element<'a, Message> {
    let translation_y = match banner.translation_y(now) {
        Some(y) if banner.state().is_attached() => y,
        _ => return empty(),
    };
    let surface = banner.surface();
    let transform = banner.body_transform(now);
    let alpha = transform.alpha;
    let interactive = banner.is_interactive();

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);
    if surface.is_visible(Slot::Icon) {
        let size = typography::ICON * surface.pulse_scale(now);
        header = header.push(
            Container::new(
                Text::new(icon_glyph(surface.icon().unwrap_or_default()))
                    .size(size)
                    .style(move |_theme: &Theme| tinted(palette::WHITE, alpha)),
            )
            .width(Length::Fixed(sizing::ICON))
            .align_x(alignment::Horizontal::Center),
        );
    }
    if surface.is_visible(Slot::Progress) {
        header = header.push(
            Container::new(
                Text::new(surface.spinner_frame(now))
                    .size(typography::ICON)
                    .style(move |_theme: &Theme| tinted(palette::ACCENT, alpha)),
            )
            .width(Length::Fixed(sizing::ICON)),
        );
    }

    let mut lines = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(title) = surface.title() {
        lines = lines.push(
            Text::new(title)
                .size(typography::TITLE)
                .style(move |_theme: &Theme| tinted(palette::WHITE, alpha)),
        );
    }
    if let Some(subtitle) = surface.subtitle() {
        lines = lines.push(
            Text::new(subtitle)
                .size(typography::BODY)
                .style(move |_theme: &Theme| tinted(palette::TEXT_MUTED, alpha)),
        );
    }
    header = header.push(lines);

    let mut body = Column::new().spacing(spacing::XS).push(header);
    if surface.is_visible(Slot::Buttons) {
        let row = surface
            .buttons()
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::XS), |row, (index, (label, style))| {
                let style = *style;
                row.push(
                    button(Text::new(label.as_str()).size(typography::BODY))
                        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                        .padding([0.0, spacing::SM])
                        .on_press_maybe(interactive.then_some(Message::ButtonPressed(index)))
                        .style(move |theme: &Theme, status| action_button_style(theme, status, style, alpha)),
                )
            });
        body = body.push(
            Container::new(row)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );
    }

    let body_height = surface.body_height();
    let card = Container::new(body)
        .width(Length::Fixed(sizing::CHIP_WIDTH))
        .height(Length::Fixed(body_height))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| chip_container_style(alpha));
    let area = mouse_area(card);
    let area = if interactive {
        area.on_press(Message::BodyPressed)
    } else {
        area
    };

    let place = placement(translation_y, top_inset(banner.settings()), body_height);
    let clipped = Container::new(area)
        .height(Length::Fixed(place.visible_height))
        .align_y(alignment::Vertical::Bottom)
        .clip(true);

    // Centered horizontally; the swipe shift moves the center by translation_x.
    let shift = 2.0 * transform.translation_x;
    Container::new(clipped)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(Padding {
            top: place.top,
            right: (-shift).max(0.0),
            bottom: 0.0,
            left: shift.max(0.0),
        })
        .into()
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

fn icon_glyph(name: &str) -> &'static str {
    match name {
        "check" | "success" => "✔",
        "warning" => "⚠",
        "error" => "✖",
        _ => "ℹ",
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn tinted(color: Color, alpha: f32) -> text::Style {
    text::Style {
        color: Some(faded(color, alpha)),
    }
}

/// Style function for the chip body.
fn chip_container_style(alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(
            Color {
                a: opacity::SURFACE,
                ..palette::SURFACE
            },
            alpha,
        ))),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: faded(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..shadow::CHIP.color
                },
                alpha,
            ),
            ..shadow::CHIP
        },
        text_color: Some(faded(palette::WHITE, alpha)),
        ..Default::default()
    }
}

/// Style function for action buttons.
fn action_button_style(
    _theme: &Theme,
    status: button::Status,
    style: ButtonStyle,
    alpha: f32,
) -> button::Style {
    let (background, text_color) = match (style, status) {
        (_, button::Status::Disabled) => (None, faded(palette::TEXT_MUTED, opacity::OVERLAY_MEDIUM)),
        (ButtonStyle::Primary, button::Status::Pressed) => (Some(palette::ACCENT_PRESSED), palette::WHITE),
        (ButtonStyle::Primary, _) => (Some(palette::ACCENT), palette::WHITE),
        (ButtonStyle::Secondary, button::Status::Hovered | button::Status::Pressed) => (
            Some(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            }),
            palette::WHITE,
        ),
        (ButtonStyle::Secondary, _) => (
            Some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }),
            palette::WHITE,
        ),
        (ButtonStyle::Text, button::Status::Hovered | button::Status::Pressed) => {
            (None, palette::WHITE)
        }
        (ButtonStyle::Text, _) => (None, palette::ACCENT),
    };

    button::Style {
        background: background.map(|color| iced::Background::Color(faded(color, alpha))),
        text_color: faded(text_color, alpha),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
