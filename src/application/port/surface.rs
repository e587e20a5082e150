// SPDX-License-Identifier: MPL-2.0
//! Banner surface port definitions.
//!
//! The banner's subviews (icon, progress indicator, title, subtitle and
//! button row) are opaque slots: the lifecycle decides what is visible and
//! in which order buttons appear, the implementation decides how it looks.
//! Decorations are fire-and-forget side effects.

/// A region of the banner surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Leading icon.
    Icon,
    /// Indeterminate progress indicator, shown in place of the icon.
    Progress,
    /// First line of text.
    Title,
    /// Second line of text.
    Subtitle,
    /// Row of action buttons below the text.
    Buttons,
}

/// Content pushed into a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent {
    /// Text for the title or subtitle.
    Text(String),
    /// Named icon resolved by the surface implementation.
    Icon(String),
}

/// Visual emphasis of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    /// Filled, high emphasis.
    Primary,
    /// Outlined, medium emphasis.
    #[default]
    Secondary,
    /// Text only, low emphasis.
    Text,
}

/// Port for the banner's visual slots.
pub trait VisualSlots {
    /// Shows or hides a slot.
    fn set_visible(&mut self, slot: Slot, visible: bool);

    /// Replaces the content of a slot.
    fn set_content(&mut self, slot: Slot, content: SlotContent);

    /// Appends a button to the button row.
    fn push_button(&mut self, label: &str, style: ButtonStyle);
}

/// Port for the banner's decoration side effects.
pub trait Decorations {
    /// Starts the icon pulse animation.
    fn pulse_icon(&mut self);

    /// Triggers a short haptic tick.
    fn haptic_feedback(&mut self);
}

/// Everything the lifecycle needs from the banner surface.
pub trait BannerSurface: VisualSlots + Decorations {}

impl<T: VisualSlots + Decorations> BannerSurface for T {}
