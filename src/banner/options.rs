// SPDX-License-Identifier: MPL-2.0
//! Banner presentation options.

use crate::application::port::ButtonStyle;
use crate::domain::banner::{AnimationDuration, DisplayTime, RestingOffset};
use std::fmt;

/// Click handler attached to an action button.
pub type ButtonHandler = Box<dyn FnMut()>;

/// An action button shown below the banner text.
pub struct ButtonSpec {
    label: String,
    style: ButtonStyle,
    on_click: Option<ButtonHandler>,
}

impl ButtonSpec {
    /// Creates a button with the given label and style and no handler.
    #[must_use]
    pub fn new(label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            label: label.into(),
            style,
            on_click: None,
        }
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Button style.
    #[must_use]
    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    /// Runs the click handler, if any. Returns whether one ran.
    pub(crate) fn click(&mut self) -> bool {
        match self.on_click.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSpec")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("has_handler", &self.on_click.is_some())
            .finish()
    }
}

/// Per-banner presentation options, fixed once the banner is attached.
#[derive(Debug)]
pub struct BannerOptions {
    /// Pulse the icon when the banner appears.
    pub pulse_icon: bool,
    /// Show an indeterminate progress indicator in place of the icon.
    pub progress: bool,
    /// Emit haptic feedback when the banner appears.
    pub vibration: bool,
    /// Allow the user to swipe the banner away horizontally.
    pub swipe_to_dismiss: bool,
    /// Hide automatically this long after attach; `None` keeps it up until
    /// dismissed.
    pub auto_dismiss: Option<DisplayTime>,
    /// Action buttons, in display order.
    pub buttons: Vec<ButtonSpec>,
}

impl Default for BannerOptions {
    fn default() -> Self {
        Self {
            pulse_icon: true,
            progress: false,
            vibration: false,
            swipe_to_dismiss: false,
            auto_dismiss: Some(DisplayTime::default()),
            buttons: Vec::new(),
        }
    }
}

impl BannerOptions {
    /// Enables or disables the icon pulse.
    #[must_use]
    pub fn with_icon_pulse(mut self, enabled: bool) -> Self {
        self.pulse_icon = enabled;
        self
    }

    /// Enables or disables the progress indicator.
    #[must_use]
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// Enables or disables haptic feedback on show.
    #[must_use]
    pub fn with_vibration(mut self, enabled: bool) -> Self {
        self.vibration = enabled;
        self
    }

    /// Enables or disables swipe-to-dismiss.
    #[must_use]
    pub fn with_swipe_to_dismiss(mut self, enabled: bool) -> Self {
        self.swipe_to_dismiss = enabled;
        self
    }

    /// Sets how long the banner stays up before hiding itself.
    #[must_use]
    pub fn with_display_time(mut self, display: DisplayTime) -> Self {
        self.auto_dismiss = Some(display);
        self
    }

    /// Keeps the banner up until dismissed explicitly.
    #[must_use]
    pub fn infinite_duration(mut self) -> Self {
        self.auto_dismiss = None;
        self
    }

    /// Appends an action button.
    #[must_use]
    pub fn add_button(mut self, button: ButtonSpec) -> Self {
        self.buttons.push(button);
        self
    }
}

/// Timing and geometry shared by every banner of an application.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BannerSettings {
    /// Duration of the enter and exit animations.
    pub animation_duration: AnimationDuration,
    /// Vertical translation of the body while shown.
    pub resting_offset: RestingOffset,
}
