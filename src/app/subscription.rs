// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::chip;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval while the chip is on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes pointer input to the chip. Moves and releases are needed even
/// outside the chip bounds to finish a swipe.
pub fn create_pointer_subscription() -> Subscription<Message> {
    event::listen_with(chip::pointer_message).map(Message::Chip)
}

/// Creates the animation tick subscription, active only while a chip is
/// presented.
pub fn create_tick_subscription(chip_visible: bool) -> Subscription<Message> {
    if chip_visible {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
