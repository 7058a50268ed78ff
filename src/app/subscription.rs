// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// How often the carousel clock ticks; advancement itself is gated on the
/// autoplay interval, so this only bounds reaction latency.
const TICK_PERIOD: Duration = Duration::from_millis(250);

/// Escape closes the drawer and the lightbox. Only subscribed while an
/// overlay is actually open.
pub fn create_keyboard_subscription(overlay_open: bool) -> Subscription<Message> {
    if !overlay_open {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window| match status {
        event::Status::Captured => None,
        event::Status::Ignored => {
            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) = event
            {
                Some(Message::EscapePressed)
            } else {
                None
            }
        }
    })
}

/// Periodic tick driving the gallery carousel autoplay.
pub fn create_tick_subscription(wants_tick: bool) -> Subscription<Message> {
    if wants_tick {
        time::every(TICK_PERIOD).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
