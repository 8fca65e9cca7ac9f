// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes feed the header fade and the particle field, and cursor
//! movement feeds the particle "grab" links. Frame ticks only run while an
//! animation needs them.

use super::Message;
use iced::{event, mouse, window, Subscription};

/// Routes window and cursor events.
///
/// Cursor events are observed even when a widget captured them, since the
/// particle canvas sits beneath the page content.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(Some(position)))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorMoved(None)),
        _ => None,
    })
}

/// Creates the per-frame tick driving springs, particles and the fade
/// removal deadline.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
