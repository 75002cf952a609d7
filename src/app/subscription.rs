// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native events the portfolio needs are window size changes, which
//! drive the responsive breakpoints.

use super::Message;
use iced::{event, window, Subscription};

/// Routes window open/resize events to [`Message::WindowResized`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size))
        | event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}
