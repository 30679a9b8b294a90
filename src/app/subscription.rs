// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw window events reach the feed component only when no widget captured
//! them, which is what gives controls precedence over surface gestures.

use super::Message;
use crate::config::POSITION_TICK_MS;
use crate::ui::feed;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes uncaptured native events to the feed component.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match status {
        event::Status::Ignored => Some(Message::Feed(feed::Message::RawEvent {
            window: window_id,
            event,
        })),
        event::Status::Captured => None,
    })
}

/// Periodic tick driving surface polling and deferred tap resolution.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(POSITION_TICK_MS))
        .map(|now| Message::Feed(feed::Message::Tick(now)))
}
