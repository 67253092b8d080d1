// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input on the viewer is handled by its canvas; only keyboard and
//! window events are routed here.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the animation/notification tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Forwards keyboard and window events to the application.
///
/// Key presses already captured by a widget (e.g. typing in the search box)
/// are dropped. Window events are always forwarded so the window id is known
/// before fullscreen is requested.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let forward = match &event {
            event::Event::Window(_) => true,
            event::Event::Keyboard(_) => status == event::Status::Ignored,
            _ => false,
        };
        forward.then_some(Message::RawEvent {
            window: window_id,
            event,
        })
    })
}

/// Creates a periodic tick subscription for spinners and notification
/// auto-dismiss.
pub fn create_tick_subscription(
    is_loading: bool,
    has_expiring_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_expiring_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
