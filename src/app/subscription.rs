// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Idle when no toasts are showing so the app does not wake up for nothing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
