// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::NOTIFICATION_TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription for notification auto-dismiss.
///
/// The timer only runs while notifications are active, so an idle app
/// schedules no work.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
