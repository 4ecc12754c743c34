// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` owns the active notifications and handles
//! emission, manual dismissal, and age-based auto-dismissal.

use super::notification::{Kind, Notification, NotificationId};
use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Owns the set of currently active notifications.
///
/// Display order is creation order, oldest first. There is no cap on how
/// many notifications can be active at once; every one expires on its own
/// clock, `duration` after its creation.
#[derive(Debug)]
pub struct NotificationCenter {
    /// Active notifications, oldest first.
    active: VecDeque<Notification>,
    /// Auto-dismiss window applied to every notification.
    duration: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    /// Creates an empty center with the default 5 second window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_duration(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS))
    }

    /// Creates an empty center with a custom auto-dismiss window.
    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            active: VecDeque::new(),
            duration,
        }
    }

    /// Returns the configured auto-dismiss window.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Creates a notification and appends it to the active collection.
    ///
    /// Returns the fresh id. The notification's expiry clock starts now;
    /// it is evaluated by [`tick`](Self::tick).
    pub fn emit(&mut self, kind: Kind, message: impl Into<String>) -> NotificationId {
        let notification = Notification::new(kind, message);
        let id = notification.id();
        self.active.push_back(notification);
        id
    }

    /// Emits a success notification.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.emit(Kind::Success, message)
    }

    /// Emits an error notification.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.emit(Kind::Error, message)
    }

    /// Emits a warning notification.
    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.emit(Kind::Warning, message)
    }

    /// Emits an info notification.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.emit(Kind::Info, message)
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. An
    /// unknown or already-removed id is a harmless no-op: timer-driven
    /// and user-driven dismissal may race.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.active.iter().position(|n| n.id() == id) {
            self.active.remove(pos);
            true
        } else {
            false
        }
    }

    /// Dismisses every notification whose age has reached the window.
    ///
    /// Driven by the periodic tick subscription while any notification
    /// is active.
    pub fn tick(&mut self) {
        let window = self.duration;
        self.active.retain(|n| !n.is_expired(window));
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the active notifications, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns whether any notification is active.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Removes all notifications at once, cancelling their pending
    /// auto-dismissals. Called when the center is torn down.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn new_center_is_empty() {
        let center = NotificationCenter::new();
        assert_eq!(center.active_count(), 0);
        assert!(!center.has_notifications());
    }

    #[test]
    fn default_window_is_five_seconds() {
        let center = NotificationCenter::new();
        assert_eq!(center.duration(), Duration::from_millis(5000));
    }

    #[test]
    fn emit_appends_and_returns_unique_ids() {
        let mut center = NotificationCenter::new();
        let a = center.emit(Kind::Success, "a");
        let b = center.emit(Kind::Success, "b");

        assert_ne!(a, b);
        assert_eq!(center.active_count(), 2);
    }

    #[test]
    fn emitted_notification_is_visible_immediately() {
        let mut center = NotificationCenter::new();
        center.success("thank you");

        let active: Vec<_> = center.active().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind(), Kind::Success);
        assert_eq!(active[0].message(), "thank you");
    }

    #[test]
    fn active_order_is_creation_order() {
        let mut center = NotificationCenter::new();
        let a = center.error("A");
        center.info("B");

        let messages: Vec<&str> = center.active().map(|n| n.message()).collect();
        assert_eq!(messages, vec!["A", "B"]);

        center.dismiss(a);
        let messages: Vec<&str> = center.active().map(|n| n.message()).collect();
        assert_eq!(messages, vec!["B"]);
    }

    #[test]
    fn wrappers_set_the_matching_kind() {
        let mut center = NotificationCenter::new();
        center.success("s");
        center.error("e");
        center.warning("w");
        center.info("i");

        let kinds: Vec<Kind> = center.active().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec![Kind::Success, Kind::Error, Kind::Warning, Kind::Info]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut center = NotificationCenter::new();
        let a = center.success("a");
        let b = center.success("b");

        assert!(center.dismiss(a));
        assert_eq!(center.active_count(), 1);
        assert_eq!(center.active().next().map(Notification::id), Some(b));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut center = NotificationCenter::new();
        let id = center.success("once");

        assert!(center.dismiss(id));
        // Second dismissal of the same id is a silent no-op
        assert!(!center.dismiss(id));
        assert_eq!(center.active_count(), 0);
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut center = NotificationCenter::new();
        center.success("keep me");
        let foreign = Notification::success("never emitted").id();

        assert!(!center.dismiss(foreign));
        assert_eq!(center.active_count(), 1);
    }

    #[test]
    fn tick_keeps_notifications_inside_the_window() {
        let mut center = NotificationCenter::with_duration(Duration::from_secs(60));
        center.success("fresh");

        center.tick();
        assert_eq!(center.active_count(), 1);
    }

    #[test]
    fn tick_expires_notifications_past_the_window() {
        let mut center = NotificationCenter::with_duration(Duration::from_millis(10));
        let id = center.success("short lived");

        thread::sleep(Duration::from_millis(25));
        center.tick();
        assert_eq!(center.active_count(), 0);

        // Manual dismissal after expiry stays a no-op
        assert!(!center.dismiss(id));
    }

    #[test]
    fn expiry_is_per_notification_not_per_batch() {
        let mut center = NotificationCenter::with_duration(Duration::from_millis(40));
        center.success("old");
        thread::sleep(Duration::from_millis(50));
        center.success("young");

        center.tick();
        let messages: Vec<&str> = center.active().map(|n| n.message()).collect();
        assert_eq!(messages, vec!["young"]);
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let mut center = NotificationCenter::with_duration(Duration::from_millis(10));
        let id = center.success("a");
        center.handle_message(Message::Dismiss(id));
        assert_eq!(center.active_count(), 0);

        center.success("b");
        thread::sleep(Duration::from_millis(25));
        center.handle_message(Message::Tick);
        assert_eq!(center.active_count(), 0);
    }

    #[test]
    fn clear_removes_everything() {
        let mut center = NotificationCenter::new();
        for i in 0..5 {
            center.info(format!("n-{i}"));
        }

        center.clear();
        assert!(!center.has_notifications());
    }

    #[test]
    fn burst_has_no_visible_cap() {
        let mut center = NotificationCenter::new();
        for i in 0..100 {
            center.warning(format!("burst-{i}"));
        }
        assert_eq!(center.active_count(), 100);
    }
}
