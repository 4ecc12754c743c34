// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids come from a process-wide monotonic counter, so two notifications
/// created in the same millisecond still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a notification, determining its accent color and label.
///
/// All kinds share the same auto-dismiss window; the kind only affects
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Returns the heading shown on the toast card.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Success => "Success",
            Kind::Error => "Error",
            Kind::Warning => "Warning",
            Kind::Info => "Info",
        }
    }
}

/// A notification to be displayed to the user.
///
/// Immutable after creation; removal from the center is the only state
/// transition a notification goes through.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    /// When this notification was created; basis for auto-dismissal.
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given kind and message.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification has outlived the given window.
    #[must_use]
    pub fn is_expired(&self, window: Duration) -> bool {
        self.age() >= window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn ids_are_unique_in_a_rapid_burst() {
        let ids: Vec<NotificationId> = (0..1000).map(|_| NotificationId::new()).collect();
        for (i, a) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(a));
        }
    }

    #[test]
    fn kind_colors_are_distinct() {
        let success = Kind::Success.color();
        let info = Kind::Info.color();
        let warning = Kind::Warning.color();
        let error = Kind::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::error("").kind(), Kind::Error);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
        assert_eq!(Notification::info("").kind(), Kind::Info);
    }

    #[test]
    fn empty_message_is_permitted() {
        let n = Notification::info("");
        assert_eq!(n.message(), "");
    }

    #[test]
    fn fresh_notification_is_not_expired() {
        let n = Notification::success("test");
        assert!(!n.is_expired(Duration::from_secs(5)));
    }

    #[test]
    fn zero_window_expires_immediately() {
        let n = Notification::success("test");
        assert!(n.is_expired(Duration::ZERO));
    }
}
