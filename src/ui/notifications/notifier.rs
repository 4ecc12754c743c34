// SPDX-License-Identifier: MPL-2.0
//! Injectable emission handle for page components.
//!
//! The center itself lives in the application state; components that need
//! to emit notifications receive a cloned [`Notifier`] as a parameter
//! instead of reaching for a global. A notifier that was never bound, or
//! whose center has been torn down, fails loudly so integration mistakes
//! surface during development instead of silently dropping toasts.

use super::center::NotificationCenter;
use super::notification::{Kind, NotificationId};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Shared ownership of a center, for the single-threaded UI event loop.
pub type SharedCenter = Rc<RefCell<NotificationCenter>>;

/// Wraps a center for sharing between the app state and notifiers.
#[must_use]
pub fn shared(center: NotificationCenter) -> SharedCenter {
    Rc::new(RefCell::new(center))
}

/// Error returned when emitting through an unbound notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierError {
    /// The notifier is not bound to a live center.
    NotInitialized,
}

impl fmt::Display for NotifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierError::NotInitialized => write!(f, "notification center not initialized"),
        }
    }
}

impl std::error::Error for NotifierError {}

/// Cloneable handle through which components emit notifications.
///
/// Holds a weak reference: the app state keeps the center alive, and a
/// handle that outlives it degrades into an error instead of mutating
/// freed state.
#[derive(Debug, Clone)]
pub struct Notifier {
    center: Weak<RefCell<NotificationCenter>>,
}

impl Default for Notifier {
    /// An unbound notifier; every operation fails with
    /// [`NotifierError::NotInitialized`].
    fn default() -> Self {
        Self {
            center: Weak::new(),
        }
    }
}

impl Notifier {
    /// Creates a notifier bound to the given center.
    #[must_use]
    pub fn bound(center: &SharedCenter) -> Self {
        Self {
            center: Rc::downgrade(center),
        }
    }

    /// Creates an unbound notifier, equivalent to `Notifier::default()`.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    fn with_center<T>(
        &self,
        f: impl FnOnce(&mut NotificationCenter) -> T,
    ) -> Result<T, NotifierError> {
        let center = self.center.upgrade().ok_or(NotifierError::NotInitialized)?;
        let mut center = center.borrow_mut();
        Ok(f(&mut center))
    }

    /// Emits a notification of the given kind.
    pub fn emit(
        &self,
        kind: Kind,
        message: impl Into<String>,
    ) -> Result<NotificationId, NotifierError> {
        let message = message.into();
        self.with_center(|center| center.emit(kind, message))
    }

    /// Emits a success notification.
    pub fn success(&self, message: impl Into<String>) -> Result<NotificationId, NotifierError> {
        self.emit(Kind::Success, message)
    }

    /// Emits an error notification.
    pub fn error(&self, message: impl Into<String>) -> Result<NotificationId, NotifierError> {
        self.emit(Kind::Error, message)
    }

    /// Emits a warning notification.
    pub fn warning(&self, message: impl Into<String>) -> Result<NotificationId, NotifierError> {
        self.emit(Kind::Warning, message)
    }

    /// Emits an info notification.
    pub fn info(&self, message: impl Into<String>) -> Result<NotificationId, NotifierError> {
        self.emit(Kind::Info, message)
    }

    /// Dismisses a notification through the handle.
    ///
    /// Returns whether the notification was still active; an absent id is
    /// not an error.
    pub fn dismiss(&self, id: NotificationId) -> Result<bool, NotifierError> {
        self.with_center(|center| center.dismiss(id))
    }
}
