// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (subscription confirmed, validation errors, etc.)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds
//! - [`center`] - `NotificationCenter` for lifecycle management
//! - [`notifier`] - Injectable `Notifier` handle for page components
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```
//! use tujiinue::ui::notifications::{shared, NotificationCenter, Notifier};
//!
//! let center = shared(NotificationCenter::new());
//! let notifier = Notifier::bound(&center);
//!
//! // Anywhere a notifier has been injected:
//! let id = notifier.success("thank you for subscribing to our newsletter")?;
//!
//! // Dismissal is idempotent; a raced timer removal is harmless.
//! notifier.dismiss(id)?;
//! notifier.dismiss(id)?;
//! # Ok::<(), tujiinue::ui::notifications::NotifierError>(())
//! ```
//!
//! # Lifecycle
//!
//! A notification is `active` from emission until it is dismissed by the
//! user or expires (default 5000 ms); removal is terminal and the only
//! state transition. Expiry is age-based, driven by a tick subscription
//! that runs only while notifications exist, so a dismissed id leaves no
//! dangling timer behind.

mod center;
mod notification;
mod notifier;
mod toast;

pub use center::{Message as NotificationMessage, NotificationCenter};
pub use notification::{Kind, Notification, NotificationId};
pub use notifier::{shared, Notifier, NotifierError, SharedCenter};
pub use toast::Toast;
