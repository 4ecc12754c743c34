// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{contact, faq, home, navbar, notifications};
use std::path::PathBuf;
use std::time::Instant;

/// Launch options parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Alternate `settings.toml` location, for testing and portable use.
    pub config_path: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Faq(faq::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving notification auto-dismissal.
    Tick(Instant),
}
