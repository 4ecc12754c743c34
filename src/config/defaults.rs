// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// How long a notification stays on screen before auto-dismissal.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Interval of the tick subscription that drives notification expiry.
///
/// Expiry is evaluated against each notification's age, so this only
/// bounds how late a dismissal can fire, not when it becomes due.
pub const NOTIFICATION_TICK_INTERVAL_MS: u64 = 100;
