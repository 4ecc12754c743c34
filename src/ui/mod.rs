// SPDX-License-Identifier: MPL-2.0
//! UI components: design tokens, theming, the navbar, page screens, and
//! the toast notification system.

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod faq;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod programs;
pub mod styles;
pub mod theming;
