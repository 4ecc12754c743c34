// SPDX-License-Identifier: MPL-2.0
//! `tujiinue` is a desktop landing app for the Tujiinue Mashinani
//! community initiative, built with the Iced GUI framework.
//!
//! The interesting part is the toast notification system in
//! [`ui::notifications`]: an injectable, fail-fast emission API with
//! timed auto-dismissal. The marketing screens are thin consumers of it.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
