// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and the
//! notification center.
//!
//! The `App` struct owns the shared notification center and injects a
//! bound [`Notifier`] into every screen update that can emit toasts, so
//! no component reaches for global state.

mod message;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::ui::notifications::{shared, NotificationCenter, Notifier, SharedCenter, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{contact, faq, home, navbar};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 980;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    home: home::State,
    faq: faq::State,
    contact: contact::State,
    /// Notification center shared with the injected notifiers.
    center: SharedCenter,
    /// Emission handle injected into screen updates.
    notifier: Notifier,
    theme_mode: ThemeMode,
    /// Last loaded settings, written back when the user changes them.
    config: Config,
    /// Alternate settings location from `--config`, if any.
    config_path: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            log::warn!("failed to load config, using defaults: {err}");
            Config::default()
        });

        let mut app = Self::with_config(config);
        app.config_path = flags.config_path;
        (app, Task::none())
    }

    fn with_config(config: Config) -> Self {
        let center = shared(NotificationCenter::with_duration(
            config.notifications.duration(),
        ));
        let notifier = Notifier::bound(&center);

        Self {
            screen: Screen::default(),
            home: home::State::default(),
            faq: faq::State::default(),
            contact: contact::State::default(),
            center,
            notifier,
            theme_mode: config.general.theme_mode,
            config,
            config_path: None,
        }
    }

    /// Writes the current settings back to disk. Failures are logged;
    /// the session keeps the in-memory value either way.
    fn persist_preferences(&self) {
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&self.config, path),
            None => config::save(&self.config),
        };
        if let Err(err) = result {
            log::warn!("failed to persist settings: {err}");
        }
    }

    fn title(&self) -> String {
        String::from("Tujiinue Mashinani")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.center.borrow().has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar::Message::Navigate(screen)) => {
                self.screen = screen;
                Task::none()
            }
            Message::Navbar(navbar::Message::ToggleTheme) => {
                self.theme_mode = self.theme_mode.toggled();
                self.config.general.theme_mode = self.theme_mode;
                self.persist_preferences();
                Task::none()
            }
            Message::Home(home_message) => {
                match home::update(&mut self.home, home_message, &self.notifier) {
                    Ok(home::Event::Navigate(screen)) => self.screen = screen,
                    Ok(home::Event::None) => {}
                    Err(err) => log::error!("notification emission failed: {err}"),
                }
                Task::none()
            }
            Message::Faq(faq_message) => {
                faq::update(&mut self.faq, faq_message);
                Task::none()
            }
            Message::Contact(contact_message) => {
                match contact::update(&mut self.contact, contact_message, &self.notifier) {
                    Ok(contact::Action::Run(task)) => task.map(Message::Contact),
                    Ok(contact::Action::None) => Task::none(),
                    Err(err) => {
                        log::error!("notification emission failed: {err}");
                        Task::none()
                    }
                }
            }
            Message::Notification(notification_message) => {
                self.center.borrow_mut().handle_message(notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.center.borrow_mut().tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let toast_overlay =
            Toast::view_overlay(&self.center.borrow()).map(Message::Notification);

        view::view(
            view::ViewContext {
                screen: self.screen,
                home: &self.home,
                faq: &self.faq,
                contact: &self.contact,
                dark: self.theme_mode.is_dark(),
            },
            toast_overlay,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{General, Notifications};
    use crate::ui::notifications::{Kind, NotificationMessage};
    use std::time::Duration;

    fn app_with_duration(duration_ms: u64) -> App {
        App::with_config(Config {
            notifications: Notifications {
                duration_ms: Some(duration_ms),
            },
            ..Config::default()
        })
    }

    #[test]
    fn navbar_message_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Faq)));
        assert_eq!(app.screen, Screen::Faq);
    }

    #[test]
    fn hero_button_switches_to_programs() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::ExplorePrograms));
        assert_eq!(app.screen, Screen::Programs);
    }

    #[test]
    fn newsletter_subscription_emits_through_the_shared_center() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::EmailChanged(
            "amina@example.org".to_string(),
        )));
        let _ = app.update(Message::Home(home::Message::Subscribe));

        let center = app.center.borrow();
        assert_eq!(center.active_count(), 1);
        assert_eq!(center.active().next().map(|n| n.kind()), Some(Kind::Success));
    }

    #[test]
    fn dismiss_message_removes_the_notification() {
        let mut app = App::default();
        let id = app.notifier.info("hello").expect("bound notifier");
        assert!(app.center.borrow().has_notifications());

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert!(!app.center.borrow().has_notifications());
    }

    #[test]
    fn tick_message_expires_old_notifications() {
        let mut app = app_with_duration(10);
        app.notifier.warning("short lived").expect("bound notifier");

        std::thread::sleep(Duration::from_millis(25));
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(!app.center.borrow().has_notifications());
    }

    #[test]
    fn theme_toggle_flips_mode_and_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");

        let mut app = App::with_config(Config {
            general: General {
                theme_mode: ThemeMode::Light,
            },
            ..Config::default()
        });
        app.config_path = Some(path.clone());

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);

        let saved = config::load_from_path(&path).expect("saved settings");
        assert_eq!(saved.general.theme_mode, ThemeMode::Dark);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn configured_duration_reaches_the_center() {
        let app = app_with_duration(1234);
        assert_eq!(
            app.center.borrow().duration(),
            Duration::from_millis(1234)
        );
    }
}
