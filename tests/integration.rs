// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;

use tempfile::tempdir;
use tujiinue::config::{self, Config, Notifications};
use tujiinue::ui::notifications::{shared, Kind, NotificationCenter, Notifier, NotifierError};

#[test]
fn test_notification_duration_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Save a config with a custom auto-dismiss window
    let custom_config = Config {
        notifications: Notifications {
            duration_ms: Some(2000),
        },
        ..Config::default()
    };
    config::save_to_path(&custom_config, &temp_config_file_path)
        .expect("Failed to write config file");

    // 2. Reload it and build a center from the configured duration
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load config from path");
    let center = NotificationCenter::with_duration(loaded.notifications.duration());
    assert_eq!(center.duration(), Duration::from_millis(2000));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_notification_lifecycle_through_the_public_api() {
    let center = shared(NotificationCenter::with_duration(Duration::from_millis(30)));
    let notifier = Notifier::bound(&center);

    // Emission is visible immediately, in creation order
    let a = notifier.error("A").expect("bound notifier");
    let b = notifier.info("B").expect("bound notifier");
    assert_ne!(a, b);
    {
        let center = center.borrow();
        let messages: Vec<String> = center.active().map(|n| n.message().to_owned()).collect();
        assert_eq!(messages, vec!["A", "B"]);
    }

    // Manual dismissal removes only the target; repeating it is a no-op
    assert_eq!(notifier.dismiss(a), Ok(true));
    assert_eq!(notifier.dismiss(a), Ok(false));
    {
        let center = center.borrow();
        assert_eq!(center.active_count(), 1);
        assert_eq!(center.active().next().map(|n| n.kind()), Some(Kind::Info));
    }

    // The survivor expires on its own clock
    std::thread::sleep(Duration::from_millis(60));
    center.borrow_mut().tick();
    assert!(!center.borrow().has_notifications());

    // Dismissal after expiry stays a silent no-op
    assert_eq!(notifier.dismiss(b), Ok(false));
}

#[test]
fn test_emission_outside_an_initialized_center_fails_loudly() {
    let notifier = Notifier::unbound();

    let result = notifier.success("emitted before initialization");
    assert_eq!(result, Err(NotifierError::NotInitialized));
    assert_eq!(
        result.unwrap_err().to_string(),
        "notification center not initialized"
    );
}
