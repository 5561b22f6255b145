use crate::{config::Config, tests::fakes};

use std::{fs, time::Duration};

/// WHAT: Missing config file is created with defaults
/// WHY: First launch must work without any setup
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_config_when_loading_then_default_created() {
    // Given: A path in a fresh directory
    let dir = fakes::temp_dir();
    let path = dir.join("config.toml");

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Defaults returned and written to disk
    assert_eq!(config, Config::default());
    assert!(path.exists());
    assert_eq!(config.shortcut.descriptor, None);
    assert_eq!(config.save_delay(), Duration::from_secs(1));
    fs::remove_dir_all(dir).unwrap();
}

/// WHAT: Partial config files fill in defaults
/// WHY: Users only write the settings they care about
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_config_when_loading_then_missing_sections_defaulted() {
    // Given: A file with only a shortcut
    let dir = fakes::temp_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    fs::write(&path, "[shortcut]\ndescriptor = \"Ctrl+Shift+R\"\n").unwrap();

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Shortcut read, other sections defaulted
    assert_eq!(config.shortcut.descriptor.as_deref(), Some("Ctrl+Shift+R"));
    assert_eq!(config.window.save_delay_ms, 1000);
    assert!(!config.debug.devtools);
    fs::remove_dir_all(dir).unwrap();
}

/// WHAT: Saved config loads back unchanged
/// WHY: Atomic save must write a complete, parseable file
#[test]
#[allow(clippy::unwrap_used)]
fn given_modified_config_when_saved_then_reloads_equal_and_no_temp_left() {
    // Given: A non-default config
    let dir = fakes::temp_dir();
    let path = dir.join("config.toml");
    let mut config = Config::default();
    config.shortcut.descriptor = Some("Alt+F7".to_string());
    config.window.save_delay_ms = 250;
    config.debug.devtools = true;

    // When: Saving and reloading
    config.save_to(&path).unwrap();
    let reloaded = Config::load_from(&path).unwrap();

    // Then: Same config, no temp file, debugging on
    assert_eq!(reloaded, config);
    assert!(!path.with_extension("toml.tmp").exists());
    assert!(reloaded.debugging_enabled());
    fs::remove_dir_all(dir).unwrap();
}

/// WHAT: Malformed config is an error
/// WHY: A broken settings file must not silently reset the user's choices
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_config_when_loading_then_config_error() {
    // Given: A file that is not TOML
    let dir = fakes::temp_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    fs::write(&path, "shortcut = [").unwrap();

    // When: Loading
    let result = Config::load_from(&path);

    // Then: Configuration error
    assert!(matches!(result, Err(crate::AppError::ConfigError { .. })));
    fs::remove_dir_all(dir).unwrap();
}

/// WHAT: Startup falls back to defaults on a broken config
/// WHY: A typo in the settings file must not stop the app from launching
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_config_when_loading_or_default_then_defaults_and_file_untouched() {
    // Given: A hand-edited file with a syntax error
    let dir = fakes::temp_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let broken = "[shortcut]\ndescriptor = \"Ctrl+Shift+R\n";
    fs::write(&path, broken).unwrap();

    // When: Loading with fallback
    let config = Config::load_or_default(&path);

    // Then: Defaults in memory, the user's file unchanged
    assert_eq!(config, Config::default());
    assert_eq!(fs::read_to_string(&path).unwrap(), broken);
    fs::remove_dir_all(dir).unwrap();
}
