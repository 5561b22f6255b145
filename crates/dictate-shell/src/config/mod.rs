#[allow(clippy::module_inception)]
mod config;
mod debug_config;
mod shortcut_config;
mod window_config;

pub(crate) use {
    config::Config, debug_config::DebugConfig, shortcut_config::ShortcutConfig,
    window_config::WindowConfig,
};

pub(crate) const DEFAULT_SAVE_DELAY_MS: u64 = 1000;

/// Any non-empty value turns debugging mode on.
pub(crate) const DEBUGGING_ENV: &str = "DICTATE_SHELL_DEBUGGING";

pub(crate) fn default_save_delay_ms() -> u64 {
    DEFAULT_SAVE_DELAY_MS
}
