mod debounce;
mod devtools;
mod manager;

pub use {
    debounce::{DEFAULT_SAVE_DELAY, Debouncer},
    devtools::DevtoolsPolicy,
    manager::{LifecycleManager, MainWindow, WindowOptions},
};
