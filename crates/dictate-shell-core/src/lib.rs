//! Dictate-Shell Core Library
//!
//! Host-side logic of the dictate-shell desktop application with no GUI
//! toolkit dependencies: persisted window state, the single-window lifecycle
//! state machine, global shortcut parsing and registration, the application
//! menu tree and the command dispatch table.
//!
//! # Example
//!
//! ```no_run
//! use dictate_shell_core::{Accelerator, CoreResult, parse_descriptor};
//!
//! fn main() -> CoreResult<()> {
//!     let accelerator: Accelerator = parse_descriptor("Ctrl+Shift+S")?;
//!     assert_eq!(accelerator.to_string(), "Control+Shift+S");
//!     Ok(())
//! }
//! ```

mod dispatch;
mod error;
mod lifecycle;
mod menu;
mod shortcut;
mod window_state;

pub use {
    dispatch::{Command, CommandDispatcher, CommandHandler},
    error::{Result as CoreResult, ShellError},
    lifecycle::{
        DEFAULT_SAVE_DELAY, Debouncer, DevtoolsPolicy, LifecycleManager, MainWindow,
        WindowOptions,
    },
    menu::{MenuEntry, MenuRole, MenuSection, MenuTree, RECORDING_ACCELERATOR},
    shortcut::{
        Accelerator, HotkeyBackend, MainKey, Modifiers, ShortcutRegistrar, parse_descriptor,
    },
    window_state::{StatePersistence, WindowBounds, WindowState, WindowStateStore},
};

#[cfg(test)]
mod tests;
