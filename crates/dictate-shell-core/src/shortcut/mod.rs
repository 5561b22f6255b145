mod accelerator;
mod registrar;

pub use {
    accelerator::{Accelerator, MainKey, Modifiers, parse_descriptor},
    registrar::{HotkeyBackend, ShortcutRegistrar},
};
