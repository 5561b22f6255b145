//! Single-slot global shortcut registration.
//!
//! Every registration request first releases whatever is active, so at most
//! one global shortcut is ever claimed. A failed request leaves the slot
//! empty rather than restoring the previous shortcut.

use crate::{Accelerator, Command, CommandDispatcher, CoreResult, parse_descriptor};

use std::rc::Rc;

use tracing::{debug, info, instrument, warn};

/// Platform side of global shortcut registration.
pub trait HotkeyBackend {
    /// Claim `accelerator` system-wide and return the id its events carry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShellError::RegistrationRejected`] when the platform
    /// refuses the claim.
    fn register(&mut self, accelerator: &Accelerator) -> CoreResult<u32>;

    /// Release every claim made through this backend.
    fn unregister_all(&mut self);
}

#[derive(Debug, Clone, Copy)]
struct ActiveShortcut {
    accelerator: Accelerator,
    hotkey_id: u32,
}

/// Owns the one active global shortcut.
///
/// A fired shortcut dispatches [`Command::StartStopRecording`]. Dropping the
/// registrar releases the claim.
pub struct ShortcutRegistrar<B: HotkeyBackend> {
    backend: B,
    dispatcher: Rc<CommandDispatcher>,
    active: Option<ActiveShortcut>,
}

impl<B: HotkeyBackend> ShortcutRegistrar<B> {
    /// Registrar with an empty slot.
    pub fn new(backend: B, dispatcher: Rc<CommandDispatcher>) -> Self {
        Self {
            backend,
            dispatcher,
            active: None,
        }
    }

    /// Replace the active shortcut with `descriptor`.
    ///
    /// `None` or an empty descriptor unbinds and succeeds. Returns `false`
    /// for a malformed main key or a platform refusal, in which case no
    /// shortcut is left registered.
    #[instrument(skip(self))]
    pub fn register(&mut self, descriptor: Option<&str>) -> bool {
        match self.try_register(descriptor) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Global shortcut not registered");
                false
            }
        }
    }

    /// Like [`Self::register`] but reports why a request failed.
    ///
    /// Returns the registered accelerator, or `None` after an unbind.
    #[track_caller]
    pub fn try_register(&mut self, descriptor: Option<&str>) -> CoreResult<Option<Accelerator>> {
        self.clear();

        let descriptor = match descriptor {
            Some(d) if !d.is_empty() => d,
            _ => {
                info!("Global shortcut unbound");
                return Ok(None);
            }
        };

        let accelerator = parse_descriptor(descriptor)?;
        let hotkey_id = self.backend.register(&accelerator)?;

        self.active = Some(ActiveShortcut {
            accelerator,
            hotkey_id,
        });

        info!(
            descriptor,
            accelerator = %accelerator,
            hotkey_id,
            "Global shortcut registered"
        );

        Ok(Some(accelerator))
    }

    /// Currently registered accelerator.
    pub fn active(&self) -> Option<&Accelerator> {
        self.active.as_ref().map(|a| &a.accelerator)
    }

    /// React to a fired hotkey. Returns `true` if it was ours and dispatched.
    pub fn handle_fired(&self, hotkey_id: u32) -> bool {
        match self.active {
            Some(active) if active.hotkey_id == hotkey_id => {
                debug!(accelerator = %active.accelerator, "Global shortcut fired");
                self.dispatcher.dispatch(Command::StartStopRecording)
            }
            _ => false,
        }
    }

    /// Release the active shortcut, if any.
    pub fn clear(&mut self) {
        self.backend.unregister_all();
        if let Some(previous) = self.active.take() {
            debug!(accelerator = %previous.accelerator, "Global shortcut released");
        }
    }
}

impl<B: HotkeyBackend> Drop for ShortcutRegistrar<B> {
    fn drop(&mut self) {
        self.backend.unregister_all();
    }
}
