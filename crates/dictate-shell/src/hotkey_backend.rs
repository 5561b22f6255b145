//! `global-hotkey` implementation of the shortcut backend.
//!
//! Must live on the thread running the `tao` event loop: that loop pumps the
//! platform messages (`WM_HOTKEY` on Windows) hotkey delivery depends on.

use crate::{AppError, AppResult, ShellEvent};

use dictate_shell_core::{Accelerator, CoreResult, HotkeyBackend, ShellError};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState, hotkey::HotKey};
use tao::event_loop::EventLoopProxy;
use tracing::{debug, info, instrument, warn};

/// Claims at most one OS-level hotkey at a time.
pub struct GlobalHotkeyBackend {
    manager: GlobalHotKeyManager,
    registered: Option<HotKey>,
}

impl GlobalHotkeyBackend {
    /// Create the platform hotkey manager.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyManagerFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            manager,
            registered: None,
        })
    }
}

impl HotkeyBackend for GlobalHotkeyBackend {
    #[track_caller]
    fn register(&mut self, accelerator: &Accelerator) -> CoreResult<u32> {
        let hotkey: HotKey =
            accelerator
                .to_string()
                .parse()
                .map_err(|e| ShellError::RegistrationRejected {
                    accelerator: accelerator.to_string(),
                    reason: format!("Unsupported accelerator: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        self.manager
            .register(hotkey)
            .map_err(|e| ShellError::RegistrationRejected {
                accelerator: accelerator.to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.registered = Some(hotkey);
        debug!(accelerator = %accelerator, hotkey_id = hotkey.id(), "Hotkey claimed");

        Ok(hotkey.id())
    }

    fn unregister_all(&mut self) {
        if let Some(hotkey) = self.registered.take() {
            match self.manager.unregister(hotkey) {
                Ok(()) => debug!(hotkey_id = hotkey.id(), "Hotkey released"),
                Err(e) => warn!(error = %e, hotkey_id = hotkey.id(), "Failed to release hotkey"),
            }
        }
    }
}

/// Forward pressed hotkeys into the event loop.
///
/// `GlobalHotKeyEvent::receiver()` has a blocking `recv()`, so one thread
/// forwards with no polling. It exits once the event loop is gone.
pub fn forward_hotkey_events(proxy: EventLoopProxy<ShellEvent>) {
    std::thread::spawn(move || {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.recv() {
            if !matches!(event.state, HotKeyState::Pressed) {
                continue;
            }
            if proxy.send_event(ShellEvent::Hotkey { id: event.id }).is_err() {
                break;
            }
        }
        info!("Hotkey event forwarder stopped");
    });
}
