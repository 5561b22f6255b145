//! Native rendering of the application [`MenuTree`].
//!
//! Roles the platform implements itself become predefined items; every
//! other entry becomes a plain item whose id maps back to its [`MenuEntry`].

use crate::{AppError, AppResult, ShellEvent};

use dictate_shell_core::{MenuEntry, MenuRole, MenuTree};

use std::{collections::HashMap, panic::Location};

use error_location::ErrorLocation;
use muda::{
    Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem, Submenu, accelerator::Accelerator,
};
use tao::{event_loop::EventLoopProxy, window::Window};
use tracing::{debug, info, instrument};

/// Application menu plus the id → entry routing table.
pub struct NativeMenu {
    menu: Menu,
    entries: HashMap<MenuId, MenuEntry>,
}

impl NativeMenu {
    /// Build native menus for every section of `tree`.
    #[track_caller]
    #[instrument(skip(tree))]
    pub fn build(tree: &MenuTree) -> AppResult<Self> {
        let menu = Menu::new();
        let mut entries = HashMap::new();

        for section in &tree.sections {
            let submenu = Submenu::new(&section.label, true);

            for entry in &section.entries {
                Self::append_entry(&submenu, entry, &mut entries)?;
            }

            menu.append(&submenu).map_err(|e| AppError::MenuError {
                reason: format!("Failed to add {} menu: {}", section.label, e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        info!(items = entries.len(), "Application menu built");

        Ok(Self { menu, entries })
    }

    #[track_caller]
    fn append_entry(
        submenu: &Submenu,
        entry: &MenuEntry,
        entries: &mut HashMap<MenuId, MenuEntry>,
    ) -> AppResult<()> {
        let appended = match entry {
            MenuEntry::Separator => submenu.append(&PredefinedMenuItem::separator()),
            MenuEntry::Role(role) => match predefined(*role) {
                Some(item) => submenu.append(&item),
                None => {
                    let item = MenuItem::new(role.label(), true, None);
                    entries.insert(item.id().clone(), entry.clone());
                    submenu.append(&item)
                }
            },
            MenuEntry::Command {
                label,
                accelerator,
                ..
            } => {
                let accelerator = accelerator
                    .map(|a| a.parse::<Accelerator>())
                    .transpose()
                    .map_err(|e| AppError::MenuError {
                        reason: format!("Invalid accelerator for {}: {}", label, e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                let item = MenuItem::new(*label, true, accelerator);
                entries.insert(item.id().clone(), entry.clone());
                submenu.append(&item)
            }
        };

        appended.map_err(|e| AppError::MenuError {
            reason: format!("Failed to add menu entry: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Entry behind a clicked item id.
    pub fn entry(&self, id: &MenuId) -> Option<&MenuEntry> {
        self.entries.get(id)
    }

    /// Message hook that turns key presses into menu accelerator events.
    ///
    /// Win32 only fires menu accelerators when the message loop translates
    /// them, so this must be installed on the event loop builder.
    #[cfg(target_os = "windows")]
    pub fn accelerator_hook(&self) -> impl FnMut(*const std::ffi::c_void) -> bool + use<> {
        use windows::Win32::UI::WindowsAndMessaging::{HACCEL, MSG, TranslateAcceleratorW};

        let menu = self.menu.clone();
        move |msg| {
            let msg = msg as *const MSG;
            // SAFETY: tao hands the hook a pointer to the message being dispatched.
            unsafe { TranslateAcceleratorW((*msg).hwnd, HACCEL(menu.haccel() as _), msg) != 0 }
        }
    }

    /// Install as the application-wide menu bar where the platform has one.
    pub fn attach_to_app(&self) {
        #[cfg(target_os = "macos")]
        {
            self.menu.init_for_nsapp();
            debug!("Menu installed on NSApp");
        }
    }

    /// Attach to `window` on platforms with per-window menu bars.
    #[track_caller]
    #[allow(unused_variables)]
    pub fn attach_to_window(&self, window: &Window) -> AppResult<()> {
        #[cfg(target_os = "windows")]
        {
            use tao::platform::windows::WindowExtWindows;
            // SAFETY: the handle belongs to a live window owned by this thread.
            unsafe { self.menu.init_for_hwnd(window.hwnd() as isize) }.map_err(|e| {
                AppError::MenuError {
                    reason: format!("Failed to attach menu to window: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;
        }

        #[cfg(target_os = "linux")]
        {
            use tao::platform::unix::WindowExtUnix;
            self.menu
                .init_for_gtk_window(window.gtk_window(), window.default_vbox())
                .map_err(|e| AppError::MenuError {
                    reason: format!("Failed to attach menu to window: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        debug!("Menu attached to window");

        Ok(())
    }
}

/// Native item for roles the platform performs on its own.
fn predefined(role: MenuRole) -> Option<PredefinedMenuItem> {
    match role {
        MenuRole::About => Some(PredefinedMenuItem::about(None, None)),
        MenuRole::Services => Some(PredefinedMenuItem::services(None)),
        MenuRole::Hide => Some(PredefinedMenuItem::hide(None)),
        MenuRole::HideOthers => Some(PredefinedMenuItem::hide_others(None)),
        MenuRole::Unhide => Some(PredefinedMenuItem::show_all(None)),
        #[cfg(target_os = "macos")]
        MenuRole::Quit => Some(PredefinedMenuItem::quit(None)),
        _ => None,
    }
}

/// Forward menu clicks into the event loop.
pub fn forward_menu_events(proxy: EventLoopProxy<ShellEvent>) {
    std::thread::spawn(move || {
        let receiver = MenuEvent::receiver();
        while let Ok(event) = receiver.recv() {
            if proxy.send_event(ShellEvent::Menu(event.id)).is_err() {
                break;
            }
        }
        info!("Menu event forwarder stopped");
    });
}
