//! Main-thread host state.
//!
//! Owns the main window, the menu, and the global shortcut slot. Every
//! handler here runs on the `tao` event loop thread, one event at a time.

use crate::{
    AppResult, GlobalHotkeyBackend, HostNotification, NativeMenu, ShellEvent, TaoMainWindow,
    ViewAction, config::Config,
};

use dictate_shell_core::{
    Command, CommandDispatcher, DevtoolsPolicy, LifecycleManager, MenuRole, MenuTree,
    ShortcutRegistrar, WindowOptions, WindowStateStore,
};

use std::{path::Path, rc::Rc, time::Instant};

use muda::MenuId;
use tao::{
    event::WindowEvent,
    event_loop::{ControlFlow, EventLoopWindowTarget},
    window::WindowId,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Name shown in the title bar and the application menu.
pub const APP_NAME: &str = "Dictate-Shell";

/// Platform whose convention keeps the app alive without windows and puts
/// an application section in the menu bar.
const PRIMARY_PLATFORM: bool = cfg!(target_os = "macos");

/// Native menu for this platform.
///
/// Built before the event loop so Windows can hook its accelerators.
#[track_caller]
pub fn application_menu() -> AppResult<NativeMenu> {
    NativeMenu::build(&MenuTree::build(PRIMARY_PLATFORM, APP_NAME))
}

/// Everything the event loop needs to drive the application.
pub struct Host {
    lifecycle: LifecycleManager<TaoMainWindow, WindowStateStore>,
    registrar: ShortcutRegistrar<GlobalHotkeyBackend>,
    menu: NativeMenu,
    dispatcher: Rc<CommandDispatcher>,
    devtools: DevtoolsPolicy,
    notify_tx: mpsc::Sender<HostNotification>,
}

impl Host {
    /// Build dispatch table and hotkey backend around `menu`. No window yet.
    #[track_caller]
    #[instrument(skip(config, menu, notify_tx))]
    pub fn new(
        config: &Config,
        data_dir: &Path,
        menu: NativeMenu,
        notify_tx: mpsc::Sender<HostNotification>,
    ) -> AppResult<Self> {
        let dispatcher = Rc::new(command_table(&notify_tx)?);
        let registrar =
            ShortcutRegistrar::new(GlobalHotkeyBackend::new()?, Rc::clone(&dispatcher));
        let lifecycle = LifecycleManager::new(
            WindowStateStore::in_dir(data_dir),
            WindowOptions::new(APP_NAME),
            config.save_delay(),
            PRIMARY_PLATFORM,
        );
        let devtools = DevtoolsPolicy::new(config.debugging_enabled());

        info!(
            debugging = devtools.debugging(),
            stay_resident = PRIMARY_PLATFORM,
            "Host initialized"
        );

        Ok(Self {
            lifecycle,
            registrar,
            menu,
            dispatcher,
            devtools,
            notify_tx,
        })
    }

    /// Application ready: install the menu and open the main window.
    #[track_caller]
    pub fn start(&mut self, target: &EventLoopWindowTarget<ShellEvent>) -> AppResult<()> {
        self.menu.attach_to_app();
        self.create_window(target)
    }

    /// Platform "activate": re-create the window if it was closed.
    pub fn activate(&mut self, target: &EventLoopWindowTarget<ShellEvent>) {
        if self.lifecycle.current().is_some() {
            return;
        }

        if let Err(e) = self.create_window(target) {
            error!(error = ?e, "Failed to re-create main window");
        }
    }

    #[track_caller]
    fn create_window(&mut self, target: &EventLoopWindowTarget<ShellEvent>) -> AppResult<()> {
        let window = self
            .lifecycle
            .create(|options| TaoMainWindow::build(target, options))?;

        self.menu.attach_to_window(window.window())?;

        if self.devtools.open_on_create() {
            self.notify(HostNotification::View(ViewAction::OpenDevtools));
        }

        Ok(())
    }

    /// Handle an event addressed to a window.
    pub fn handle_window_event(
        &mut self,
        window_id: WindowId,
        event: &WindowEvent,
        control_flow: &mut ControlFlow,
    ) {
        if self.lifecycle.current().map(TaoMainWindow::id) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::Moved(_) | WindowEvent::Resized(_) => {
                self.lifecycle.on_moved_or_resized(Instant::now());
            }
            WindowEvent::CloseRequested => self.close_window(control_flow),
            _ => {}
        }
    }

    /// Handle a request or forwarded event from another thread.
    pub fn handle_user_event(&mut self, event: ShellEvent, control_flow: &mut ControlFlow) {
        match event {
            ShellEvent::RegisterGlobalShortcut {
                request_id,
                descriptor,
                respond,
            } => {
                let registered = self.registrar.register(descriptor.as_deref());
                info!(request_id = %request_id, registered, "Shortcut request handled");
                if respond.send(registered).is_err() {
                    debug!(request_id = %request_id, "Shortcut requester went away");
                }
            }
            ShellEvent::Menu(id) => self.handle_menu(&id, control_flow),
            ShellEvent::Hotkey { id } => {
                self.registrar.handle_fired(id);
            }
            ShellEvent::Quit => {
                info!("Quit requested by content layer");
                *control_flow = ControlFlow::Exit;
            }
        }
    }

    fn handle_menu(&mut self, id: &MenuId, control_flow: &mut ControlFlow) {
        let Some(entry) = self.menu.entry(id) else {
            debug!(menu_id = ?id, "Menu event for a natively handled item");
            return;
        };

        if let Some(role) = entry.activate(&self.dispatcher) {
            self.perform_role(role, control_flow);
        }
    }

    #[instrument(skip(self, control_flow))]
    fn perform_role(&mut self, role: MenuRole, control_flow: &mut ControlFlow) {
        match role {
            MenuRole::Quit => {
                info!("Quit requested from menu");
                *control_flow = ControlFlow::Exit;
            }
            MenuRole::Close => self.close_window(control_flow),
            MenuRole::ToggleFullscreen => {
                if let Some(window) = self.lifecycle.current() {
                    window.toggle_fullscreen();
                }
            }
            MenuRole::ToggleDevTools => {
                if self.devtools.allow_open() {
                    self.notify(HostNotification::View(ViewAction::ToggleDevtools));
                } else {
                    info!("Developer tools are disabled outside debugging mode");
                }
            }
            MenuRole::Reload => self.notify(HostNotification::View(ViewAction::Reload)),
            MenuRole::ForceReload => {
                self.notify(HostNotification::View(ViewAction::ForceReload))
            }
            MenuRole::ResetZoom => self.notify(HostNotification::View(ViewAction::ResetZoom)),
            MenuRole::ZoomIn => self.notify(HostNotification::View(ViewAction::ZoomIn)),
            MenuRole::ZoomOut => self.notify(HostNotification::View(ViewAction::ZoomOut)),
            MenuRole::About
            | MenuRole::Services
            | MenuRole::Hide
            | MenuRole::HideOthers
            | MenuRole::Unhide => debug!("Role has no handler on this platform"),
        }
    }

    fn close_window(&mut self, control_flow: &mut ControlFlow) {
        if self.lifecycle.close_current() {
            info!("Last window closed, exiting");
            *control_flow = ControlFlow::Exit;
        }
    }

    fn notify(&self, notification: HostNotification) {
        notify(&self.notify_tx, notification);
    }

    /// Persist bounds if the quiet period elapsed.
    pub fn poll_save(&mut self, now: Instant) {
        self.lifecycle.poll_save(now);
    }

    /// Wait for the next event, or until the pending save is due.
    pub fn control_flow(&self) -> ControlFlow {
        match self.lifecycle.next_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        }
    }

    /// Release every OS-level claim before the process exits.
    pub fn shutdown(&mut self) {
        self.registrar.clear();
        info!("Host shut down");
    }
}

/// Push `notification` to the content layer without waiting.
fn notify(tx: &mpsc::Sender<HostNotification>, notification: HostNotification) {
    if let Err(e) = tx.try_send(notification) {
        warn!(error = %e, notification = ?notification, "Content layer did not take notification");
    }
}

/// One handler per command, each forwarding to the content layer.
#[track_caller]
pub(crate) fn command_table(
    notify_tx: &mpsc::Sender<HostNotification>,
) -> AppResult<CommandDispatcher> {
    let mut dispatcher = CommandDispatcher::new();

    for command in Command::ALL {
        let tx = notify_tx.clone();
        dispatcher.bind(command, move || {
            notify(&tx, HostNotification::Command(command))
        })?;
    }

    Ok(dispatcher)
}
