//! Dictate-Shell: desktop host for the dictation UI, with a persisted main
//! window, an application menu and one user-configurable global shortcut.

mod app;
mod config;
mod content_bridge;
mod error;
mod host;
mod host_notification;
mod hotkey_backend;
mod logging;
mod main_window;
mod native_menu;
mod recording_state;
mod shell_event;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    content_bridge::{ContentBridge, HostChannel},
    error::{AppError, Result as AppResult},
    host::Host,
    host_notification::{HostNotification, ViewAction},
    hotkey_backend::GlobalHotkeyBackend,
    main_window::TaoMainWindow,
    native_menu::NativeMenu,
    recording_state::RecordingState,
    shell_event::ShellEvent,
};

use crate::config::Config;

use std::time::Instant;

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::mpsc;
use tracing::{error, info};

const LOG_DIR_NAME: &str = "logs";
const NOTIFICATION_BUFFER: usize = 32;

/// Application entry point.
fn main() {
    let data_dir = Config::data_dir();
    let log_dir = data_dir
        .as_ref()
        .ok()
        .map(|dir| dir.join(LOG_DIR_NAME));
    // Dropping the guard flushes the log file, so it lives until exit.
    let _log_guard = logging::init(log_dir.as_deref());

    let data_dir = match data_dir {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to resolve data directory: {:?}", e);
            std::process::exit(1);
        }
    };

    let config_path = match Config::config_path() {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to resolve config path: {:?}", e);
            std::process::exit(1);
        }
    };

    let config = Config::load_or_default(&config_path);

    let menu = match host::application_menu() {
        Ok(menu) => menu,
        Err(e) => {
            error!("Failed to build menu: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut builder = EventLoopBuilder::<ShellEvent>::with_user_event();
    #[cfg(target_os = "windows")]
    {
        use tao::platform::windows::EventLoopBuilderExtWindows;
        builder.with_msg_hook(menu.accelerator_hook());
    }
    let event_loop = builder.build();
    let proxy = event_loop.create_proxy();
    let (notify_tx, notify_rx) = mpsc::channel(NOTIFICATION_BUFFER);

    // Host lives on the main thread - windows, menus and hotkeys are !Send.
    let mut host = match Host::new(&config, &data_dir, menu, notify_tx) {
        Ok(host) => host,
        Err(e) => {
            error!("Failed to create host: {:?}", e);
            std::process::exit(1);
        }
    };

    native_menu::forward_menu_events(proxy.clone());
    hotkey_backend::forward_hotkey_events(proxy.clone());

    // Content layer runs on its own tokio runtime thread and only talks to
    // the host through the event loop proxy and the notification channel.
    let bridge = ContentBridge::new(proxy);
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {:?}", e);
                if let Err(e) = bridge.request_quit() {
                    error!(error = ?e, "Failed to ask host to quit");
                }
                return;
            }
        };

        rt.block_on(async {
            let app = App::new(bridge, notify_rx, config_path, app::open_with_system);
            if let Err(e) = app.run().await {
                error!(error = ?e, "Content layer error");
            }
        });
    });

    info!("Dictate-Shell starting");

    event_loop.run(move |event, target, control_flow| {
        match event {
            Event::NewEvents(StartCause::Init) => {
                if let Err(e) = host.start(target) {
                    error!("Failed to open main window: {:?}", e);
                    *control_flow = ControlFlow::ExitWithCode(1);
                    return;
                }
            }
            Event::WindowEvent {
                window_id, event, ..
            } => host.handle_window_event(window_id, &event, control_flow),
            Event::Reopen { .. } => host.activate(target),
            Event::UserEvent(event) => host.handle_user_event(event, control_flow),
            Event::LoopDestroyed => {
                host.shutdown();
                return;
            }
            _ => {}
        }

        host.poll_save(Instant::now());

        if !matches!(*control_flow, ControlFlow::ExitWithCode(_)) {
            *control_flow = host.control_flow();
        }
    });
}
