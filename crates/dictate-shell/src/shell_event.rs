use muda::MenuId;
use tokio::sync::oneshot;
use uuid::Uuid;

/// Events delivered to the main thread's event loop.
///
/// The main thread owns every window, menu and hotkey handle, so requests
/// from the content layer and events from the menu and hotkey channels are
/// all funnelled through this enum.
#[derive(Debug)]
pub enum ShellEvent {
    /// Content layer asks to (re)bind the global shortcut.
    RegisterGlobalShortcut {
        /// Correlates the request with its log lines.
        request_id: Uuid,
        /// Descriptor to bind, or `None` to unbind.
        descriptor: Option<String>,
        /// Receives whether the shortcut is now registered.
        respond: oneshot::Sender<bool>,
    },
    /// A native menu item was clicked.
    Menu(MenuId),
    /// A registered global hotkey was pressed.
    Hotkey {
        /// Id of the fired hotkey.
        id: u32,
    },
    /// The content layer cannot continue; leave the event loop.
    Quit,
}
