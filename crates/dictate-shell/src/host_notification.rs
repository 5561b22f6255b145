use dictate_shell_core::Command;

/// Content-level view operations requested through the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Reload the content.
    Reload,
    /// Reload bypassing caches.
    ForceReload,
    /// Reset zoom.
    ResetZoom,
    /// Zoom in.
    ZoomIn,
    /// Zoom out.
    ZoomOut,
    /// Open the debugging panel.
    OpenDevtools,
    /// Toggle the debugging panel.
    ToggleDevtools,
}

/// Fire-and-forget messages pushed from the host to the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostNotification {
    /// A named command from the menu or the global shortcut.
    Command(Command),
    /// A delegated view role.
    View(ViewAction),
}
