//! Declarative application menu.
//!
//! The tree is static apart from one platform branch: the primary platform
//! gets an application section and a `Close` entry under File, every other
//! platform puts `Quit` under File instead.

use crate::{Command, CommandDispatcher};

/// Fixed in-window accelerator for toggling recording.
pub const RECORDING_ACCELERATOR: &str = "CmdOrCtrl+S";

/// Built-in behaviour handled by the host rather than the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuRole {
    /// Application about panel.
    About,
    /// Services submenu.
    Services,
    /// Hide the application.
    Hide,
    /// Hide other applications.
    HideOthers,
    /// Show all applications.
    Unhide,
    /// Exit the application.
    Quit,
    /// Close the main window.
    Close,
    /// Reload the content.
    Reload,
    /// Reload the content bypassing caches.
    ForceReload,
    /// Open or close the debugging panel.
    ToggleDevTools,
    /// Reset content zoom.
    ResetZoom,
    /// Zoom content in.
    ZoomIn,
    /// Zoom content out.
    ZoomOut,
    /// Enter or leave fullscreen.
    ToggleFullscreen,
}

impl MenuRole {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            MenuRole::About => "About",
            MenuRole::Services => "Services",
            MenuRole::Hide => "Hide",
            MenuRole::HideOthers => "Hide Others",
            MenuRole::Unhide => "Show All",
            MenuRole::Quit => "Quit",
            MenuRole::Close => "Close Window",
            MenuRole::Reload => "Reload",
            MenuRole::ForceReload => "Force Reload",
            MenuRole::ToggleDevTools => "Toggle Developer Tools",
            MenuRole::ResetZoom => "Actual Size",
            MenuRole::ZoomIn => "Zoom In",
            MenuRole::ZoomOut => "Zoom Out",
            MenuRole::ToggleFullscreen => "Toggle Full Screen",
        }
    }
}

/// One leaf of a menu section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Built-in role.
    Role(MenuRole),
    /// Named command dispatched to the content layer.
    Command {
        /// Display label.
        label: &'static str,
        /// Command dispatched on click.
        command: Command,
        /// Optional in-window accelerator.
        accelerator: Option<&'static str>,
    },
    /// Visual separator.
    Separator,
}

impl MenuEntry {
    /// Route a click on this entry.
    ///
    /// Commands go through `dispatcher`; roles are handed back for the host
    /// to perform.
    pub fn activate(&self, dispatcher: &CommandDispatcher) -> Option<MenuRole> {
        match self {
            MenuEntry::Role(role) => Some(*role),
            MenuEntry::Command { command, .. } => {
                dispatcher.dispatch(*command);
                None
            }
            MenuEntry::Separator => None,
        }
    }
}

/// A top-level menu with its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    /// Section title.
    pub label: String,
    /// Entries in display order.
    pub entries: Vec<MenuEntry>,
}

/// Complete application menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    /// Sections in display order.
    pub sections: Vec<MenuSection>,
}

impl MenuTree {
    /// Build the menu for the current platform convention.
    pub fn build(is_primary_platform: bool, app_name: &str) -> Self {
        let mut sections = Vec::with_capacity(4);

        if is_primary_platform {
            sections.push(MenuSection {
                label: app_name.to_string(),
                entries: vec![
                    MenuEntry::Role(MenuRole::About),
                    MenuEntry::Separator,
                    MenuEntry::Role(MenuRole::Services),
                    MenuEntry::Separator,
                    MenuEntry::Role(MenuRole::Hide),
                    MenuEntry::Role(MenuRole::HideOthers),
                    MenuEntry::Role(MenuRole::Unhide),
                    MenuEntry::Separator,
                    MenuEntry::Role(MenuRole::Quit),
                ],
            });
        }

        sections.push(MenuSection {
            label: "File".to_string(),
            entries: vec![MenuEntry::Role(if is_primary_platform {
                MenuRole::Close
            } else {
                MenuRole::Quit
            })],
        });

        sections.push(MenuSection {
            label: "View".to_string(),
            entries: vec![
                MenuEntry::Role(MenuRole::Reload),
                MenuEntry::Role(MenuRole::ForceReload),
                MenuEntry::Role(MenuRole::ToggleDevTools),
                MenuEntry::Separator,
                MenuEntry::Role(MenuRole::ResetZoom),
                MenuEntry::Role(MenuRole::ZoomIn),
                MenuEntry::Role(MenuRole::ZoomOut),
                MenuEntry::Separator,
                MenuEntry::Role(MenuRole::ToggleFullscreen),
                MenuEntry::Separator,
                MenuEntry::Command {
                    label: "Settings",
                    command: Command::OpenSettings,
                    accelerator: None,
                },
            ],
        });

        sections.push(MenuSection {
            label: "Actions".to_string(),
            entries: vec![MenuEntry::Command {
                label: "Start/stop voice recording",
                command: Command::StartStopRecording,
                accelerator: Some(RECORDING_ACCELERATOR),
            }],
        });

        Self { sections }
    }

    /// Every entry across all sections, in display order.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Commands reachable from the menu.
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.entries().filter_map(|entry| match entry {
            MenuEntry::Command { command, .. } => Some(*command),
            _ => None,
        })
    }
}
