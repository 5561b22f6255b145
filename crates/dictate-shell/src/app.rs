use crate::{
    AppResult, ContentBridge, HostChannel, HostNotification, RecordingState, config::Config,
};

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use dictate_shell_core::Command;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Opens the settings file for the user.
pub type SettingsOpener = fn(&Path) -> std::io::Result<()>;

/// Opens `path` with the system's default handler.
pub fn open_with_system(path: &Path) -> std::io::Result<()> {
    open::that(path)
}

/// Outcome of the last shortcut request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutStatus {
    /// Descriptor that was requested.
    pub descriptor: Option<String>,
    /// Whether the host registered it.
    pub bound: bool,
}

/// Minimal content layer.
///
/// Runs on the async runtime thread. Reacts to host notifications and asks
/// the host to bind the configured global shortcut through the
/// [`ContentBridge`].
pub struct App<H: HostChannel> {
    pub(crate) bridge: ContentBridge<H>,
    pub(crate) notifications: mpsc::Receiver<HostNotification>,
    pub(crate) config_path: PathBuf,
    pub(crate) open_settings: SettingsOpener,
    pub(crate) shortcut: Option<ShortcutStatus>,
    pub(crate) recording: RecordingState,
}

impl<H: HostChannel> App<H> {
    /// Content layer reading its settings from `config_path`.
    pub fn new(
        bridge: ContentBridge<H>,
        notifications: mpsc::Receiver<HostNotification>,
        config_path: PathBuf,
        open_settings: SettingsOpener,
    ) -> Self {
        Self {
            bridge,
            notifications,
            config_path,
            open_settings,
            shortcut: None,
            recording: RecordingState::Idle,
        }
    }

    /// Run until the host closes the notification channel.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Content layer starting");

        self.sync_shortcut().await?;

        while let Some(notification) = self.notifications.recv().await {
            self.handle_notification(notification).await?;
        }

        info!("Notification channel closed, content layer stopping");

        Ok(())
    }

    #[instrument(skip(self))]
    pub(crate) async fn handle_notification(
        &mut self,
        notification: HostNotification,
    ) -> AppResult<()> {
        match notification {
            HostNotification::Command(Command::OpenSettings) => self.open_settings().await?,
            HostNotification::Command(Command::StartStopRecording) => {
                self.toggle_recording();
            }
            HostNotification::View(action) => {
                info!(action = ?action, "View action");
            }
        }

        Ok(())
    }

    /// Re-apply the configured shortcut, then open the settings file.
    ///
    /// Reopening settings is how the user retries a shortcut that failed.
    async fn open_settings(&mut self) -> AppResult<()> {
        self.sync_shortcut().await?;

        if let Err(e) = (self.open_settings)(&self.config_path) {
            warn!(error = %e, config_path = ?self.config_path, "Failed to open settings");
        } else {
            info!("Opened settings");
        }

        Ok(())
    }

    /// Ask the host to bind the configured shortcut if it changed or the
    /// last attempt failed.
    ///
    /// # Errors
    ///
    /// Only a closed host channel is an error; config problems are logged.
    pub(crate) async fn sync_shortcut(&mut self) -> AppResult<()> {
        let descriptor = match Config::load_from(&self.config_path) {
            Ok(config) => config.shortcut.descriptor,
            Err(e) => {
                error!(error = ?e, "Failed to load config, keeping current shortcut");
                return Ok(());
            }
        };

        let up_to_date = self
            .shortcut
            .as_ref()
            .is_some_and(|status| status.bound && status.descriptor == descriptor);
        if up_to_date {
            return Ok(());
        }

        let bound = self
            .bridge
            .register_global_shortcut(descriptor.clone())
            .await?;

        if bound {
            info!(descriptor = ?descriptor, "Global shortcut active");
        } else {
            warn!(
                descriptor = ?descriptor,
                "Global shortcut rejected, choose another one in settings"
            );
        }

        self.shortcut = Some(ShortcutStatus { descriptor, bound });

        Ok(())
    }

    pub(crate) fn toggle_recording(&mut self) -> RecordingState {
        self.recording = match self.recording {
            RecordingState::Idle => {
                let session_id = Uuid::new_v4();
                info!(session_id = %session_id, "Recording started");
                RecordingState::Recording {
                    started_at: Instant::now(),
                    session_id,
                }
            }
            RecordingState::Recording {
                started_at,
                session_id,
            } => {
                info!(
                    session_id = %session_id,
                    duration_ms = started_at.elapsed().as_millis(),
                    "Recording stopped"
                );
                RecordingState::Idle
            }
        };

        self.recording
    }
}
