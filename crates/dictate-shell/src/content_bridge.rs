//! Content-side surface of the host boundary.
//!
//! The content layer never touches windows or hotkeys directly: it sends a
//! request into the main thread's event loop and awaits the answer on a
//! oneshot channel.

use crate::{AppError, AppResult, ShellEvent};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tokio::sync::oneshot;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Transport from the content layer into the host's event loop.
pub trait HostChannel {
    /// Deliver `event` to the host.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ChannelSendFailed`] once the host has stopped.
    fn send(&self, event: ShellEvent) -> AppResult<()>;
}

impl HostChannel for EventLoopProxy<ShellEvent> {
    #[track_caller]
    fn send(&self, event: ShellEvent) -> AppResult<()> {
        self.send_event(event)
            .map_err(|_| AppError::ChannelSendFailed {
                message: "Event loop closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Requests the content layer can make of the host.
#[derive(Debug, Clone)]
pub struct ContentBridge<H: HostChannel> {
    host: H,
}

impl<H: HostChannel> ContentBridge<H> {
    /// Bridge over `host`.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Ask the host to make `descriptor` the only global shortcut.
    ///
    /// Resolves to `true` when the shortcut is registered (or unbound on
    /// `None`), `false` when it was malformed or refused by the platform.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ChannelSendFailed`] if the host is gone.
    #[track_caller]
    #[instrument(skip(self))]
    pub async fn register_global_shortcut(&self, descriptor: Option<String>) -> AppResult<bool> {
        let request_id = Uuid::new_v4();
        let (respond, response) = oneshot::channel();

        self.host.send(ShellEvent::RegisterGlobalShortcut {
            request_id,
            descriptor,
            respond,
        })?;

        let registered = response.await.map_err(|e| AppError::ChannelSendFailed {
            message: format!("Host dropped shortcut request {}: {}", request_id, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(request_id = %request_id, registered, "Shortcut request answered");

        Ok(registered)
    }

    /// Ask the host to exit through its normal shutdown path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ChannelSendFailed`] if the host is gone.
    pub fn request_quit(&self) -> AppResult<()> {
        self.host.send(ShellEvent::Quit)
    }
}
