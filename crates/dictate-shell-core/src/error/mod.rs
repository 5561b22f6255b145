use error_location::ErrorLocation;
use thiserror::Error;

/// Host-shell errors with source location tracking.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading or writing the window state file failed.
    #[error("Window state IO error: {source} {location}")]
    StateIo {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The window state file could not be parsed or serialized.
    #[error("Window state format error: {reason} {location}")]
    StateFormat {
        /// Description of the format problem.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The main key of a shortcut descriptor is not a letter, digit or F1-F19.
    #[error("Invalid shortcut main key: {key:?} {location}")]
    InvalidMainKey {
        /// The rejected main-key token.
        key: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The platform refused to register the accelerator.
    #[error("Shortcut registration rejected for {accelerator}: {reason} {location}")]
    RegistrationRejected {
        /// Accelerator that was refused.
        accelerator: String,
        /// Reason reported by the platform backend.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A command already has a dispatch target.
    #[error("Command {command} already has a handler {location}")]
    DuplicateHandler {
        /// Wire name of the command.
        command: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The main window could not be created.
    #[error("Window creation failed: {reason} {location}")]
    WindowCreation {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`ShellError`].
pub type Result<T> = std::result::Result<T, ShellError>;
