//! File-backed persistence for [`WindowState`].
//!
//! Reads fail soft: a missing, unreadable or malformed file yields an empty
//! state. Writes go to a temporary sibling first and are renamed into place
//! so a crash mid-write loses at most the latest update.

use crate::{CoreResult, ShellError, WindowState};

use std::{
    fs,
    io::{self, ErrorKind, Write},
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Read/write mechanism for the persisted window record.
pub trait StatePersistence {
    /// Load the persisted state, falling back to an empty one.
    fn load(&self) -> WindowState;

    /// Overwrite the persisted state.
    fn save(&self, state: &WindowState) -> CoreResult<()>;
}

/// Stores [`WindowState`] as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct WindowStateStore {
    path: PathBuf,
}

impl WindowStateStore {
    /// File name used inside the application data directory.
    pub const FILE_NAME: &'static str = "window-state.json";

    /// Store backed by an explicit file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by [`Self::FILE_NAME`] inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[track_caller]
    fn read(&self) -> CoreResult<WindowState> {
        let contents = fs::read_to_string(&self.path).map_err(|source| ShellError::StateIo {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        serde_json::from_str(&contents).map_err(|e| ShellError::StateFormat {
            reason: format!("Failed to parse window state: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl StatePersistence for WindowStateStore {
    #[instrument(skip(self), fields(path = ?self.path))]
    fn load(&self) -> WindowState {
        match self.read() {
            Ok(state) => {
                debug!(has_bounds = state.bounds.is_some(), "Window state loaded");
                state
            }
            Err(ShellError::StateIo { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("No window state yet, starting empty");
                WindowState::default()
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unusable window state");
                WindowState::default()
            }
        }
    }

    #[track_caller]
    #[instrument(skip(self, state), fields(path = ?self.path))]
    fn save(&self, state: &WindowState) -> CoreResult<()> {
        let contents =
            serde_json::to_string_pretty(state).map_err(|e| ShellError::StateFormat {
                reason: format!("Failed to serialize window state: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let io_error = |source| ShellError::StateIo {
            source,
            location: ErrorLocation::from(Location::caller()),
        };

        if let Some(dir) = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        {
            fs::create_dir_all(dir).map_err(io_error)?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        if let Err(source) = write_then_rename(&temp_path, &self.path, contents.as_bytes()) {
            match fs::remove_file(&temp_path) {
                Ok(()) => debug!(temp_path = ?temp_path, "Removed partial window state"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!(error = %e, temp_path = ?temp_path, "Failed to remove temp file"),
            }
            return Err(io_error(source));
        }

        info!(bounds = ?state.bounds, "Window state saved");

        Ok(())
    }
}

/// Write `contents` to `temp_path`, flush it to disk, then move it over `path`.
fn write_then_rename(temp_path: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    {
        let mut temp_file = fs::File::create(temp_path)?;
        temp_file.write_all(contents)?;
        temp_file.sync_all()?;
    }

    fs::rename(temp_path, path)
}
