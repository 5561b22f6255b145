//! Lifecycle of the single main window.
//!
//! The manager owns an optional window handle, so at most one window exists.
//! Move and resize events restart a [`Debouncer`]; once the window has been
//! idle for the quiet period its current bounds are written through the
//! [`StatePersistence`] store.

use crate::{CoreResult, Debouncer, StatePersistence, WindowBounds, WindowState};

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

const DEFAULT_WIDTH: f64 = 1000.0;
const DEFAULT_HEIGHT: f64 = 600.0;

/// What the manager needs from a toolkit window.
pub trait MainWindow {
    /// Current bounds in logical units.
    fn bounds(&self) -> WindowBounds;

    /// Apply persisted bounds. Absent components leave the window unchanged.
    fn apply_bounds(&mut self, bounds: &WindowBounds);

    /// Make the window visible.
    fn show(&mut self);
}

/// Construction parameters for the main window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    /// Window title.
    pub title: String,
    /// Initial content width.
    pub width: f64,
    /// Initial content height.
    pub height: f64,
}

impl WindowOptions {
    /// Default-sized window with `title`.
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Owns the main window and its persisted state.
pub struct LifecycleManager<W: MainWindow, S: StatePersistence> {
    store: S,
    state: WindowState,
    window: Option<W>,
    save_timer: Debouncer,
    options: WindowOptions,
    stay_resident: bool,
}

impl<W: MainWindow, S: StatePersistence> LifecycleManager<W, S> {
    /// Manager with no window yet.
    ///
    /// `stay_resident` keeps the process alive after the window closes.
    pub fn new(store: S, options: WindowOptions, save_delay: Duration, stay_resident: bool) -> Self {
        Self {
            store,
            state: WindowState::default(),
            window: None,
            save_timer: Debouncer::new(save_delay),
            options,
            stay_resident,
        }
    }

    /// Create and show the main window unless one already exists.
    ///
    /// Loads the persisted state, builds the window through `build` and
    /// applies the persisted bounds.
    ///
    /// # Errors
    ///
    /// Propagates errors from `build`; the manager stays windowless.
    #[instrument(skip(self, build))]
    pub fn create<F>(&mut self, build: F) -> CoreResult<&mut W>
    where
        F: FnOnce(&WindowOptions) -> CoreResult<W>,
    {
        if let Some(existing) = self.window.take() {
            debug!("Main window already exists");
            return Ok(self.window.insert(existing));
        }

        self.state = self.store.load();

        let mut window = build(&self.options)?;
        if let Some(bounds) = self.state.bounds {
            window.apply_bounds(&bounds);
            debug!(bounds = ?bounds, "Restored window bounds");
        }
        window.show();

        info!("Main window created");

        Ok(self.window.insert(window))
    }

    /// Handle the platform "activate" signal. Returns whether a window was created.
    ///
    /// # Errors
    ///
    /// Propagates errors from `build`.
    pub fn activate<F>(&mut self, build: F) -> CoreResult<bool>
    where
        F: FnOnce(&WindowOptions) -> CoreResult<W>,
    {
        if self.window.is_some() {
            return Ok(false);
        }

        self.create(build)?;
        Ok(true)
    }

    /// The main window, if it exists.
    pub fn current(&self) -> Option<&W> {
        self.window.as_ref()
    }

    /// Mutable access to the main window, if it exists.
    pub fn current_mut(&mut self) -> Option<&mut W> {
        self.window.as_mut()
    }

    /// Drop the main window.
    ///
    /// A pending save is flushed first so the last move is not lost. Returns
    /// `true` when the process should exit.
    #[instrument(skip(self))]
    pub fn close_current(&mut self) -> bool {
        if self.save_timer.cancel() {
            self.persist_bounds();
        }

        if self.window.take().is_some() {
            info!("Main window closed");
        }

        !self.stay_resident
    }

    /// Restart the quiet period after a move or resize.
    pub fn on_moved_or_resized(&mut self, now: Instant) {
        if self.window.is_some() {
            self.save_timer.schedule(now);
        }
    }

    /// When the event loop must next wake to service the save timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.save_timer.deadline()
    }

    /// Persist the current bounds if the quiet period has elapsed.
    ///
    /// Returns whether a save was attempted.
    pub fn poll_save(&mut self, now: Instant) -> bool {
        if !self.save_timer.fire_if_due(now) {
            return false;
        }

        self.persist_bounds();
        true
    }

    fn persist_bounds(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        self.state.bounds = Some(window.bounds());

        if let Err(e) = self.store.save(&self.state) {
            warn!(error = %e, "Dropping window state save");
        }
    }

    /// State as last loaded or saved.
    pub fn state(&self) -> &WindowState {
        &self.state
    }
}
