//! `tao` window backing the core [`MainWindow`] trait.

use crate::ShellEvent;

use dictate_shell_core::{CoreResult, MainWindow, ShellError, WindowBounds, WindowOptions};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{
    dpi::{LogicalPosition, LogicalSize},
    event_loop::EventLoopWindowTarget,
    window::{Fullscreen, Icon, Window, WindowBuilder, WindowId},
};
use tracing::{debug, warn};

/// The application's top-level window.
pub struct TaoMainWindow {
    window: Window,
}

impl TaoMainWindow {
    /// Build a hidden window; the lifecycle manager shows it once bounds
    /// are applied.
    #[track_caller]
    pub fn build(
        target: &EventLoopWindowTarget<ShellEvent>,
        options: &WindowOptions,
    ) -> CoreResult<Self> {
        let window = WindowBuilder::new()
            .with_title(&options.title)
            .with_inner_size(LogicalSize::new(options.width, options.height))
            .with_window_icon(load_icon())
            .with_visible(false)
            .build(target)
            .map_err(|e| ShellError::WindowCreation {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { window })
    }

    /// Toolkit id used to match window events.
    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// The underlying toolkit window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Enter borderless fullscreen, or leave it.
    pub fn toggle_fullscreen(&self) {
        let next = match self.window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        debug!(fullscreen = next.is_some(), "Toggling fullscreen");
        self.window.set_fullscreen(next);
    }
}

impl MainWindow for TaoMainWindow {
    fn bounds(&self) -> WindowBounds {
        let scale = self.window.scale_factor();
        let position = self
            .window
            .outer_position()
            .ok()
            .map(|p| p.to_logical::<f64>(scale));
        let size = self.window.inner_size().to_logical::<f64>(scale);

        WindowBounds {
            x: position.map(|p| p.x),
            y: position.map(|p| p.y),
            width: Some(size.width),
            height: Some(size.height),
        }
    }

    fn apply_bounds(&mut self, bounds: &WindowBounds) {
        let current = self.bounds();

        if bounds.x.is_some() || bounds.y.is_some() {
            if let (Some(x), Some(y)) = (bounds.x.or(current.x), bounds.y.or(current.y)) {
                self.window.set_outer_position(LogicalPosition::new(x, y));
            }
        }

        if bounds.width.is_some() || bounds.height.is_some() {
            if let (Some(width), Some(height)) = (
                bounds.width.or(current.width),
                bounds.height.or(current.height),
            ) {
                self.window.set_inner_size(LogicalSize::new(width, height));
            }
        }
    }

    fn show(&mut self) {
        self.window.set_visible(true);
        self.window.set_focus();
    }
}

/// Decode the embedded window icon.
///
/// Embedded via include_bytes! so it works regardless of install location.
fn load_icon() -> Option<Icon> {
    let png_bytes: &[u8] = include_bytes!("../resources/icons/icon.png");

    let rgba = match image::load_from_memory(png_bytes) {
        Ok(img) => img.into_rgba8(),
        Err(e) => {
            warn!(error = %e, "Failed to decode embedded icon");
            return None;
        }
    };
    let (width, height) = (rgba.width(), rgba.height());

    match Icon::from_rgba(rgba.into_raw(), width, height) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!(error = %e, "Failed to create icon from RGBA");
            None
        }
    }
}
