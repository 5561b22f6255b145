use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// On-screen rectangle of the main window in logical units.
///
/// Every component is optional: whatever was persisted is handed back to the
/// window as-is, with no validation layer in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowBounds {
    /// Left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Content width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Content height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl WindowBounds {
    /// Bounds with every component present.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Position if both coordinates were persisted.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.x.zip(self.y)
    }

    /// Size if both dimensions were persisted.
    pub fn size(&self) -> Option<(f64, f64)> {
        self.width.zip(self.height)
    }
}

/// The single persisted record of the application.
///
/// Keys other than `bounds` are carried through untouched so a save never
/// drops data written by someone else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    /// Last known window bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<WindowBounds>,

    /// Unrecognized top-level keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WindowState {
    /// True when nothing has been persisted yet.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none() && self.extra.is_empty()
    }
}
