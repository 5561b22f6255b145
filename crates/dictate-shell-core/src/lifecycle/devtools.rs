/// Whether the content debugging panel may be shown.
///
/// With debugging enabled the panel opens with the window. Otherwise every
/// attempt to open it is refused on the spot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevtoolsPolicy {
    debugging: bool,
}

impl DevtoolsPolicy {
    /// Policy for the given debugging mode.
    pub fn new(debugging: bool) -> Self {
        Self { debugging }
    }

    /// Debugging mode.
    pub fn debugging(&self) -> bool {
        self.debugging
    }

    /// Open the panel as soon as the main window exists.
    pub fn open_on_create(&self) -> bool {
        self.debugging
    }

    /// Decide an attempt to open the panel.
    pub fn allow_open(&self) -> bool {
        self.debugging
    }
}
