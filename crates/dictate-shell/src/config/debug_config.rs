use serde::{Deserialize, Serialize};

/// Debugging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Open the content debugging panel with the window.
    #[serde(default)]
    pub devtools: bool,
}
