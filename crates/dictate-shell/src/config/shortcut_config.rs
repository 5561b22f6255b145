use serde::{Deserialize, Serialize};

/// Global shortcut configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    /// Shortcut descriptor such as `Ctrl+Shift+R` (None = no shortcut).
    #[serde(default)]
    pub descriptor: Option<String>,
}
