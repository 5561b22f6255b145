use crate::config::default_save_delay_ms;

use serde::{Deserialize, Serialize};

/// Main window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Quiet period after the last move/resize before bounds are saved.
    #[serde(default = "default_save_delay_ms")]
    pub save_delay_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: default_save_delay_ms(),
        }
    }
}
