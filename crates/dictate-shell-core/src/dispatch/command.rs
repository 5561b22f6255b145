use std::fmt;

/// Named actions the host pushes to the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Show the settings view.
    OpenSettings,
    /// Toggle voice recording.
    StartStopRecording,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 2] = [Command::OpenSettings, Command::StartStopRecording];

    /// Stable name used on the host/content boundary.
    pub fn name(self) -> &'static str {
        match self {
            Command::OpenSettings => "open-settings",
            Command::StartStopRecording => "start-stop-recording",
        }
    }

    /// Look a command up by its boundary name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
