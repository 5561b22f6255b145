//! Command dispatch table shared by the menu and the shortcut registrar.

use crate::{Command, CoreResult, ShellError};

use std::{collections::HashMap, fmt, panic::Location};

use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};

/// Callback into the content layer for one command.
pub type CommandHandler = Box<dyn Fn()>;

/// Maps each [`Command`] to exactly one handler.
///
/// Built once at startup and shared by reference; everything runs on the
/// event loop thread so handlers need not be `Send`.
#[derive(Default)]
pub struct CommandDispatcher {
    handlers: HashMap<Command, CommandHandler>,
}

impl CommandDispatcher {
    /// Empty dispatch table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` as the dispatch target of `command`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::DuplicateHandler`] if the command is already bound.
    #[track_caller]
    pub fn bind<F>(&mut self, command: Command, handler: F) -> CoreResult<()>
    where
        F: Fn() + 'static,
    {
        if self.handlers.contains_key(&command) {
            return Err(ShellError::DuplicateHandler {
                command: command.name(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.handlers.insert(command, Box::new(handler));
        debug!(command = %command, "Command handler bound");

        Ok(())
    }

    /// Whether `command` has a dispatch target.
    pub fn is_bound(&self, command: Command) -> bool {
        self.handlers.contains_key(&command)
    }

    /// Invoke the handler bound to `command`.
    ///
    /// Returns `false` when nothing is bound.
    #[instrument(skip(self))]
    pub fn dispatch(&self, command: Command) -> bool {
        match self.handlers.get(&command) {
            Some(handler) => {
                handler();
                debug!("Command dispatched");
                true
            }
            None => {
                warn!("No handler bound for command");
                false
            }
        }
    }
}

impl fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("bound", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
