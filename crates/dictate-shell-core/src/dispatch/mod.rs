mod command;
mod dispatcher;

pub use {
    command::Command,
    dispatcher::{CommandDispatcher, CommandHandler},
};
