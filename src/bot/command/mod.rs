//! Slash commands offered by the bot.
//!
//! Each command module exposes its declaration (`spec`) and a handler type
//! implementing `CommandHandler`. `commands` is the full set registered with
//! Discord at startup and `router` wires the matching handlers.

pub mod impersonate;
pub mod rename;

use std::sync::Arc;
use std::time::Duration;
use tokio_util::task::TaskTracker;

use crate::bot::router::CommandRouter;
use crate::model::command::CommandSpec;

use self::{impersonate::ImpersonateCommand, rename::RenameCommand};

/// All commands registered with Discord, in registration order.
pub fn commands() -> Vec<CommandSpec> {
    vec![rename::spec(), impersonate::spec()]
}

/// Builds a router with a handler for every command in `commands`.
///
/// # Arguments
/// - `defer_timeout` - Handler run time after which the reply is deferred
/// - `tasks` - Tracker that detached impersonation sends are spawned on
pub fn router(defer_timeout: Duration, tasks: TaskTracker) -> CommandRouter {
    let mut router = CommandRouter::new(defer_timeout);
    router
        .add(rename::NAME, Arc::new(RenameCommand))
        .add(impersonate::NAME, Arc::new(ImpersonateCommand::new(tasks)));
    router
}

#[cfg(test)]
mod test;
