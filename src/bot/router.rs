//! Command routing with automatic deferral of slow handlers.
//!
//! The router maps a command name to its handler and owns the interaction's
//! reply. Each handler runs in its own task; if it has not produced a
//! response within `defer_timeout`, an interim "thinking" acknowledgement is
//! sent so Discord does not time the interaction out, and the eventual
//! response is delivered as a follow-up message instead.

use serenity::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::model::interaction::{InteractionEvent, ResponseData};
use crate::service::discord::DiscordApi;

/// Reply sent when a handler produced no response or crashed.
pub const INTERNAL_ERROR: &str = "internal error";

/// Reply sent for a command name with no registered handler.
pub const UNKNOWN_COMMAND: &str = "unknown command";

/// Handler for a single slash command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles one invocation.
    ///
    /// # Arguments
    /// - `discord` - API handle for this interaction
    /// - `event` - The invocation and its raw options
    ///
    /// # Returns
    /// - `Some(ResponseData)` - Reply to send to the invoking user
    /// - `None` - No usable reply; the router substitutes a generic error
    async fn handle(
        &self,
        discord: Arc<dyn DiscordApi>,
        event: InteractionEvent,
    ) -> Option<ResponseData>;
}

/// Sends replies for a single interaction.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Sends the initial response.
    async fn respond(&self, data: ResponseData) -> Result<(), AppError>;

    /// Acknowledges the interaction with a "thinking" state.
    ///
    /// Discord fixes the visibility of a deferred reply at deferral time, so
    /// the follow-up is shown with the `ephemeral` given here. The router
    /// always defers ephemerally; a handler reply with `ephemeral = false`
    /// therefore stays private when it arrives after the deferral.
    async fn defer(&self, ephemeral: bool) -> Result<(), AppError>;

    /// Sends a follow-up message after a deferral.
    async fn follow_up(&self, data: ResponseData) -> Result<(), AppError>;
}

pub struct CommandRouter {
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
    defer_timeout: Duration,
}

impl CommandRouter {
    /// Creates an empty router.
    ///
    /// # Arguments
    /// - `defer_timeout` - How long a handler may run before the reply is deferred
    pub fn new(defer_timeout: Duration) -> Self {
        Self {
            handlers: HashMap::new(),
            defer_timeout,
        }
    }

    /// Registers `handler` for the command `name`, replacing any previous one.
    pub fn add(&mut self, name: &'static str, handler: Arc<dyn CommandHandler>) -> &mut Self {
        self.handlers.insert(name, handler);
        self
    }

    /// Names of all registered commands.
    pub fn commands(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Dispatches an interaction to its handler and delivers the reply.
    ///
    /// Deferral is a latency mitigation only: whichever of the handler and the
    /// deferral timer finishes first decides whether the reply goes out as the
    /// initial response or as a follow-up.
    ///
    /// # Arguments
    /// - `discord` - API handle passed through to the handler
    /// - `event` - The invocation to route
    /// - `responder` - Transport for the reply
    ///
    /// # Returns
    /// - `Ok(())` - Reply delivered
    /// - `Err(AppError)` - Discord rejected the response, deferral, or follow-up
    pub async fn dispatch(
        &self,
        discord: Arc<dyn DiscordApi>,
        event: InteractionEvent,
        responder: &dyn InteractionResponder,
    ) -> Result<(), AppError> {
        let Some(handler) = self.handlers.get(event.command.as_str()).cloned() else {
            tracing::warn!("Received interaction for unknown command {}", event.command);
            return responder.respond(ResponseData::error(UNKNOWN_COMMAND)).await;
        };

        let command = event.command.clone();
        let mut task = tokio::spawn(async move { handler.handle(discord, event).await });

        tokio::select! {
            result = &mut task => {
                responder.respond(into_response(&command, result)).await
            }
            _ = tokio::time::sleep(self.defer_timeout) => {
                tracing::debug!(
                    "Command {} still running after {:?}, deferring",
                    command,
                    self.defer_timeout
                );
                responder.defer(true).await?;
                let result = task.await;
                responder.follow_up(into_response(&command, result)).await
            }
        }
    }
}

fn into_response(
    command: &str,
    result: Result<Option<ResponseData>, tokio::task::JoinError>,
) -> ResponseData {
    match result {
        Ok(Some(response)) => response,
        Ok(None) => {
            tracing::error!("Command {} produced no response", command);
            ResponseData::error(INTERNAL_ERROR)
        }
        Err(e) => {
            tracing::error!("Command {} handler failed: {}", command, e);
            ResponseData::error(INTERNAL_ERROR)
        }
    }
}
