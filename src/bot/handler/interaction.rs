//! Interaction event handler.
//!
//! Converts Serenity slash command interactions into `InteractionEvent`s,
//! routes them, and sends the router's replies back through the interaction
//! endpoints. Component, autocomplete and modal interactions are ignored since
//! the bot declares none.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Http, Interaction,
};
use serenity::async_trait;
use std::sync::Arc;

use crate::bot::router::{CommandRouter, InteractionResponder};
use crate::error::AppError;
use crate::model::interaction::{InteractionEvent, ResponseData};
use crate::service::discord::{DiscordApi, SerenityDiscordApi};

/// Replies to a single slash command interaction.
pub struct CommandResponder<'a> {
    http: Arc<Http>,
    command: &'a CommandInteraction,
}

impl<'a> CommandResponder<'a> {
    pub fn new(http: Arc<Http>, command: &'a CommandInteraction) -> Self {
        Self { http, command }
    }
}

#[async_trait]
impl InteractionResponder for CommandResponder<'_> {
    async fn respond(&self, data: ResponseData) -> Result<(), AppError> {
        self.command
            .create_response(&self.http, CreateInteractionResponse::Message(data.to_message()))
            .await?;

        Ok(())
    }

    async fn defer(&self, ephemeral: bool) -> Result<(), AppError> {
        let message = CreateInteractionResponseMessage::new().ephemeral(ephemeral);
        self.command
            .create_response(&self.http, CreateInteractionResponse::Defer(message))
            .await?;

        Ok(())
    }

    async fn follow_up(&self, data: ResponseData) -> Result<(), AppError> {
        self.command
            .create_followup(&self.http, data.to_followup())
            .await?;

        Ok(())
    }
}

/// Handles the interaction_create event.
///
/// Creates a Discord API handle from the context for this interaction only and
/// passes it to the router. Failures to deliver the reply are logged; the
/// invoking user's client will show the interaction as failed.
///
/// # Arguments
/// - `router` - Command router shared by all interactions
/// - `ctx` - Discord context providing the HTTP client
/// - `interaction` - The received interaction
pub async fn handle_interaction(router: &CommandRouter, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let event = InteractionEvent::from(&command);

    tracing::debug!(
        "Command {} invoked by {} in channel {}",
        event.command,
        command.user.id,
        event.channel_id
    );

    let discord: Arc<dyn DiscordApi> = Arc::new(SerenityDiscordApi::new(ctx.http.clone()));
    let responder = CommandResponder::new(ctx.http.clone(), &command);

    if let Err(e) = router.dispatch(discord, event, &responder).await {
        tracing::error!("Failed to respond to command {}: {}", command.data.name, e);
    }
}
