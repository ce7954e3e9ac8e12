use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::bot::router::CommandRouter;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub router: Arc<CommandRouter>,
}

impl Handler {
    pub fn new(router: CommandRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a user invokes a slash command or other interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.router, ctx, interaction).await;
    }
}
