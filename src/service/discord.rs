//! Discord REST operations used by the commands.
//!
//! Handlers talk to Discord through the `DiscordApi` trait rather than holding
//! on to a Serenity `Http` client directly. A handle is created per interaction
//! from the gateway context and passed down explicitly, which keeps handlers
//! free of global state and lets tests substitute a recording fake.

use serenity::all::{ChannelId, CreateWebhook, EditMember, GuildId, Http, UserId, Webhook};
use serenity::async_trait;
use std::sync::Arc;

use crate::error::AppError;
use crate::model::member::{MemberProfile, ProxyMessage};

/// Remote calls the bot makes against the Discord API.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Sets a guild member's nickname.
    async fn set_nickname(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
    ) -> Result<(), AppError>;

    /// Fetches the display identity of a guild member.
    async fn member_profile(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<MemberProfile, AppError>;

    /// Creates a named webhook in a channel.
    async fn create_webhook(
        &self,
        channel_id: ChannelId,
        name: &str,
    ) -> Result<Webhook, AppError>;

    /// Posts one message through a webhook without waiting for it to be stored.
    async fn execute_webhook(
        &self,
        webhook: &Webhook,
        message: &ProxyMessage,
    ) -> Result<(), AppError>;

    /// Deletes a webhook using the bot's own authorization.
    async fn delete_webhook(&self, webhook: &Webhook) -> Result<(), AppError>;
}

/// `DiscordApi` backed by Serenity's HTTP client.
///
/// Cloning shares the underlying client and its rate limiter.
#[derive(Clone)]
pub struct SerenityDiscordApi {
    http: Arc<Http>,
}

impl SerenityDiscordApi {
    /// Creates a new API handle over an existing HTTP client.
    ///
    /// # Arguments
    /// - `http` - Serenity HTTP client, usually taken from the gateway context
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn set_nickname(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
    ) -> Result<(), AppError> {
        guild_id
            .edit_member(&self.http, user_id, EditMember::new().nickname(nickname))
            .await?;

        Ok(())
    }

    async fn member_profile(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<MemberProfile, AppError> {
        let member = self.http.get_member(guild_id, user_id).await?;

        Ok(MemberProfile::from_member(&member))
    }

    async fn create_webhook(
        &self,
        channel_id: ChannelId,
        name: &str,
    ) -> Result<Webhook, AppError> {
        let webhook = channel_id
            .create_webhook(&self.http, CreateWebhook::new(name))
            .await?;

        Ok(webhook)
    }

    async fn execute_webhook(
        &self,
        webhook: &Webhook,
        message: &ProxyMessage,
    ) -> Result<(), AppError> {
        webhook
            .execute(&self.http, false, message.to_execute())
            .await?;

        Ok(())
    }

    async fn delete_webhook(&self, webhook: &Webhook) -> Result<(), AppError> {
        self.http.delete_webhook(webhook.id, None).await?;

        Ok(())
    }
}
