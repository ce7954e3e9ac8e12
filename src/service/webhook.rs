//! Temporary webhook relay for impersonated messages.
//!
//! A relay creates a webhook in the target channel, sends exactly one message
//! through it, then deletes the webhook. It runs detached from the interaction
//! that triggered it: nothing awaits its outcome and its failures are only
//! logged.

use serenity::all::ChannelId;
use std::sync::Arc;

use crate::model::member::ProxyMessage;
use crate::service::discord::DiscordApi;

/// Name given to every temporary webhook.
pub const WEBHOOK_NAME: &str = "troll";

/// Outcome of a single relay, used for logging and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Message sent and webhook removed.
    Delivered,
    /// Webhook could not be created; nothing was sent or left behind.
    CreateFailed,
    /// Webhook created but the message was rejected. The webhook was still
    /// cleaned up (or cleanup was attempted).
    SendFailed,
}

pub struct WebhookRelay {
    discord: Arc<dyn DiscordApi>,
}

impl WebhookRelay {
    /// Creates a relay that talks to Discord through `discord`.
    pub fn new(discord: Arc<dyn DiscordApi>) -> Self {
        Self { discord }
    }

    /// Posts `message` to `channel_id` through a throwaway webhook.
    ///
    /// Deletion is attempted whenever creation succeeded, regardless of
    /// whether the send went through. A failed deletion is logged and
    /// otherwise ignored.
    ///
    /// # Arguments
    /// - `channel_id` - Channel to post into
    /// - `message` - Content and identity to post under
    ///
    /// # Returns
    /// - `RelayOutcome` - What happened; callers typically discard this
    pub async fn relay(&self, channel_id: ChannelId, message: ProxyMessage) -> RelayOutcome {
        let webhook = match self.discord.create_webhook(channel_id, WEBHOOK_NAME).await {
            Ok(webhook) => webhook,
            Err(e) => {
                tracing::error!(
                    "Failed to create webhook in channel {}: {}",
                    channel_id,
                    e
                );
                return RelayOutcome::CreateFailed;
            }
        };

        let outcome = match self.discord.execute_webhook(&webhook, &message).await {
            Ok(()) => {
                tracing::debug!(
                    "Relayed message as {} in channel {}",
                    message.username,
                    channel_id
                );
                RelayOutcome::Delivered
            }
            Err(e) => {
                tracing::error!(
                    "Failed to send message through webhook {}: {}",
                    webhook.id,
                    e
                );
                RelayOutcome::SendFailed
            }
        };

        if let Err(e) = self.discord.delete_webhook(&webhook).await {
            tracing::warn!("Failed to delete webhook {}: {}", webhook.id, e);
        }

        outcome
    }
}
