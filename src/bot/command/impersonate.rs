//! `/troll_impersonate` - post a message as another member.
//!
//! The member lookup happens while the interaction waits so that an unknown
//! member is reported to the user. The post itself is handed to a detached
//! `WebhookRelay` task: the user gets `done` immediately and is never told
//! whether the message actually went out.

use serenity::all::UserId;
use serenity::async_trait;
use std::sync::Arc;
use tokio_util::task::TaskTracker;

use crate::bot::router::CommandHandler;
use crate::error::command::CommandError;
use crate::model::command::{CommandSpec, OptionKind, OptionSpec};
use crate::model::interaction::{InteractionEvent, ResponseData};
use crate::model::member::ProxyMessage;
use crate::service::discord::DiscordApi;
use crate::service::webhook::WebhookRelay;

pub const NAME: &str = "troll_impersonate";

/// Acknowledgement sent once the relay has been started.
pub const DONE: &str = "done";

pub fn spec() -> CommandSpec {
    CommandSpec {
        name: NAME,
        description: "epic trolling",
        options: vec![
            OptionSpec::required("member", "who's should I impersonate", OptionKind::User),
            OptionSpec::required("message", "what should I say", OptionKind::String),
        ],
    }
}

/// Decoded options of `/troll_impersonate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpersonateOptions {
    pub member: UserId,
    pub message: String,
}

impl ImpersonateOptions {
    pub fn parse(event: &InteractionEvent) -> Result<Self, CommandError> {
        Ok(Self {
            member: event.required_user("member")?,
            message: event.required_string("message")?,
        })
    }
}

pub struct ImpersonateCommand {
    /// Detached relays, tracked only so shutdown can wait for them briefly.
    tasks: TaskTracker,
}

impl ImpersonateCommand {
    pub fn new(tasks: TaskTracker) -> Self {
        Self { tasks }
    }
}

#[async_trait]
impl CommandHandler for ImpersonateCommand {
    async fn handle(
        &self,
        discord: Arc<dyn DiscordApi>,
        event: InteractionEvent,
    ) -> Option<ResponseData> {
        let options = match ImpersonateOptions::parse(&event) {
            Ok(options) => options,
            Err(e) => return Some(ResponseData::error(e)),
        };
        let guild_id = match event.require_guild() {
            Ok(guild_id) => guild_id,
            Err(e) => return Some(ResponseData::error(e)),
        };

        let profile = match discord.member_profile(guild_id, options.member).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(
                    "Failed to get member {} in guild {}: {}",
                    options.member,
                    guild_id,
                    e
                );
                return Some(ResponseData::error(e));
            }
        };

        let channel_id = event.channel_id;
        let message = ProxyMessage::new(options.message, profile);
        let relay = WebhookRelay::new(discord);

        self.tasks.spawn(async move {
            relay.relay(channel_id, message).await;
        });

        Some(ResponseData::ephemeral(DONE))
    }
}
