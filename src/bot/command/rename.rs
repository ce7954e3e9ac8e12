//! `/troll_rename` - change a member's nickname.

use serenity::all::UserId;
use serenity::async_trait;
use std::sync::Arc;

use crate::bot::router::CommandHandler;
use crate::error::command::CommandError;
use crate::model::command::{CommandSpec, OptionKind, OptionSpec};
use crate::model::interaction::{InteractionEvent, ResponseData};
use crate::service::discord::DiscordApi;

pub const NAME: &str = "troll_rename";

pub fn spec() -> CommandSpec {
    CommandSpec {
        name: NAME,
        description: "epic trolling",
        options: vec![
            OptionSpec::required("member", "who's name should be changed", OptionKind::User),
            OptionSpec::required("name", "what's the new name", OptionKind::String),
        ],
    }
}

/// Decoded options of `/troll_rename`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    pub member: UserId,
    pub name: String,
}

impl RenameOptions {
    pub fn parse(event: &InteractionEvent) -> Result<Self, CommandError> {
        Ok(Self {
            member: event.required_user("member")?,
            name: event.required_string("name")?,
        })
    }
}

pub struct RenameCommand;

#[async_trait]
impl CommandHandler for RenameCommand {
    async fn handle(
        &self,
        discord: Arc<dyn DiscordApi>,
        event: InteractionEvent,
    ) -> Option<ResponseData> {
        let options = match RenameOptions::parse(&event) {
            Ok(options) => options,
            Err(e) => return Some(ResponseData::error(e)),
        };
        let guild_id = match event.require_guild() {
            Ok(guild_id) => guild_id,
            Err(e) => return Some(ResponseData::error(e)),
        };

        if let Err(e) = discord
            .set_nickname(guild_id, options.member, &options.name)
            .await
        {
            tracing::warn!(
                "Failed to rename member {} in guild {}: {}",
                options.member,
                guild_id,
                e
            );
            return Some(ResponseData::error(e));
        }

        tracing::info!(
            "Renamed member {} in guild {} to {}",
            options.member,
            guild_id,
            options.name
        );

        Some(ResponseData::ephemeral(format!(
            "set the nickname to {}",
            options.name
        )))
    }
}
