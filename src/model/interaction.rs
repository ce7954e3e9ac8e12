//! Request-scoped interaction data.
//!
//! An `InteractionEvent` lives for one dispatch; a `ResponseData` is built by
//! a handler, handed to the transport once, and dropped.

use std::fmt::Display;

use serenity::all::{
    ChannelId, CommandDataOptionValue, CommandInteraction, CreateAllowedMentions,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, GuildId, UserId,
};

use crate::error::command::CommandError;
use crate::model::command::OptionKind;

/// Raw value of a single command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    User(UserId),
    String(String),
    /// Any option type the bot does not declare.
    Unsupported,
}

impl From<&CommandDataOptionValue> for OptionValue {
    fn from(value: &CommandDataOptionValue) -> Self {
        match value {
            CommandDataOptionValue::User(id) => Self::User(*id),
            CommandDataOptionValue::String(s) => Self::String(s.clone()),
            _ => Self::Unsupported,
        }
    }
}

/// A single slash command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    /// Name of the invoked command.
    pub command: String,
    /// Guild the command was invoked in, `None` for direct messages.
    pub guild_id: Option<GuildId>,
    /// Channel the command was invoked in.
    pub channel_id: ChannelId,
    /// Top-level options in the order Discord sent them.
    pub options: Vec<(String, OptionValue)>,
}

impl InteractionEvent {
    /// Looks up a required user option by name.
    ///
    /// # Returns
    /// - `Ok(UserId)` - Option present with a user value
    /// - `Err(CommandError::MissingOption)` - Option absent
    /// - `Err(CommandError::WrongOptionKind)` - Option present with another type
    pub fn required_user(&self, name: &'static str) -> Result<UserId, CommandError> {
        match self.option(name)? {
            OptionValue::User(id) => Ok(*id),
            _ => Err(wrong_kind(name, OptionKind::User)),
        }
    }

    /// Looks up a required string option by name.
    ///
    /// # Returns
    /// - `Ok(String)` - Option present with a string value
    /// - `Err(CommandError::MissingOption)` - Option absent
    /// - `Err(CommandError::WrongOptionKind)` - Option present with another type
    pub fn required_string(&self, name: &'static str) -> Result<String, CommandError> {
        match self.option(name)? {
            OptionValue::String(s) => Ok(s.clone()),
            _ => Err(wrong_kind(name, OptionKind::String)),
        }
    }

    /// Guild the command was invoked in.
    ///
    /// # Returns
    /// - `Ok(GuildId)` - Invoked within a guild
    /// - `Err(CommandError::GuildOnly)` - Invoked from a direct message
    pub fn require_guild(&self) -> Result<GuildId, CommandError> {
        self.guild_id.ok_or(CommandError::GuildOnly)
    }

    fn option(&self, name: &'static str) -> Result<&OptionValue, CommandError> {
        self.options
            .iter()
            .find(|(option_name, _)| option_name == name)
            .map(|(_, value)| value)
            .ok_or(CommandError::MissingOption(name))
    }
}

fn wrong_kind(name: &'static str, expected: OptionKind) -> CommandError {
    CommandError::WrongOptionKind {
        name,
        expected: expected.describe(),
    }
}

impl From<&CommandInteraction> for InteractionEvent {
    fn from(command: &CommandInteraction) -> Self {
        Self {
            command: command.data.name.clone(),
            guild_id: command.guild_id,
            channel_id: command.channel_id,
            options: command
                .data
                .options
                .iter()
                .map(|option| (option.name.clone(), OptionValue::from(&option.value)))
                .collect(),
        }
    }
}

/// Reply to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseData {
    pub content: String,
    /// Only the invoking user can see the reply.
    pub ephemeral: bool,
    /// Do not ping anyone mentioned in `content`.
    pub suppress_mentions: bool,
}

impl ResponseData {
    /// Private reply that mentions nobody.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
            suppress_mentions: true,
        }
    }

    /// Private error reply embedding the error's description.
    pub fn error(err: impl Display) -> Self {
        Self::ephemeral(format!("**Error:** {}", err))
    }

    /// Builds the initial interaction response message.
    pub fn to_message(&self) -> CreateInteractionResponseMessage {
        let mut message = CreateInteractionResponseMessage::new()
            .content(self.content.clone())
            .ephemeral(self.ephemeral);
        if self.suppress_mentions {
            message = message.allowed_mentions(CreateAllowedMentions::new());
        }
        message
    }

    /// Builds a follow-up message for an interaction that was deferred.
    pub fn to_followup(&self) -> CreateInteractionResponseFollowup {
        let mut followup = CreateInteractionResponseFollowup::new()
            .content(self.content.clone())
            .ephemeral(self.ephemeral);
        if self.suppress_mentions {
            followup = followup.allowed_mentions(CreateAllowedMentions::new());
        }
        followup
    }
}
