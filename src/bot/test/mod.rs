use serenity::all::{ChannelId, GuildId};
use serenity::async_trait;
use std::sync::Mutex;

use crate::bot::router::InteractionResponder;
use crate::error::AppError;
use crate::model::interaction::{InteractionEvent, OptionValue, ResponseData};

mod router;

/// A reply observed by `FakeResponder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Respond(ResponseData),
    Defer { ephemeral: bool },
    FollowUp(ResponseData),
}

/// Records every reply sent for an interaction.
#[derive(Default)]
pub struct FakeResponder {
    sent: Mutex<Vec<Sent>>,
}

impl FakeResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn push(&self, sent: Sent) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl InteractionResponder for FakeResponder {
    async fn respond(&self, data: ResponseData) -> Result<(), AppError> {
        self.push(Sent::Respond(data))
    }

    async fn defer(&self, ephemeral: bool) -> Result<(), AppError> {
        self.push(Sent::Defer { ephemeral })
    }

    async fn follow_up(&self, data: ResponseData) -> Result<(), AppError> {
        self.push(Sent::FollowUp(data))
    }
}

/// Builds a guild interaction for `command` with the given options.
pub fn guild_event(command: &str, options: Vec<(&str, OptionValue)>) -> InteractionEvent {
    InteractionEvent {
        command: command.to_string(),
        guild_id: Some(GuildId::new(1)),
        channel_id: ChannelId::new(7),
        options: options
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    }
}
