use serenity::all::{ChannelId, GuildId, UserId};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::task::TaskTracker;

use crate::bot::command::{
    commands,
    impersonate::{ImpersonateCommand, ImpersonateOptions},
    rename::{RenameCommand, RenameOptions},
};
use crate::bot::router::CommandHandler;
use crate::bot::test::{guild_event, FakeResponder, Sent};
use crate::error::command::CommandError;
use crate::model::command::OptionKind;
use crate::model::interaction::{OptionValue, ResponseData};
use crate::model::member::ProxyMessage;
use crate::service::test::{ApiCall, FakeDiscordApi};


fn member(id: u64) -> OptionValue {
    OptionValue::User(UserId::new(id))
}

fn text(value: &str) -> OptionValue {
    OptionValue::String(value.to_string())
}
