//! Recording fake of the Discord API for handler and relay tests.

use serenity::all::{ChannelId, GuildId, UserId, Webhook, WebhookId};
use serenity::async_trait;
use std::sync::Mutex;

use crate::error::AppError;
use crate::model::member::{MemberProfile, ProxyMessage};
use crate::service::discord::DiscordApi;

/// A remote call observed by `FakeDiscordApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    SetNickname {
        guild_id: GuildId,
        user_id: UserId,
        nickname: String,
    },
    MemberProfile {
        guild_id: GuildId,
        user_id: UserId,
    },
    CreateWebhook {
        channel_id: ChannelId,
        name: String,
    },
    ExecuteWebhook {
        webhook_id: WebhookId,
        message: ProxyMessage,
    },
    DeleteWebhook {
        webhook_id: WebhookId,
    },
}

/// Records every call and optionally fails selected ones.
///
/// Failures are reported as `serenity::Error::Other`, whose display is the
/// given message, so error replies can be asserted verbatim.
#[derive(Default)]
pub struct FakeDiscordApi {
    calls: Mutex<Vec<ApiCall>>,
    set_nickname_error: Option<&'static str>,
    member_profile_error: Option<&'static str>,
    create_webhook_error: Option<&'static str>,
    execute_webhook_error: Option<&'static str>,
    delete_webhook_error: Option<&'static str>,
}

impl FakeDiscordApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_set_nickname(mut self, message: &'static str) -> Self {
        self.set_nickname_error = Some(message);
        self
    }

    pub fn fail_member_profile(mut self, message: &'static str) -> Self {
        self.member_profile_error = Some(message);
        self
    }

    pub fn fail_create_webhook(mut self, message: &'static str) -> Self {
        self.create_webhook_error = Some(message);
        self
    }

    pub fn fail_execute_webhook(mut self, message: &'static str) -> Self {
        self.execute_webhook_error = Some(message);
        self
    }

    pub fn fail_delete_webhook(mut self, message: &'static str) -> Self {
        self.delete_webhook_error = Some(message);
        self
    }

    /// Id of every webhook the fake creates.
    pub fn webhook_id() -> WebhookId {
        WebhookId::new(900)
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Profile returned for every successful member lookup.
    pub fn profile() -> MemberProfile {
        MemberProfile {
            display_name: "Goblin Fan".to_string(),
            avatar_url: "https://cdn.discordapp.com/avatars/123/abc.webp".to_string(),
        }
    }

    fn record(&self, call: ApiCall, error: Option<&'static str>) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        match error {
            Some(message) => Err(serenity::Error::Other(message).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DiscordApi for FakeDiscordApi {
    async fn set_nickname(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
    ) -> Result<(), AppError> {
        self.record(
            ApiCall::SetNickname {
                guild_id,
                user_id,
                nickname: nickname.to_string(),
            },
            self.set_nickname_error,
        )
    }

    async fn member_profile(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<MemberProfile, AppError> {
        self.record(
            ApiCall::MemberProfile { guild_id, user_id },
            self.member_profile_error,
        )?;
        Ok(Self::profile())
    }

    async fn create_webhook(
        &self,
        channel_id: ChannelId,
        name: &str,
    ) -> Result<Webhook, AppError> {
        self.record(
            ApiCall::CreateWebhook {
                channel_id,
                name: name.to_string(),
            },
            self.create_webhook_error,
        )?;
        Ok(test_utils::serenity::create_test_webhook(
            Self::webhook_id().get(),
            channel_id.get(),
            name,
        ))
    }

    async fn execute_webhook(
        &self,
        webhook: &Webhook,
        message: &ProxyMessage,
    ) -> Result<(), AppError> {
        self.record(
            ApiCall::ExecuteWebhook {
                webhook_id: webhook.id,
                message: message.clone(),
            },
            self.execute_webhook_error,
        )
    }

    async fn delete_webhook(&self, webhook: &Webhook) -> Result<(), AppError> {
        self.record(
            ApiCall::DeleteWebhook {
                webhook_id: webhook.id,
            },
            self.delete_webhook_error,
        )
    }
}
