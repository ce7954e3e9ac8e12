//! Member identity used to impersonate someone through a webhook.

use serenity::all::{CreateAllowedMentions, ExecuteWebhook, Member};

/// Public identity of a guild member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    /// Global display name, or the username when none is set.
    pub display_name: String,
    /// Avatar URL, or the default avatar when none is set.
    pub avatar_url: String,
}

impl MemberProfile {
    /// Converts a Serenity member into a profile.
    ///
    /// The guild nickname is intentionally not used; the profile mirrors the
    /// user's account-wide identity.
    pub fn from_member(member: &Member) -> Self {
        let user = &member.user;
        Self {
            display_name: user.global_name.clone().unwrap_or_else(|| user.name.clone()),
            avatar_url: user.face(),
        }
    }
}

/// A message posted through a webhook under someone else's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyMessage {
    pub content: String,
    pub username: String,
    pub avatar_url: String,
}

impl ProxyMessage {
    pub fn new(content: impl Into<String>, profile: MemberProfile) -> Self {
        Self {
            content: content.into(),
            username: profile.display_name,
            avatar_url: profile.avatar_url,
        }
    }

    /// Builds the webhook execution payload with all mentions suppressed.
    pub fn to_execute(&self) -> ExecuteWebhook {
        ExecuteWebhook::new()
            .content(self.content.clone())
            .username(self.username.clone())
            .avatar_url(self.avatar_url.clone())
            .allowed_mentions(CreateAllowedMentions::new())
    }
}
