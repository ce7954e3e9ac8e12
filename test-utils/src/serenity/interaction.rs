//! Test factory for creating Serenity CommandInteraction objects.

use serenity::all::CommandInteraction;

use super::user::user_json;

/// Creates a test slash command interaction.
///
/// Creates a CommandInteraction by deserializing the JSON Discord sends in an
/// `INTERACTION_CREATE` event for a chat input command. The invoking user is a
/// fixed test user; no member object is attached.
///
/// # Arguments
/// - `name` - Invoked command name
/// - `guild_id` - Guild the command was invoked in, `None` for a direct message
/// - `channel_id` - Channel the command was invoked in
/// - `options` - JSON array of top-level options, each with `name`, `type`, `value`
///
/// # Returns
/// - `CommandInteraction` - A valid Serenity CommandInteraction struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a CommandInteraction (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::interaction::create_test_command_interaction;
///
/// let command = create_test_command_interaction(
///     "troll_rename",
///     Some(1),
///     7,
///     serde_json::json!([
///         { "name": "member", "type": 6, "value": "123" },
///         { "name": "name", "type": 3, "value": "Goblin" },
///     ]),
/// );
/// ```
pub fn create_test_command_interaction(
    name: &str,
    guild_id: Option<u64>,
    channel_id: u64,
    options: serde_json::Value,
) -> CommandInteraction {
    let guild_id = guild_id.map(|id| id.to_string());

    serde_json::from_value(serde_json::json!({
        "id": "500000000000000000",
        "application_id": "600000000000000000",
        "type": 2,
        "data": {
            "id": "700000000000000000",
            "name": name,
            "type": 1,
            "options": options,
            "guild_id": guild_id,
        },
        "guild_id": guild_id,
        "channel_id": channel_id.to_string(),
        "user": user_json(100000000000000000, "invoker", None, None),
        "token": "test-interaction-token",
        "version": 1,
        "app_permissions": "0",
        "locale": "en-US",
        "guild_locale": null,
        "entitlements": [],
        "authorizing_integration_owners": {},
    }))
    .expect("Failed to create test command interaction - invalid JSON structure")
}
