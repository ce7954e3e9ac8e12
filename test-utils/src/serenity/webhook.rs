//! Test factory for creating Serenity Webhook objects.

use serenity::all::Webhook;

/// Creates a test incoming Serenity Webhook.
///
/// The webhook carries a token so it can be executed, the same as a webhook
/// freshly returned from `create_webhook`.
///
/// # Arguments
/// - `webhook_id` - Discord webhook ID (snowflake)
/// - `channel_id` - Channel the webhook posts into
/// - `name` - Default name of the webhook
///
/// # Returns
/// - `Webhook` - A valid Serenity Webhook struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Webhook (indicates invalid test data)
pub fn create_test_webhook(webhook_id: u64, channel_id: u64, name: &str) -> Webhook {
    serde_json::from_value(serde_json::json!({
        "id": webhook_id.to_string(),
        "type": 1,
        "guild_id": null,
        "channel_id": channel_id.to_string(),
        "user": null,
        "name": name,
        "avatar": null,
        "token": "test-webhook-token",
        "application_id": null,
    }))
    .expect("Failed to create test webhook - invalid JSON structure")
}
