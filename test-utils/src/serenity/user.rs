//! JSON for Serenity User objects.

/// Creates the JSON Discord sends for a user.
///
/// Embedded by the member factory. The user has no legacy discriminator,
/// matching accounts on Discord's current username system.
pub(crate) fn user_json(
    user_id: u64,
    username: &str,
    global_name: Option<&str>,
    avatar_hash: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": avatar_hash,
        "bot": false,
        "public_flags": 0,
    })
}
