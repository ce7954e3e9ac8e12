//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use super::user::user_json;

/// Creates a test Serenity Member with customizable user fields.
///
/// The member has no nickname, no roles, and default flags. Guild-specific
/// fields are set to the values Discord returns for a plain member.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique account username
/// - `global_name` - Optional display name shown instead of the username
/// - `avatar_hash` - Optional 32 character hex avatar hash
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(1, 123, "goblin_fan", Some("Goblin Fan"), None);
/// assert_eq!(member.user.global_name.as_deref(), Some("Goblin Fan"));
/// ```
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    global_name: Option<&str>,
    avatar_hash: Option<&str>,
) -> Member {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user_json(user_id, username, global_name, avatar_hash),
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
