//! Ready event handler.
//!
//! The `ready` event fires after the bot authenticates and completes the
//! gateway handshake, and again after every full reconnect.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `_ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "connected to the gateway as {} ({} guilds)",
        ready.user.tag(),
        ready.guilds.len()
    );
}
