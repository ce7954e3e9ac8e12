//! Discord bot integration: slash commands and gateway event handling.
//!
//! The bot declares two slash commands, receives their interactions over the
//! gateway, and routes each one to its handler. Serenity runs every gateway
//! event in its own task, so interactions are handled concurrently and share
//! no mutable state.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild structure events
//! - `GUILD_MEMBERS` - Receive guild member events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod router;
pub mod start;

#[cfg(test)]
pub mod test;
