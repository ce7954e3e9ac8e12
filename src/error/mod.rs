//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by startup and by the remote
//! API seam. Its `Display` is transparent so that the description shown to a
//! user in an error reply is the underlying message, e.g. Discord's
//! `Missing Permissions`.

pub mod command;
pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always fatal; the bot exits before connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
