//! Remote side effects performed by the bot.
//!
//! - **Discord** (`discord`) - Trait over the Discord REST calls the commands use
//! - **Webhook** (`webhook`) - Create, post through, and clean up a temporary webhook

pub mod discord;
pub mod webhook;

#[cfg(test)]
pub mod test;
