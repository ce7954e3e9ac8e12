//! Trollbot Test Utils
//!
//! Provides shared testing utilities for the trollbot crate. Command handlers
//! and the webhook relay receive Serenity model types (members, webhooks) from
//! the Discord API; this crate builds those types for tests without a network
//! connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_webhook};
//!
//! let member = create_test_member(1, 123, "goblin_fan", Some("Goblin Fan"), None);
//! let webhook = create_test_webhook(900, 7, "troll");
//! ```

pub mod serenity;
