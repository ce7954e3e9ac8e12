//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Member, Webhook, CommandInteraction) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API would
//! return.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `webhook::create_test_webhook` - Create Serenity Webhook objects
//! - `interaction::create_test_command_interaction` - Create Serenity CommandInteraction objects

pub mod interaction;
pub mod member;
mod user;
pub mod webhook;

// Re-export commonly used functions for convenience
pub use interaction::create_test_command_interaction;
pub use member::create_test_member;
pub use webhook::create_test_webhook;
