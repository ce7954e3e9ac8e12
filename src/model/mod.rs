//! Domain models for commands, interactions and their responses.
//!
//! These types sit between Serenity's wire types and the command handlers so
//! that handlers can be exercised without a gateway connection.

pub mod command;
pub mod interaction;
pub mod member;
