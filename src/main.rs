//! Trollbot: a Discord bot offering two guild slash commands.
//!
//! - `/troll_rename member name` changes a member's nickname.
//! - `/troll_impersonate member message` posts a message in the current
//!   channel under the member's name and avatar via a temporary webhook.
//!
//! # Layout
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Error** (`error`) - Application error types
//! - **Model** (`model`) - Command declarations, interaction events and replies
//! - **Service** (`service`) - Discord REST seam and the webhook relay
//! - **Bot** (`bot`) - Client startup, event handlers, command routing
//! - **Startup** (`startup`) - Logging and shutdown helpers

mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;

use tokio_util::task::TaskTracker;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let tasks = TaskTracker::new();

    let client = bot::start::init_bot(&config, tasks.clone()).await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for interrupt signal: {}", e);
            return;
        }
        tracing::info!("Interrupt received, shutting down");
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(client).await?;

    startup::drain_detached(tasks, config.shutdown_grace).await;

    Ok(())
}
