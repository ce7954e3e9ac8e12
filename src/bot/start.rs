use serenity::all::{Client, Command, CreateCommand, GatewayIntents, Http};
use std::sync::Arc;
use tokio_util::task::TaskTracker;

use crate::bot::{command, handler::Handler};
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord client and registers the bot's slash commands.
///
/// Command registration happens before the gateway connection is opened so
/// that a bad token or missing application scope fails startup immediately.
///
/// # Arguments
/// - `config` - Application configuration
/// - `tasks` - Tracker for detached work spawned by command handlers
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction or command registration failed
pub async fn init_bot(config: &Config, tasks: TaskTracker) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let router = command::router(config.defer_timeout, tasks);
    tracing::debug!(
        "Routing commands: {}",
        router.commands().collect::<Vec<_>>().join(", ")
    );

    let client = Client::builder(&config.bot_token, intents)
        .event_handler(Handler::new(router))
        .await?;

    register_commands(&client.http)
        .await
        .inspect_err(|e| tracing::error!("Failed to register commands: {}", e))?;

    Ok(client)
}

/// Overwrites the application's global slash commands with the bot's set.
///
/// Any previously registered command not in the set is removed by Discord.
///
/// # Arguments
/// - `http` - Discord HTTP client authenticated as the bot
///
/// # Returns
/// - `Ok(())` - Commands registered
/// - `Err(AppError)` - Application lookup or registration failed
pub async fn register_commands(http: &Arc<Http>) -> Result<(), AppError> {
    let application = http.get_current_application_info().await?;
    http.set_application_id(application.id);

    let builders: Vec<CreateCommand> = command::commands()
        .iter()
        .map(CreateCommand::from)
        .collect();

    let registered = Command::set_global_commands(http, builders).await?;

    tracing::info!(
        "Registered {} commands for application {}",
        registered.len(),
        application.id
    );

    Ok(())
}

/// Connects to the gateway and runs until all shards shut down.
///
/// # Returns
/// - `Ok(())` - Shards shut down cleanly
/// - `Err(AppError)` - Gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client
        .start()
        .await
        .inspect_err(|e| tracing::error!("Failed to connect to the gateway: {}", e))?;

    Ok(())
}
