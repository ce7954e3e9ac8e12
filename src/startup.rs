use std::time::Duration;
use tokio_util::task::TaskTracker;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// Log levels can be tuned per module with `RUST_LOG`, e.g.
/// `RUST_LOG=trollbot=debug,serenity=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Waits a bounded time for detached impersonation sends to finish.
///
/// Sends still running after `grace` are abandoned when the runtime shuts
/// down; their messages may or may not be delivered.
///
/// # Arguments
/// - `tasks` - Tracker the sends were spawned on
/// - `grace` - Upper bound on the wait, `Duration::ZERO` to skip waiting
///
/// # Returns
/// - `true` - All tracked tasks finished
/// - `false` - Timed out with tasks still running
pub async fn drain_detached(tasks: TaskTracker, grace: Duration) -> bool {
    tasks.close();

    if tasks.is_empty() {
        return true;
    }

    tracing::info!(
        "Waiting up to {:?} for {} in-flight message(s)",
        grace,
        tasks.len()
    );

    match tokio::time::timeout(grace, tasks.wait()).await {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!(
                "Abandoning {} in-flight message(s) on shutdown",
                tasks.len()
            );
            false
        }
    }
}
