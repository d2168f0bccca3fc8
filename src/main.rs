use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wordtrainer_bot::config::Config;
use wordtrainer_bot::constants::POLL_TIMEOUT_SECS;
use wordtrainer_bot::{database, handlers, AppState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let pool = database::init::connect(&config.db)
        .await
        .expect("Failed to connect to the database.");
    database::init::ensure_schema(&pool)
        .await
        .expect("Failed to create the database schema.");

    let bot = Bot::new(config.bot_token.clone());
    let state = Arc::new(AppState::new(pool, config.retry.clone()));

    info!("bot started, polling for updates");
    run_polling_loop(bot, state).await;
}

/// Long-polls getUpdates forever. A failed poll never kills the process;
/// the error class only decides how long to wait before reconnecting.
async fn run_polling_loop(bot: Bot, state: Arc<AppState>) {
    let mut offset: i32 = 0;
    loop {
        match bot.get_updates().offset(offset).timeout(POLL_TIMEOUT_SECS).await {
            Ok(updates) => {
                for update in updates {
                    offset = update.id + 1;
                    handlers::dispatch(&bot, &state, update).await;
                }
            }
            Err(err) => {
                let delay = state.retry.delay_for(&err);
                warn!(
                    error = ?err,
                    delay_secs = delay.as_secs(),
                    "polling failed, reconnecting"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
