use std::sync::Arc;

use anyhow::Result;
use teloxide::Bot;
use tracing_subscriber::EnvFilter;

use budgetbot::bot::session::SessionStore;
use budgetbot::bot::BotContext;
use budgetbot::config::Settings;
use budgetbot::health;
use budgetbot::storage::{Store, SupabaseClient};

/// Concurrent conversations kept in memory before the stalest is evicted
const SESSION_CAPACITY: usize = 1024;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;

    let client = SupabaseClient::new(settings.supabase_url.as_str(), settings.supabase_key.as_str());
    let ctx = Arc::new(BotContext {
        store: Store::new(client),
        sessions: SessionStore::new(SESSION_CAPACITY),
        owner_id: settings.owner_id,
    });

    let health_port = settings.health_port;
    tokio::spawn(async move {
        if let Err(error) = health::serve(health_port).await {
            tracing::error!(?error, "health endpoint failed");
        }
    });

    let bot = Bot::new(settings.telegram_bot_token);
    budgetbot::bot::run(bot, ctx).await;

    Ok(())
}
