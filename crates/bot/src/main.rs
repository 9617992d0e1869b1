//! TV Guide Bot - standalone binary
//!
//! Loads configuration, seeds the catalog and runs the dispatcher.

use anyhow::Result;
use teloxide::Bot;
use tvguide_bot::config::Config;
use tvguide_bot::context::GuideContext;
use tvguide_bot::db::GuideDb;
use tvguide_bot::seed::seed_catalog;
use tvguide_core::{Catalog, Clock, SystemClock};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    tvguide_shared::init_env();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = tvguide_shared::init_tracing("tvguide_bot");

    tracing::info!("Starting TV guide bot");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded (timezone: {})", config.timezone);

    let pool = tvguide_shared::init_db(&config).await?;
    let db = GuideDb::new(pool);
    db.init_schema().await?;

    // Seeding finishes before any update is handled
    let catalog = Catalog::standard();
    let clock = SystemClock::new(config.timezone);
    seed_catalog(&db, &catalog, clock.today(), config.guide_seed).await?;

    let ctx = GuideContext::new(db, catalog, clock);
    let telegram = Bot::new(&config.telegram_bot_token);

    tvguide_bot::run_bot(telegram, ctx).await
}
