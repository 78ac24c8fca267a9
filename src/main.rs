use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use celebrate_bot::{api::run_api_server, config::Config, dispatch::BotContext, scheduler::BotScheduler};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let context = Arc::new(BotContext::new(config.clone())?);

    let mut scheduler = BotScheduler::start(Arc::clone(&context)).await?;

    run_api_server(&config, context.slack.clone())
        .await
        .map_err(|e| anyhow!("API server exited: {e}"))?;

    scheduler.shutdown().await?;

    Ok(())
}
