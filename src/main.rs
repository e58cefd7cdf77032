use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod scheduler;
mod util;

use config::Config;
use scheduler::tasks::check;
use util::{fetcher, webhook::WebexClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::load()?);

    if config.token.is_empty() {
        warn!("WEBEX_BOT_TOKEN is not set, Webex will reject messages");
    }
    if config.room_id.is_empty() {
        warn!("WEBEX_ROOM_ID is not set, Webex will reject messages");
    }

    let client = fetcher::client(&config.user_agent, config.request_timeout)?;
    let webex = Arc::new(WebexClient::new(
        client.clone(),
        config.endpoint.clone(),
        config.token.as_str(),
        config.room_id.as_str(),
    ));

    match config.schedule.clone() {
        Some(expression) => scheduler::run(&expression, config, client, webex).await?,
        None => {
            let summary = check(&config, &client, webex.as_ref()).await?;
            info!("Posted {} of {} entries", summary.posted, summary.entries);
        }
    }

    Ok(())
}
