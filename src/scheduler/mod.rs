pub mod tasks;

use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::{config::Config, util::webhook::Notifier};

/// Runs `tasks::check` on the cron expression until Ctrl-C.
pub async fn run<N>(
    expression: &str,
    config: Arc<Config>,
    client: Client,
    notifier: Arc<N>,
) -> Result<()>
where
    N: Notifier + 'static,
{
    let mut scheduler = JobScheduler::new().await?;
    schedule(&scheduler, expression, config, client, notifier).await?;

    scheduler.start().await?;
    info!("Scheduled feed checks: {}", expression);

    tokio::signal::ctrl_c().await?;
    info!("Shutting down scheduler");
    scheduler.shutdown().await?;
    Ok(())
}

/// Registers the feed check. A failed check is logged and the next tick
/// runs as usual.
pub async fn schedule<N>(
    scheduler: &JobScheduler,
    expression: &str,
    config: Arc<Config>,
    client: Client,
    notifier: Arc<N>,
) -> Result<()>
where
    N: Notifier + 'static,
{
    scheduler
        .add(Job::new_async(expression, move |_uuid, _l| {
            let config = config.clone();
            let client = client.clone();
            let notifier = notifier.clone();
            Box::pin(async move {
                if let Err(e) = tasks::check(&config, &client, notifier.as_ref()).await {
                    error!("Feed check error: {}", e);
                }
            })
        })?)
        .await?;

    Ok(())
}
