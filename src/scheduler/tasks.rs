use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::{
    config::Config,
    data::models::{FeedEntry, RunSummary},
    util::{fetcher, html, parser, webhook::Notifier},
};

/// One full pass: fetch the feed and relay every entry inside the window.
pub async fn check<N>(config: &Config, client: &Client, notifier: &N) -> Result<RunSummary>
where
    N: Notifier + ?Sized,
{
    info!("Checking feed: {}", config.feed_url);

    let content = fetcher::fetch(client, config.feed_url.as_str()).await?;
    let entries = parser::parse(&content)?;

    let summary = relay(entries, Utc::now(), config.window, notifier).await;

    info!(
        "Feed check complete: {} entries, {} posted, {} failed, {} stale, {} undated",
        summary.entries, summary.posted, summary.failed, summary.stale, summary.undated
    );

    Ok(summary)
}

pub async fn relay<I, N>(
    entries: I,
    now: DateTime<Utc>,
    window: TimeDelta,
    notifier: &N,
) -> RunSummary
where
    I: IntoIterator<Item = FeedEntry>,
    N: Notifier + ?Sized,
{
    let mut summary = RunSummary::default();

    for entry in entries {
        summary.entries += 1;

        match entry.age(now) {
            None => {
                summary.undated += 1;
                continue;
            }
            Some(age) if age > window => {
                debug!("Skipping {} ({}s old)", entry.title, age.num_seconds());
                summary.stale += 1;
                continue;
            }
            Some(_) => {}
        }

        let message = compose(&entry);

        match notifier.send(&entry.title, &message).await {
            Ok(()) => {
                info!("Posted: {}", entry.title);
                summary.posted += 1;
            }
            Err(e) => {
                error!("Could not post {} - {}", entry.title, e);
                summary.failed += 1;
            }
        }
    }

    summary
}

fn compose(entry: &FeedEntry) -> String {
    format!(
        "# [{}]({})\n\n#### **Details:**\n\n{}\n\n",
        entry.title,
        entry.link,
        html::clean(entry.body.as_deref())
    )
}
