use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tracing::debug;

const MAX_FEED_BYTES: usize = 5_000_000;

pub fn client(user_agent: &str, timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Raw feed document. Left undecoded so the parser can honour the XML
/// encoding declaration.
pub async fn fetch(client: &Client, url: &str) -> Result<Vec<u8>> {
    fetch_limited(client, url, MAX_FEED_BYTES).await
}

async fn fetch_limited(client: &Client, url: &str, limit: usize) -> Result<Vec<u8>> {
    debug!("Fetching feed from: {}", url);
    let mut response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!("HTTP {}", response.status()));
    }

    if let Some(length) = response.content_length() {
        if length > limit as u64 {
            return Err(anyhow::anyhow!("Feed too large: {} bytes", length));
        }
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if bytes.len() + chunk.len() > limit {
            return Err(anyhow::anyhow!("Feed too large: over {} bytes", limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
