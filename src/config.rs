use std::{io::ErrorKind, time::Duration};

use anyhow::{Context, Result};
use chrono::TimeDelta;
use serde::Deserialize;
use url::Url;

const CONFIG_PATH: &str = "config.toml";

const DEFAULT_FEED_URL: &str = "https://github.blog/changelog/feed/";
const DEFAULT_ENDPOINT: &str = "https://webexapis.com/v1/messages";
const DEFAULT_WINDOW_SECONDS: u64 = 3600;
const DEFAULT_USER_AGENT: &str = concat!("changelog-relay/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct Config {
    pub feed_url: Url,
    pub window: TimeDelta,
    pub endpoint: Url,
    pub token: String,
    pub room_id: String,
    pub user_agent: String,
    pub request_timeout: Option<Duration>,
    pub schedule: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    feed: FeedSection,
    webex: WebexSection,
    http: HttpSection,
    schedule: ScheduleSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FeedSection {
    url: Option<String>,
    window_seconds: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WebexSection {
    endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct HttpSection {
    request_timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ScheduleSection {
    cron: Option<String>,
}

impl Config {
    /// Reads `config.toml` when present and the Webex secrets from the
    /// environment.
    pub fn load() -> Result<Self> {
        let config_str = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e).context(format!("Failed to read {}", CONFIG_PATH)),
        };

        Self::from_sources(config_str.as_deref(), |key| std::env::var(key).ok())
    }

    fn from_sources(
        config_str: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file: FileConfig = match config_str {
            Some(contents) => {
                toml::from_str(contents).context(format!("Invalid {}", CONFIG_PATH))?
            }
            None => FileConfig::default(),
        };

        let feed_url = parse_url(file.feed.url.as_deref().unwrap_or(DEFAULT_FEED_URL))?;
        let endpoint = parse_url(file.webex.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;

        let window_seconds = file.feed.window_seconds.unwrap_or(DEFAULT_WINDOW_SECONDS);
        let window = i64::try_from(window_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(|| anyhow::anyhow!("window_seconds out of range: {}", window_seconds))?;

        let schedule = file
            .schedule
            .cron
            .map(|expr| expr.trim().to_string())
            .filter(|expr| !expr.is_empty());

        Ok(Self {
            feed_url,
            window,
            endpoint,
            token: env("WEBEX_BOT_TOKEN").unwrap_or_default(),
            room_id: env("WEBEX_ROOM_ID").unwrap_or_default(),
            user_agent: file
                .http
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            request_timeout: file.http.request_timeout_secs.map(Duration::from_secs),
            schedule,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).context(format!("Invalid URL: {}", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(anyhow::anyhow!("Unsupported URL scheme {} in {}", scheme, raw)),
    }
}
