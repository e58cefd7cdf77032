use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
    pub body: Option<String>,
}

impl FeedEntry {
    /// Time elapsed since publication, or `None` for undated entries.
    pub fn age(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.published.map(|published| now - published)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub room_id: String,
    pub markdown: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: u32,
    pub undated: u32,
    pub stale: u32,
    pub posted: u32,
    pub failed: u32,
}
