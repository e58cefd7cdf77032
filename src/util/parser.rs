use anyhow::Result;
use feed_rs::parser;

use crate::data::models::FeedEntry;

pub fn parse(content: &[u8]) -> Result<impl Iterator<Item = FeedEntry>> {
    let feed = parser::parse(content)?;
    Ok(feed.entries.into_iter().map(FeedEntry::from))
}
