pub mod models;

use feed_rs::model::Entry;

use models::FeedEntry;

impl From<Entry> for FeedEntry {
    fn from(entry: Entry) -> Self {
        let title = entry
            .title
            .map(|t| t.content)
            .unwrap_or_else(|| "Untitled".to_string());

        let link = entry
            .links
            .into_iter()
            .next()
            .map(|l| l.href)
            .unwrap_or_default();

        Self {
            title,
            link,
            published: entry.published,
            body: entry.content.and_then(|c| c.body),
        }
    }
}
