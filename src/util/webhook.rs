use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::data::models::MessagePayload;

/// Destination for formatted changelog messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, title: &str, markdown: &str) -> Result<()>;
}

/// Posts messages to a Webex room through the REST API.
pub struct WebexClient {
    client: Client,
    endpoint: Url,
    token: String,
    room_id: String,
}

impl WebexClient {
    pub fn new(
        client: Client,
        endpoint: Url,
        token: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint,
            token: token.into(),
            room_id: room_id.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebexClient {
    async fn send(&self, title: &str, markdown: &str) -> Result<()> {
        let payload = MessagePayload {
            room_id: self.room_id.clone(),
            markdown: markdown.to_string(),
        };
        debug!(
            "Sending {} to Webex: {}",
            title,
            serde_json::to_string(&payload)?
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("HTTP {}: {}", status, error_text));
        }

        Ok(())
    }
}
