//! Webhook delivery

use crate::error::{DeliveryError, Result};
use crate::notifier::Notifier;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

/// POSTs `{"title", "body"}` as JSON to a fixed URL
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    headers: BTreeMap<String, String>,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, headers: BTreeMap<String, String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            headers,
        }
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    title: &'a str,
    body: &'a str,
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn send(&self, title: &str, body: &str) -> Result<()> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { title, body });
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        tracing::debug!("Posting report to {}", self.url);
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
