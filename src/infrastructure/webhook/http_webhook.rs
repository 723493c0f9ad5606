//! HTTP delivery of generation events.

use std::time::Duration;

use async_trait::async_trait;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;

use crate::domain::entities::GeneratedName;
use crate::infrastructure::webhook::notifier::WebhookNotifier;

pub struct HttpWebhook {
    client: reqwest::Client,
    url: String,
}

impl HttpWebhook {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    async fn post(&self, record: &GeneratedName) -> Result<(), reqwest::Error> {
        self.client
            .post(&self.url)
            .json(record)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl WebhookNotifier for HttpWebhook {
    async fn notify(&self, record: &GeneratedName) -> bool {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(3);
        match Retry::spawn(strategy, || self.post(record)).await {
            Ok(()) => {
                tracing::info!(
                    resource_name = %record.resource_name,
                    url = %self.url,
                    "delivered generation webhook"
                );
                true
            }
            Err(error) => {
                tracing::warn!(
                    resource_name = %record.resource_name,
                    url = %self.url,
                    %error,
                    "generation webhook delivery failed"
                );
                false
            }
        }
    }

    fn is_configured(&self) -> bool {
        true
    }
}
