pub mod http_webhook;
pub mod notifier;
pub mod null_webhook;

pub use http_webhook::HttpWebhook;
pub use notifier::WebhookNotifier;
pub use null_webhook::NullWebhook;

#[cfg(test)]
pub use notifier::MockWebhookNotifier;
