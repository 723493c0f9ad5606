use async_trait::async_trait;

use crate::domain::entities::GeneratedName;
use crate::infrastructure::webhook::notifier::WebhookNotifier;

/// Stand-in used when no webhook URL is configured.
pub struct NullWebhook;

#[async_trait]
impl WebhookNotifier for NullWebhook {
    async fn notify(&self, _record: &GeneratedName) -> bool {
        false
    }

    fn is_configured(&self) -> bool {
        false
    }
}
