use async_trait::async_trait;

use crate::domain::entities::GeneratedName;

/// Outbound notification for freshly generated names.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookNotifier: Send + Sync {
    /// Delivers the record; returns whether delivery succeeded.
    async fn notify(&self, record: &GeneratedName) -> bool;

    fn is_configured(&self) -> bool;
}
