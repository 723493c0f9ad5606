//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::NamingRequestService;
use crate::domain::repositories::{ComponentRepository, GeneratedNameRepository};
use crate::infrastructure::webhook::WebhookNotifier;

#[derive(Clone)]
pub struct AppState {
    pub naming: Arc<NamingRequestService>,
    pub components: Arc<dyn ComponentRepository>,
    pub generated_names: Arc<dyn GeneratedNameRepository>,
    pub webhook: Arc<dyn WebhookNotifier>,
}

impl AppState {
    pub fn new(
        naming: Arc<NamingRequestService>,
        components: Arc<dyn ComponentRepository>,
        generated_names: Arc<dyn GeneratedNameRepository>,
        webhook: Arc<dyn WebhookNotifier>,
    ) -> Self {
        Self {
            naming,
            components,
            generated_names,
            webhook,
        }
    }
}
