//! HTTP server initialization and runtime setup.
//!
//! Wires the settings store, repositories, webhook and service together, then
//! runs the Axum server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;

use crate::application::services::NamingRequestService;
use crate::config::Config;
use crate::infrastructure::persistence::{
    seed, FileCatalogRepository, FileComponentRepository, FileCustomComponentRepository,
    FileDelimiterRepository, FileGeneratedNameRepository, FileResourceTypeRepository, JsonStore,
};
use crate::infrastructure::webhook::{HttpWebhook, NullWebhook, WebhookNotifier};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Settings store (seeding defaults on first run)
/// - File-backed repositories
/// - Generation webhook (or NullWebhook fallback)
/// - Axum HTTP server with graceful shutdown
pub async fn run(config: Config) -> Result<()> {
    let store = JsonStore::new(&config.data_dir);
    seed::ensure_seeded(&store).await?;
    tracing::info!("Settings store ready at {}", store.dir().display());

    let webhook: Arc<dyn WebhookNotifier> = match &config.generation_webhook {
        Some(url) => {
            let timeout = Duration::from_secs(config.webhook_timeout_seconds);
            match HttpWebhook::new(url.clone(), timeout) {
                Ok(webhook) => {
                    tracing::info!("Generation webhook enabled");
                    Arc::new(webhook)
                }
                Err(e) => {
                    tracing::warn!("Failed to build webhook client: {e}. Webhook disabled.");
                    Arc::new(NullWebhook)
                }
            }
        }
        None => {
            tracing::info!("Generation webhook disabled");
            Arc::new(NullWebhook)
        }
    };

    let components = Arc::new(FileComponentRepository::new(store.clone()));
    let generated_names = Arc::new(FileGeneratedNameRepository::new(store.clone()));
    let naming = Arc::new(NamingRequestService::new(
        components.clone(),
        Arc::new(FileResourceTypeRepository::new(store.clone())),
        Arc::new(FileDelimiterRepository::new(store.clone())),
        Arc::new(FileCatalogRepository::new(store.clone())),
        Arc::new(FileCustomComponentRepository::new(store.clone())),
        generated_names.clone(),
        webhook.clone(),
        config.duplicate_names_allowed,
    ));

    let state = AppState::new(naming, components, generated_names, webhook);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
