use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let storage = match state.components.list_enabled().await {
        Ok(_) => CheckStatus::Ok,
        Err(error) => {
            tracing::error!(%error, "health check failed to read settings");
            CheckStatus::Failed
        }
    };
    let webhook = if state.webhook.is_configured() {
        CheckStatus::Ok
    } else {
        CheckStatus::Disabled
    };

    let healthy = storage == CheckStatus::Ok;
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        checks: HealthChecks { storage, webhook },
    };
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(response))
}
