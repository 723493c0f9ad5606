use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::api::dto::validate::{ValidateNameRequest, ValidateNameResponse};
use crate::error::AppError;
use crate::state::AppState;

/// POST /api/resource-naming-requests/validate-name
pub async fn validate_name(
    State(state): State<AppState>,
    Json(payload): Json<ValidateNameRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let outcome = state
        .naming
        .validate_only(&payload.resource_type, &payload.name)
        .await?;
    Ok(Json(ValidateNameResponse::from(outcome)))
}
