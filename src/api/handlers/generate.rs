use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::api::dto::generate::{
    GenerateNameRequest, GenerateNameResponse, GenerateNameWithValuesRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// POST /api/resource-naming-requests
pub async fn generate_name(
    State(state): State<AppState>,
    Json(payload): Json<GenerateNameRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let result = state.naming.generate(payload.into()).await?;
    Ok(Json(GenerateNameResponse::from(result)))
}

/// POST /api/resource-naming-requests/with-values
pub async fn generate_name_with_values(
    State(state): State<AppState>,
    Json(payload): Json<GenerateNameWithValuesRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let result = state.naming.generate_with_values(payload.into()).await?;
    Ok(Json(GenerateNameResponse::from(result)))
}
