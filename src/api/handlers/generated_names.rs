use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::api::dto::generated_names::{
    GeneratedNamesResponse, PaginationMeta, PaginationParams,
};
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/generated-names
pub async fn list_generated_names(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (offset, limit, page, page_size) = params.validate_and_get_offset_limit()?;

    let mut records = state.generated_names.list().await?;
    let total = records.len();
    // Newest first.
    records.sort_by(|a, b| b.created_on.cmp(&a.created_on));
    let items = records.into_iter().skip(offset).take(limit).collect();

    Ok(Json(GeneratedNamesResponse {
        items,
        pagination: PaginationMeta {
            page,
            page_size,
            total,
        },
    }))
}
