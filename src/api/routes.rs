//! API route configuration.

use axum::routing::{get, post};
use axum::Router;

use crate::api::handlers::{generate, generated_names, validate};
use crate::state::AppState;

/// All API routes.
///
/// # Endpoints
///
/// - `POST /resource-naming-requests`                 - Generate a name from short codes
/// - `POST /resource-naming-requests/with-values`     - Generate from pre-resolved values
/// - `POST /resource-naming-requests/validate-name`   - Validate a name without generating
/// - `GET  /generated-names`                          - List the generation log (paginated)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/resource-naming-requests", post(generate::generate_name))
        .route(
            "/resource-naming-requests/with-values",
            post(generate::generate_name_with_values),
        )
        .route(
            "/resource-naming-requests/validate-name",
            post(validate::validate_name),
        )
        .route(
            "/generated-names",
            get(generated_names::list_generated_names),
        )
}
