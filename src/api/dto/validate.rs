use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::validator::ValidationOutcome;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateNameRequest {
    #[validate(length(min = 1, message = "resourceType must not be empty"))]
    pub resource_type: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateNameResponse {
    pub valid: bool,
    /// The accepted name, which may carry a delimiter-strip correction.
    pub name: String,
    pub message: String,
}

impl From<ValidationOutcome> for ValidateNameResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        Self {
            valid: outcome.valid,
            message: outcome.message(),
            name: outcome.name,
        }
    }
}
