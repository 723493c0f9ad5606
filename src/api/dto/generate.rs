//! Request/response shapes for name generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{
    GenerationResult, NameRequest, ResolvedNameRequest,
};
use crate::domain::entities::component::normalize_component_name;
use crate::domain::entities::GeneratedName;
use crate::domain::snapshot::NameRequestValues;

/// Generation request carrying per-field short codes.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNameRequest {
    #[validate(length(min = 1, message = "resourceType must not be empty"))]
    pub resource_type: String,
    pub resource_id: Option<i64>,
    pub resource_org: Option<String>,
    pub resource_unit_dept: Option<String>,
    pub resource_proj_app_svc: Option<String>,
    pub resource_function: Option<String>,
    pub resource_location: Option<String>,
    pub resource_environment: Option<String>,
    pub resource_instance: Option<String>,
    /// Custom component values keyed by component name.
    #[serde(default)]
    pub custom_components: BTreeMap<String, String>,
    pub created_by: Option<String>,
}

impl From<GenerateNameRequest> for NameRequest {
    fn from(body: GenerateNameRequest) -> Self {
        let custom_components = body
            .custom_components
            .into_iter()
            .map(|(name, value)| (normalize_component_name(&name), value))
            .collect();
        NameRequest {
            values: NameRequestValues {
                org: body.resource_org,
                unit_dept: body.resource_unit_dept,
                proj_app_svc: body.resource_proj_app_svc,
                // The target type's short name is also the type component value.
                resource_type: Some(body.resource_type.clone()),
                function: body.resource_function,
                location: body.resource_location,
                environment: body.resource_environment,
                instance: body.resource_instance,
                custom_components,
            },
            resource_type: body.resource_type,
            resource_id: body.resource_id,
            created_by: body.created_by,
        }
    }
}

/// Generation request carrying pre-resolved component values.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNameWithValuesRequest {
    #[validate(length(min = 1, message = "resourceType must not be empty"))]
    pub resource_type: String,
    pub resource_id: Option<i64>,
    /// Final values keyed by component name; used exactly as supplied.
    #[validate(length(min = 1, message = "components must not be empty"))]
    pub components: BTreeMap<String, String>,
    pub created_by: Option<String>,
}

impl From<GenerateNameWithValuesRequest> for ResolvedNameRequest {
    fn from(body: GenerateNameWithValuesRequest) -> Self {
        ResolvedNameRequest {
            values: body
                .components
                .into_iter()
                .map(|(name, value)| (normalize_component_name(&name), value))
                .collect(),
            resource_type: body.resource_type,
            resource_id: body.resource_id,
            created_by: body.created_by,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNameResponse {
    pub success: bool,
    pub resource_name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name_details: Option<GeneratedName>,
}

impl From<GenerationResult> for GenerateNameResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            success: result.success,
            resource_name: result.resource_name,
            message: result.message,
            resource_name_details: result.details,
        }
    }
}
