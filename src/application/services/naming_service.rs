//! Naming request orchestration.
//!
//! One service drives the whole pipeline: snapshot the catalogs, select the
//! target type, compose, validate, gate duplicates, persist and notify. Each
//! request works against an immutable snapshot taken up front, so concurrent
//! catalog edits never produce a half-old half-new name.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::composer::{self, ValueSource};
use crate::domain::entities::{CatalogKind, GeneratedName, NewGeneratedName, ResourceType};
use crate::domain::repositories::{
    CatalogRepository, ComponentRepository, CustomComponentRepository, DelimiterRepository,
    GeneratedNameRepository, ResourceTypeRepository,
};
use crate::domain::snapshot::{CatalogSnapshot, NameRequestValues};
use crate::domain::validator::{self, ValidationOutcome};
use crate::error::AppError;
use crate::infrastructure::webhook::WebhookNotifier;

/// Placeholder returned in place of a name when a request is rejected.
pub const NAME_NOT_GENERATED: &str = "***RESOURCE NAME NOT GENERATED***";

const UNKNOWN_TYPE_MESSAGE: &str = "ResourceType value is invalid.";
const UNKNOWN_RESOURCE_ID_MESSAGE: &str = "Resource Id value is invalid.";
const AMBIGUOUS_TYPE_MESSAGE: &str = "Your configuration contains multiple resource types for \
     the provided short name. You must supply the resource id value for the resource type in \
     your request. (Example: resourceId: 14)";
const DEFAULT_USER: &str = "General";

/// A naming request with strict per-field short codes.
#[derive(Debug, Clone)]
pub struct NameRequest {
    pub resource_type: String,
    pub resource_id: Option<i64>,
    pub values: NameRequestValues,
    pub created_by: Option<String>,
}

/// A naming request whose component values are supplied pre-resolved,
/// keyed by normalized component name.
#[derive(Debug, Clone)]
pub struct ResolvedNameRequest {
    pub resource_type: String,
    pub resource_id: Option<i64>,
    pub values: BTreeMap<String, String>,
    pub created_by: Option<String>,
}

/// The outcome of one naming request.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub success: bool,
    pub resource_name: String,
    pub message: String,
    /// The persisted record; absent on rejection and for static values.
    pub details: Option<GeneratedName>,
}

impl GenerationResult {
    fn rejected(message: String) -> Self {
        Self {
            success: false,
            resource_name: NAME_NOT_GENERATED.to_string(),
            message,
            details: None,
        }
    }
}

pub struct NamingRequestService {
    components: Arc<dyn ComponentRepository>,
    resource_types: Arc<dyn ResourceTypeRepository>,
    delimiters: Arc<dyn DelimiterRepository>,
    catalogs: Arc<dyn CatalogRepository>,
    custom_components: Arc<dyn CustomComponentRepository>,
    generated_names: Arc<dyn GeneratedNameRepository>,
    webhook: Arc<dyn WebhookNotifier>,
    duplicate_names_allowed: bool,
}

impl NamingRequestService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        components: Arc<dyn ComponentRepository>,
        resource_types: Arc<dyn ResourceTypeRepository>,
        delimiters: Arc<dyn DelimiterRepository>,
        catalogs: Arc<dyn CatalogRepository>,
        custom_components: Arc<dyn CustomComponentRepository>,
        generated_names: Arc<dyn GeneratedNameRepository>,
        webhook: Arc<dyn WebhookNotifier>,
        duplicate_names_allowed: bool,
    ) -> Self {
        Self {
            components,
            resource_types,
            delimiters,
            catalogs,
            custom_components,
            generated_names,
            webhook,
            duplicate_names_allowed,
        }
    }

    /// Generates a name from per-field short codes.
    pub async fn generate(&self, request: NameRequest) -> Result<GenerationResult, AppError> {
        let rule = match self
            .select_type(&request.resource_type, request.resource_id)
            .await?
        {
            Ok(rule) => rule,
            Err(message) => return Ok(GenerationResult::rejected(message)),
        };
        let snapshot = self.snapshot().await?;
        self.run(
            &rule,
            &snapshot,
            ValueSource::ShortCodes(&request.values),
            request.created_by,
        )
        .await
    }

    /// Generates a name from pre-resolved component values.
    pub async fn generate_with_values(
        &self,
        request: ResolvedNameRequest,
    ) -> Result<GenerationResult, AppError> {
        let rule = match self
            .select_type(&request.resource_type, request.resource_id)
            .await?
        {
            Ok(rule) => rule,
            Err(message) => return Ok(GenerationResult::rejected(message)),
        };
        let snapshot = self.snapshot().await?;
        self.run(
            &rule,
            &snapshot,
            ValueSource::Resolved(&request.values),
            request.created_by,
        )
        .await
    }

    /// Validates a caller-supplied name against a type's rule without
    /// composing, persisting or duplicate-checking anything.
    pub async fn validate_only(
        &self,
        type_short_name: &str,
        name: &str,
    ) -> Result<ValidationOutcome, AppError> {
        let mut matches = self.resource_types.find_by_short_name(type_short_name).await?;
        let rule = match matches.len() {
            0 => {
                return Err(AppError::not_found(
                    "Resource type not found",
                    serde_json::json!({"resource_type": type_short_name}),
                ));
            }
            _ => matches.swap_remove(0),
        };
        let delimiter = self.delimiters.current().await?;
        Ok(validator::validate_name(&rule, name, &delimiter))
    }

    async fn run(
        &self,
        rule: &ResourceType,
        snapshot: &CatalogSnapshot,
        source: ValueSource<'_>,
        created_by: Option<String>,
    ) -> Result<GenerationResult, AppError> {
        let composition = match composer::compose(rule, snapshot, &source) {
            Ok(composition) => composition,
            Err(error) => return Ok(GenerationResult::rejected(error.to_string())),
        };

        if composition.is_static {
            // A static value is returned verbatim and never logged.
            return Ok(GenerationResult {
                success: true,
                resource_name: composition.candidate.text,
                message: composition.messages.join(" "),
                details: None,
            });
        }

        let outcome =
            validator::validate_candidate(rule, &composition.candidate, &snapshot.delimiter);
        let mut messages = composition.messages;
        messages.extend(outcome.messages.iter().cloned());
        if !outcome.valid {
            return Ok(GenerationResult::rejected(messages.join(" ")));
        }

        let final_name = outcome.name.to_lowercase();

        if !self.duplicate_names_allowed {
            // Check-then-append is not atomic across processes; the store's
            // own mutex only serializes appends within this one.
            let existing = self.generated_names.list().await?;
            if existing
                .iter()
                .any(|record| record.resource_name.to_lowercase() == final_name)
            {
                return Ok(GenerationResult::rejected(format!(
                    "The name ({final_name}) you are trying to generate already exists. Please \
                     select different component options and try again."
                )));
            }
        }

        let resource_type_name = match &rule.property {
            Some(property) if !property.is_empty() => {
                format!("{} - {}", rule.resource, property)
            }
            _ => rule.resource.clone(),
        };
        let record = self
            .generated_names
            .append(NewGeneratedName {
                resource_name: final_name.clone(),
                resource_type_name,
                components: composition.candidate.components,
                user: created_by.unwrap_or_else(|| DEFAULT_USER.to_string()),
            })
            .await?;

        tracing::info!(
            resource_name = %record.resource_name,
            resource_type = %record.resource_type_name,
            user = %record.user,
            "generated resource name"
        );

        if self.webhook.is_configured() {
            let webhook = Arc::clone(&self.webhook);
            let notification = record.clone();
            // Fire and forget; delivery failure never fails the request.
            tokio::spawn(async move {
                webhook.notify(&notification).await;
            });
        }

        Ok(GenerationResult {
            success: true,
            resource_name: record.resource_name.clone(),
            message: messages.join(" "),
            details: Some(record),
        })
    }

    /// Resolves the target type from its short name, disambiguating colliding
    /// short names by id. The inner `Err` carries a request-level rejection
    /// message as opposed to an infrastructure failure.
    async fn select_type(
        &self,
        short_name: &str,
        resource_id: Option<i64>,
    ) -> Result<Result<ResourceType, String>, AppError> {
        let mut matches = self.resource_types.find_by_short_name(short_name).await?;
        Ok(match (matches.len(), resource_id) {
            (0, _) => Err(UNKNOWN_TYPE_MESSAGE.to_string()),
            (1, _) => Ok(matches.swap_remove(0)),
            (_, None) => Err(AMBIGUOUS_TYPE_MESSAGE.to_string()),
            (_, Some(id)) => match matches.into_iter().find(|t| t.id == id) {
                Some(rule) => Ok(rule),
                None => Err(UNKNOWN_RESOURCE_ID_MESSAGE.to_string()),
            },
        })
    }

    async fn snapshot(&self) -> Result<CatalogSnapshot, AppError> {
        let components = self.components.list_enabled().await?;
        let delimiter = self.delimiters.current().await?;
        let mut snapshot = CatalogSnapshot::new(components, delimiter);
        for kind in CatalogKind::ALL {
            snapshot.insert_catalog(kind, self.catalogs.list(kind).await?);
        }
        snapshot.insert_custom_values(self.custom_components.list().await?);
        Ok(snapshot)
    }
}
