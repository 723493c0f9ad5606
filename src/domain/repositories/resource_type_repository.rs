//! Repository trait for target type rules.

use async_trait::async_trait;

use crate::domain::entities::ResourceType;
use crate::error::AppError;

/// Read access to the target type rule catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileResourceTypeRepository`] - JSON file backed
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceTypeRepository: Send + Sync {
    /// Returns every configured type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<ResourceType>, AppError>;

    /// Returns all types matching a short name.
    ///
    /// Short names are not unique across types; callers disambiguate
    /// multi-element results via the type id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_name(&self, short_name: &str) -> Result<Vec<ResourceType>, AppError>;
}
