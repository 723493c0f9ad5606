//! Repository trait for enumerated component catalogs.

use async_trait::async_trait;

use crate::domain::entities::{CatalogEntry, CatalogKind};
use crate::error::AppError;

/// Read access to the enumerated catalogs backing the built-in components
/// (organization, unit/department, project/app/service, function, location,
/// environment, resource type).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Returns every entry of one catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, AppError>;
}
