//! Repository trait for the component catalog.

use async_trait::async_trait;

use crate::domain::entities::ResourceComponent;
use crate::error::AppError;

/// Read access to the ordered component catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileComponentRepository`] - JSON file backed
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Returns enabled components in ascending sort order.
    ///
    /// Composition always walks this list front to back, so the ordering
    /// returned here decides where each value lands in the name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_enabled(&self) -> Result<Vec<ResourceComponent>, AppError>;
}
