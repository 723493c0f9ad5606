//! Repository trait for the generated-name log.

use async_trait::async_trait;

use crate::domain::entities::{GeneratedName, NewGeneratedName};
use crate::error::AppError;

/// Append-only access to the generated-name log.
///
/// The log owns id assignment. Records are immutable after append; bulk
/// administrative deletion is handled outside this engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeneratedNameRepository: Send + Sync {
    /// Returns every persisted generated name.
    ///
    /// Used by the duplicate gate and the listing endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<GeneratedName>, AppError>;

    /// Appends a record and returns it with the assigned id and timestamp.
    ///
    /// Append must be at-least-once; it is not transactional with any prior
    /// duplicate-check read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn append(&self, record: NewGeneratedName) -> Result<GeneratedName, AppError>;
}
