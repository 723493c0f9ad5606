//! Repository trait for custom component values.

use async_trait::async_trait;

use crate::domain::entities::CustomComponent;
use crate::error::AppError;

/// Read access to admin-defined custom component values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomComponentRepository: Send + Sync {
    /// Returns every configured custom component value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<CustomComponent>, AppError>;
}
