//! Repository trait for the delimiter setting.

use async_trait::async_trait;

use crate::domain::entities::ResourceDelimiter;
use crate::error::AppError;

/// Read access to the currently enabled delimiter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DelimiterRepository: Send + Sync {
    /// Returns the enabled delimiter, or the no-delimiter state when none is
    /// enabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn current(&self) -> Result<ResourceDelimiter, AppError>;
}
