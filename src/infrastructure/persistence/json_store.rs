//! JSON-file settings store.
//!
//! Every configuration collection lives in one JSON array file under the data
//! directory. Reads deserialize the whole file; writes go through a temp file
//! and rename so a crash mid-write never leaves a truncated file behind.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::error::AppError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access settings file {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("settings file {file} contains malformed data: {source}")]
    Data {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        tracing::error!(%error, "settings store failure");
        AppError::internal(error.to_string(), serde_json::json!({}))
    }
}

/// Handle to the settings directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn exists(&self, file: &str) -> bool {
        self.path(file).exists()
    }

    /// Loads a collection; a missing file reads as an empty collection.
    pub async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.path(file);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    file: file.to_string(),
                    source,
                });
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Data {
            file: file.to_string(),
            source,
        })
    }

    pub async fn save<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(items).map_err(|source| StoreError::Data {
            file: file.to_string(),
            source,
        })?;
        let path = self.path(file);
        let tmp = path.with_extension("json.tmp");
        let io_err = |source| StoreError::Io {
            file: file.to_string(),
            source,
        };
        tokio::fs::write(&tmp, &bytes).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| StoreError::Io {
                file: file.to_string(),
                source,
            })
    }
}
