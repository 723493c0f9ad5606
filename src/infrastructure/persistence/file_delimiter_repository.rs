use async_trait::async_trait;

use crate::domain::entities::ResourceDelimiter;
use crate::domain::repositories::DelimiterRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::json_store::JsonStore;

const FILE: &str = "delimiters.json";

pub struct FileDelimiterRepository {
    store: JsonStore,
}

impl FileDelimiterRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DelimiterRepository for FileDelimiterRepository {
    /// The single enabled delimiter; no enabled entry means no delimiter.
    async fn current(&self) -> Result<ResourceDelimiter, AppError> {
        let delimiters: Vec<ResourceDelimiter> = self.store.load(FILE).await?;
        Ok(delimiters
            .into_iter()
            .find(|d| d.enabled)
            .unwrap_or_else(ResourceDelimiter::none))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delimiter(id: i64, value: &str, enabled: bool) -> ResourceDelimiter {
        ResourceDelimiter {
            id,
            name: format!("delimiter-{id}"),
            delimiter: value.to_string(),
            enabled,
            sort_order: id as i32,
        }
    }

    #[tokio::test]
    async fn test_current_picks_enabled_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store
            .save(
                FILE,
                &[delimiter(1, "-", false), delimiter(2, "_", true)],
            )
            .await
            .unwrap();

        let repo = FileDelimiterRepository::new(store);
        assert_eq!(repo.current().await.unwrap().delimiter, "_");
    }

    #[tokio::test]
    async fn test_current_defaults_to_none_when_nothing_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.save(FILE, &[delimiter(1, "-", false)]).await.unwrap();

        let repo = FileDelimiterRepository::new(store);
        let current = repo.current().await.unwrap();
        assert!(current.is_empty());
    }
}
