use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{GeneratedName, NewGeneratedName};
use crate::domain::repositories::GeneratedNameRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::json_store::JsonStore;

const FILE: &str = "generatednames.json";

pub struct FileGeneratedNameRepository {
    store: JsonStore,
    // Serializes read-modify-write appends within this process.
    write_lock: Mutex<()>,
}

impl FileGeneratedNameRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl GeneratedNameRepository for FileGeneratedNameRepository {
    async fn list(&self) -> Result<Vec<GeneratedName>, AppError> {
        Ok(self.store.load(FILE).await?)
    }

    async fn append(&self, new: NewGeneratedName) -> Result<GeneratedName, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<GeneratedName> = self.store.load(FILE).await?;
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = GeneratedName {
            id,
            created_on: Utc::now(),
            resource_name: new.resource_name,
            resource_type_name: new.resource_type_name,
            components: new.components,
            user: new.user,
        };
        records.push(record.clone());
        self.store.save(FILE, &records).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NameComponent;

    fn new_record(name: &str) -> NewGeneratedName {
        NewGeneratedName {
            resource_name: name.to_string(),
            resource_type_name: "Resource Group".to_string(),
            components: vec![NameComponent {
                name: "ResourceOrg".to_string(),
                value: "app".to_string(),
            }],
            user: "General".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_assigns_monotonic_ids() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileGeneratedNameRepository::new(JsonStore::new(dir.path()));

        let first = repo.append(new_record("app-rg-001")).await.unwrap();
        let second = repo.append(new_record("app-rg-002")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        let records = repo.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].resource_name, "app-rg-002");
    }

    #[tokio::test]
    async fn test_list_on_fresh_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileGeneratedNameRepository::new(JsonStore::new(dir.path()));
        assert!(repo.list().await.unwrap().is_empty());
    }
}
