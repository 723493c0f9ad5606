use async_trait::async_trait;

use crate::domain::entities::ResourceComponent;
use crate::domain::repositories::ComponentRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::json_store::JsonStore;

const FILE: &str = "components.json";

pub struct FileComponentRepository {
    store: JsonStore,
}

impl FileComponentRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ComponentRepository for FileComponentRepository {
    async fn list_enabled(&self) -> Result<Vec<ResourceComponent>, AppError> {
        let mut components: Vec<ResourceComponent> = self.store.load(FILE).await?;
        components.retain(|component| component.enabled);
        components.sort_by_key(|component| component.sort_order);
        Ok(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(id: i64, name: &str, enabled: bool, sort_order: i32) -> ResourceComponent {
        ResourceComponent {
            id,
            name: name.to_string(),
            display_name: name.to_string(),
            enabled,
            sort_order,
            is_custom: false,
            is_free_text: false,
        }
    }

    #[tokio::test]
    async fn test_list_enabled_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store
            .save(
                FILE,
                &[
                    component(1, "ResourceInstance", true, 8),
                    component(2, "ResourceOrg", true, 1),
                    component(3, "ResourceFunction", false, 4),
                ],
            )
            .await
            .unwrap();

        let repo = FileComponentRepository::new(store);
        let components = repo.list_enabled().await.unwrap();

        let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["ResourceOrg", "ResourceInstance"]);
    }
}
