use async_trait::async_trait;

use crate::domain::entities::ResourceType;
use crate::domain::repositories::ResourceTypeRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::json_store::JsonStore;

const FILE: &str = "resourcetypes.json";

pub struct FileResourceTypeRepository {
    store: JsonStore,
}

impl FileResourceTypeRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ResourceTypeRepository for FileResourceTypeRepository {
    async fn list(&self) -> Result<Vec<ResourceType>, AppError> {
        Ok(self.store.load(FILE).await?)
    }

    async fn find_by_short_name(&self, short_name: &str) -> Result<Vec<ResourceType>, AppError> {
        let mut types: Vec<ResourceType> = self.store.load(FILE).await?;
        let wanted = short_name.to_lowercase();
        types.retain(|t| t.short_name.to_lowercase() == wanted);
        Ok(types)
    }
}
