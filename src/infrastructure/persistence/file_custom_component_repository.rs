use async_trait::async_trait;

use crate::domain::entities::CustomComponent;
use crate::domain::repositories::CustomComponentRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::json_store::JsonStore;

const FILE: &str = "customcomponents.json";

pub struct FileCustomComponentRepository {
    store: JsonStore,
}

impl FileCustomComponentRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CustomComponentRepository for FileCustomComponentRepository {
    async fn list(&self) -> Result<Vec<CustomComponent>, AppError> {
        Ok(self.store.load(FILE).await?)
    }
}
