use async_trait::async_trait;

use crate::domain::entities::{CatalogEntry, CatalogKind};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::json_store::JsonStore;

pub struct FileCatalogRepository {
    store: JsonStore,
}

impl FileCatalogRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    fn file(kind: CatalogKind) -> &'static str {
        match kind {
            CatalogKind::Org => "orgs.json",
            CatalogKind::UnitDept => "unitdepts.json",
            CatalogKind::ProjAppSvc => "projappsvcs.json",
            CatalogKind::Function => "functions.json",
            CatalogKind::Location => "locations.json",
            CatalogKind::Environment => "environments.json",
            // Resource types double as the type component's catalog.
            CatalogKind::ResourceType => "resourcetypes.json",
        }
    }
}

#[async_trait]
impl CatalogRepository for FileCatalogRepository {
    async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, AppError> {
        Ok(self.store.load(Self::file(kind)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_each_kind_reads_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store
            .save(
                "orgs.json",
                &[CatalogEntry {
                    id: 1,
                    name: "Application".to_string(),
                    short_name: "app".to_string(),
                    sort_order: 1,
                }],
            )
            .await
            .unwrap();

        let repo = FileCatalogRepository::new(store);
        assert_eq!(repo.list(CatalogKind::Org).await.unwrap().len(), 1);
        assert!(repo.list(CatalogKind::Location).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resource_type_catalog_reads_type_definitions() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        // The full type definition deserializes down to a catalog entry via
        // the "resource" alias.
        tokio::fs::write(
            store.path("resourcetypes.json"),
            r#"[{"id":1,"resource":"Resource Group","short_name":"rg","pattern":".*","length_min":1,"length_max":90}]"#,
        )
        .await
        .unwrap();

        let repo = FileCatalogRepository::new(store);
        let entries = repo.list(CatalogKind::ResourceType).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Resource Group");
        assert_eq!(entries[0].short_name, "rg");
    }
}
