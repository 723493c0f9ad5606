#![allow(dead_code)]

use std::sync::Arc;

use namegen::application::services::NamingRequestService;
use namegen::domain::entities::{CatalogEntry, ResourceType};
use namegen::infrastructure::persistence::{
    seed, FileCatalogRepository, FileComponentRepository, FileCustomComponentRepository,
    FileDelimiterRepository, FileGeneratedNameRepository, FileResourceTypeRepository, JsonStore,
};
use namegen::infrastructure::webhook::NullWebhook;
use namegen::state::AppState;
use tempfile::TempDir;

fn entry(id: i64, name: &str, short_name: &str) -> CatalogEntry {
    CatalogEntry {
        id,
        name: name.to_string(),
        short_name: short_name.to_string(),
        sort_order: id as i32,
    }
}

fn base_type(id: i64, resource: &str, short_name: &str) -> ResourceType {
    ResourceType {
        id,
        resource: resource.to_string(),
        short_name: short_name.to_string(),
        pattern: "^[a-z0-9-]+$".to_string(),
        length_min: 1,
        length_max: 90,
        static_values: None,
        property: None,
        invalid_characters: String::new(),
        invalid_characters_start: String::new(),
        invalid_characters_end: String::new(),
        invalid_characters_consecutive: String::new(),
        optional: [
            "ResourceUnitDept",
            "ResourceProjAppSvc",
            "ResourceFunction",
            "ResourceLocation",
            "ResourceEnvironment",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        exclude: Vec::new(),
    }
}

fn fixture_types() -> Vec<ResourceType> {
    let mut storage = base_type(2, "Storage Account", "st");
    storage.pattern = "^[a-z0-9]+$".to_string();
    storage.length_min = 3;
    storage.length_max = 24;
    storage.invalid_characters = "-".to_string();

    let mut capped = base_type(3, "Short Cap", "cap");
    capped.length_max = 8;

    let mut fixed = base_type(4, "Global Static", "global");
    fixed.static_values = Some("FixedName".to_string());

    let mut dup_a = base_type(10, "Dup Alpha", "dup");
    dup_a.optional.push("ResourceInstance".to_string());
    let mut dup_b = base_type(11, "Dup Beta", "dup");
    dup_b.optional.push("ResourceInstance".to_string());

    vec![
        base_type(1, "Resource Group", "rg"),
        storage,
        capped,
        fixed,
        dup_a,
        dup_b,
    ]
}

/// Creates an [`AppState`] over a throwaway settings directory seeded with a
/// small catalog. The returned [`TempDir`] must be kept alive for the
/// duration of the test.
pub async fn create_test_state(duplicate_names_allowed: bool) -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());
    seed::ensure_seeded(&store).await.unwrap();

    store
        .save("orgs.json", &[entry(1, "Application", "app")])
        .await
        .unwrap();
    store
        .save(
            "environments.json",
            &[
                entry(1, "Development", "dev"),
                entry(2, "Test", "test"),
                entry(3, "Production", "prd"),
            ],
        )
        .await
        .unwrap();
    store
        .save("locations.json", &[entry(1, "East US", "eus")])
        .await
        .unwrap();
    store
        .save("resourcetypes.json", &fixture_types())
        .await
        .unwrap();

    let webhook = Arc::new(NullWebhook);
    let components = Arc::new(FileComponentRepository::new(store.clone()));
    let generated_names = Arc::new(FileGeneratedNameRepository::new(store.clone()));
    let naming = Arc::new(NamingRequestService::new(
        components.clone(),
        Arc::new(FileResourceTypeRepository::new(store.clone())),
        Arc::new(FileDelimiterRepository::new(store.clone())),
        Arc::new(FileCatalogRepository::new(store.clone())),
        Arc::new(FileCustomComponentRepository::new(store.clone())),
        generated_names.clone(),
        webhook.clone(),
        duplicate_names_allowed,
    ));

    (
        AppState::new(naming, components, generated_names, webhook),
        dir,
    )
}
