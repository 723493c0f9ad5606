//! First-run seeding of the settings directory.

use crate::domain::entities::{ResourceComponent, ResourceDelimiter};
use crate::infrastructure::persistence::json_store::{JsonStore, StoreError};

const BUILTIN_COMPONENTS: [(&str, &str); 8] = [
    ("ResourceOrg", "Organization"),
    ("ResourceUnitDept", "Unit-Department"),
    ("ResourceProjAppSvc", "Project-App-Service"),
    ("ResourceType", "Resource Type"),
    ("ResourceFunction", "Function"),
    ("ResourceLocation", "Location"),
    ("ResourceEnvironment", "Environment"),
    ("ResourceInstance", "Instance"),
];

/// Writes default components and delimiters when their files are absent.
/// Existing files are never touched.
pub async fn ensure_seeded(store: &JsonStore) -> Result<(), StoreError> {
    tokio::fs::create_dir_all(store.dir())
        .await
        .map_err(|source| StoreError::Io {
            file: store.dir().display().to_string(),
            source,
        })?;

    if !store.exists("components.json") {
        let components: Vec<ResourceComponent> = BUILTIN_COMPONENTS
            .iter()
            .enumerate()
            .map(|(i, (name, display_name))| ResourceComponent {
                id: i as i64 + 1,
                name: name.to_string(),
                display_name: display_name.to_string(),
                enabled: true,
                sort_order: i as i32 + 1,
                is_custom: false,
                is_free_text: false,
            })
            .collect();
        store.save("components.json", &components).await?;
        tracing::info!(count = components.len(), "seeded default components");
    }

    if !store.exists("delimiters.json") {
        let delimiters = [
            ("Hyphen", "-", true),
            ("Underscore", "_", false),
            ("Period", ".", false),
            ("None", "", false),
        ]
        .iter()
        .enumerate()
        .map(|(i, (name, delimiter, enabled))| ResourceDelimiter {
            id: i as i64 + 1,
            name: name.to_string(),
            delimiter: delimiter.to_string(),
            enabled: *enabled,
            sort_order: i as i32 + 1,
        })
        .collect::<Vec<_>>();
        store.save("delimiters.json", &delimiters).await?;
        tracing::info!("seeded default delimiters");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeds_components_and_delimiters_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("settings"));

        ensure_seeded(&store).await.unwrap();

        let components: Vec<ResourceComponent> =
            store.load("components.json").await.unwrap();
        assert_eq!(components.len(), 8);
        assert_eq!(components[0].name, "ResourceOrg");
        assert_eq!(components[7].name, "ResourceInstance");

        let delimiters: Vec<ResourceDelimiter> =
            store.load("delimiters.json").await.unwrap();
        assert_eq!(delimiters.len(), 4);
        assert!(delimiters[0].enabled);
        assert_eq!(delimiters[0].delimiter, "-");
    }

    #[tokio::test]
    async fn test_existing_files_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let custom = vec![ResourceComponent {
            id: 1,
            name: "ResourceOrg".to_string(),
            display_name: "Organization".to_string(),
            enabled: false,
            sort_order: 1,
            is_custom: false,
            is_free_text: false,
        }];
        store.save("components.json", &custom).await.unwrap();

        ensure_seeded(&store).await.unwrap();

        let components: Vec<ResourceComponent> =
            store.load("components.json").await.unwrap();
        assert_eq!(components.len(), 1);
        assert!(!components[0].enabled);
    }
}
