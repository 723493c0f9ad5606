//! Naming component entity.

use serde::{Deserialize, Serialize};

/// One ordered, independently enabled segment of a composed name.
///
/// Built-in components (organization, environment, location, type, instance,
/// ...) carry `is_custom = false`; admin-defined components are custom and
/// either enumerated or free-text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceComponent {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub enabled: bool,
    pub sort_order: i32,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub is_free_text: bool,
}

impl ResourceComponent {
    /// The canonical lookup key for this component.
    ///
    /// Strips the `Resource` prefix, removes spaces, and lowercases, so that
    /// `ResourceUnitDept` and `Resource Unit Dept` both key as `unitdept`.
    /// Optional/excluded sets, custom-component maps, and the request
    /// accessor table all use this form.
    pub fn normalized_name(&self) -> String {
        normalize_component_name(&self.name)
    }
}

/// Normalizes a component name to its canonical lookup key.
pub fn normalize_component_name(name: &str) -> String {
    name.replace("Resource", "").replace(' ', "").to_lowercase()
}
