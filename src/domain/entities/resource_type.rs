//! Target type rule entity.

use serde::{Deserialize, Serialize};

use super::component::normalize_component_name;

/// The validation contract for one kind of named resource.
///
/// Carries the structural rules a generated name must satisfy (pattern,
/// length bounds, forbidden character sets) plus the per-type component
/// policy: which components are optional and which are excluded entirely.
/// A component listed in both sets is treated as excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceType {
    pub id: i64,
    /// Descriptive name, e.g. `Resource Group`.
    pub resource: String,
    pub short_name: String,
    /// Validation regex applied to the full composed name.
    pub pattern: String,
    pub length_min: usize,
    pub length_max: usize,
    /// When set, composition is bypassed and this literal is returned.
    #[serde(default)]
    pub static_values: Option<String>,
    /// Optional descriptive suffix appended to the persisted type name.
    #[serde(default)]
    pub property: Option<String>,
    /// Characters forbidden anywhere in the name.
    #[serde(default)]
    pub invalid_characters: String,
    /// Characters the name must not start with.
    #[serde(default)]
    pub invalid_characters_start: String,
    /// Characters the name must not end with.
    #[serde(default)]
    pub invalid_characters_end: String,
    /// Characters that must not repeat consecutively.
    #[serde(default)]
    pub invalid_characters_consecutive: String,
    /// Component names that may be omitted for this type.
    #[serde(default)]
    pub optional: Vec<String>,
    /// Component names that never contribute to this type.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ResourceType {
    /// True when the component (by normalized name) may be omitted.
    pub fn is_optional(&self, normalized: &str) -> bool {
        self.optional
            .iter()
            .any(|name| normalize_component_name(name) == normalized)
    }

    /// True when the component (by normalized name) is excluded for this type.
    pub fn is_excluded(&self, normalized: &str) -> bool {
        self.exclude
            .iter()
            .any(|name| normalize_component_name(name) == normalized)
    }

    /// The static literal name for this type, if one is configured.
    pub fn static_value(&self) -> Option<&str> {
        self.static_values.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> ResourceType {
        ResourceType {
            id: 1,
            resource: "Resource Group".to_string(),
            short_name: "rg".to_string(),
            pattern: "^[a-z0-9-]+$".to_string(),
            length_min: 1,
            length_max: 90,
            static_values: None,
            property: None,
            invalid_characters: String::new(),
            invalid_characters_start: String::new(),
            invalid_characters_end: String::new(),
            invalid_characters_consecutive: String::new(),
            optional: vec!["ResourceFunction".to_string()],
            exclude: vec!["Resource Unit Dept".to_string()],
        }
    }

    #[test]
    fn test_optional_and_excluded_use_normalized_names() {
        let rule = rule();
        assert!(rule.is_optional("function"));
        assert!(!rule.is_optional("org"));
        assert!(rule.is_excluded("unitdept"));
        assert!(!rule.is_excluded("function"));
    }

    #[test]
    fn test_static_value_ignores_empty() {
        let mut rule = rule();
        assert!(rule.static_value().is_none());
        rule.static_values = Some(String::new());
        assert!(rule.static_value().is_none());
        rule.static_values = Some("global".to_string());
        assert_eq!(rule.static_value(), Some("global"));
    }
}
