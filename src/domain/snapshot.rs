//! Per-request catalog snapshot and typed component value resolution.
//!
//! The engine never reads mutable catalog state mid-request: the
//! orchestrating service loads everything it needs into a [`CatalogSnapshot`]
//! up front and the composer works only against that immutable view.
//!
//! [`BuiltinComponent`] replaces the reflection-style "read the request
//! property matching the component name" lookup of conventional naming tools
//! with a statically-typed accessor table, and [`ComponentValue`] makes the
//! per-kind resolution explicit instead of inferring it at runtime.

use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::{
    CatalogEntry, CatalogKind, CustomComponent, ResourceComponent, ResourceDelimiter,
};

/// The built-in components a naming request can carry values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinComponent {
    Org,
    UnitDept,
    ProjAppSvc,
    Type,
    Function,
    Location,
    Environment,
    Instance,
}

impl BuiltinComponent {
    /// Maps a normalized component name to its built-in accessor.
    pub fn from_normalized(name: &str) -> Option<Self> {
        match name {
            "org" => Some(Self::Org),
            "unitdept" => Some(Self::UnitDept),
            "projappsvc" => Some(Self::ProjAppSvc),
            "type" => Some(Self::Type),
            "function" => Some(Self::Function),
            "location" => Some(Self::Location),
            "environment" => Some(Self::Environment),
            "instance" => Some(Self::Instance),
            _ => None,
        }
    }

    /// The enumerated catalog this component resolves against.
    ///
    /// `Instance` is the only built-in without a catalog; its value is a
    /// caller-supplied numeral.
    pub fn catalog(self) -> Option<CatalogKind> {
        match self {
            Self::Org => Some(CatalogKind::Org),
            Self::UnitDept => Some(CatalogKind::UnitDept),
            Self::ProjAppSvc => Some(CatalogKind::ProjAppSvc),
            Self::Type => Some(CatalogKind::ResourceType),
            Self::Function => Some(CatalogKind::Function),
            Self::Location => Some(CatalogKind::Location),
            Self::Environment => Some(CatalogKind::Environment),
            Self::Instance => None,
        }
    }
}

/// A component value tagged with how it must be resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A short code that must exist in the named built-in catalog.
    Enumerated { kind: CatalogKind, code: String },
    /// A short code that must exist among the parent's custom values.
    Custom(String),
    /// Accepted as supplied.
    FreeText(String),
    /// Accepted as supplied; the validator enforces digits-only.
    Numeric(String),
}

/// Strict per-field input for the short-code request form.
///
/// One typed field per built-in component plus the custom component map
/// (keyed by normalized parent name).
#[derive(Debug, Clone, Default)]
pub struct NameRequestValues {
    pub org: Option<String>,
    pub unit_dept: Option<String>,
    pub proj_app_svc: Option<String>,
    pub resource_type: Option<String>,
    pub function: Option<String>,
    pub location: Option<String>,
    pub environment: Option<String>,
    pub instance: Option<String>,
    pub custom_components: BTreeMap<String, String>,
}

impl NameRequestValues {
    /// Typed accessor table: built-in component to supplied value.
    pub fn builtin(&self, component: BuiltinComponent) -> Option<&str> {
        match component {
            BuiltinComponent::Org => self.org.as_deref(),
            BuiltinComponent::UnitDept => self.unit_dept.as_deref(),
            BuiltinComponent::ProjAppSvc => self.proj_app_svc.as_deref(),
            BuiltinComponent::Type => self.resource_type.as_deref(),
            BuiltinComponent::Function => self.function.as_deref(),
            BuiltinComponent::Location => self.location.as_deref(),
            BuiltinComponent::Environment => self.environment.as_deref(),
            BuiltinComponent::Instance => self.instance.as_deref(),
        }
    }

    /// Supplied value for a custom component, by normalized parent name.
    pub fn custom(&self, normalized: &str) -> Option<&str> {
        self.custom_components.get(normalized).map(String::as_str)
    }
}

/// Immutable view of the catalogs for the duration of one request.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// Enabled components in ascending sort order.
    pub components: Vec<ResourceComponent>,
    /// The currently enabled delimiter.
    pub delimiter: ResourceDelimiter,
    enumerated: HashMap<(CatalogKind, String), CatalogEntry>,
    custom_values: HashMap<(String, String), CustomComponent>,
}

impl CatalogSnapshot {
    pub fn new(components: Vec<ResourceComponent>, delimiter: ResourceDelimiter) -> Self {
        Self {
            components,
            delimiter,
            enumerated: HashMap::new(),
            custom_values: HashMap::new(),
        }
    }

    /// Adds one enumerated catalog, keyed by short name.
    pub fn insert_catalog(&mut self, kind: CatalogKind, entries: Vec<CatalogEntry>) {
        for entry in entries {
            self.enumerated
                .insert((kind, entry.short_name.clone()), entry);
        }
    }

    /// Adds the custom component values, keyed by (parent, lowercased short name).
    pub fn insert_custom_values(&mut self, values: Vec<CustomComponent>) {
        for value in values {
            let key = (value.parent_component.clone(), value.short_name.to_lowercase());
            self.custom_values.insert(key, value);
        }
    }

    pub fn resolve_enumerated(&self, kind: CatalogKind, short_name: &str) -> Option<&CatalogEntry> {
        self.enumerated.get(&(kind, short_name.to_string()))
    }

    pub fn resolve_custom(&self, parent: &str, short_name: &str) -> Option<&CustomComponent> {
        self.custom_values
            .get(&(parent.to_string(), short_name.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_accessor_table() {
        let values = NameRequestValues {
            org: Some("app".to_string()),
            environment: Some("dev".to_string()),
            instance: Some("001".to_string()),
            ..Default::default()
        };

        assert_eq!(values.builtin(BuiltinComponent::Org), Some("app"));
        assert_eq!(values.builtin(BuiltinComponent::Environment), Some("dev"));
        assert_eq!(values.builtin(BuiltinComponent::Instance), Some("001"));
        assert_eq!(values.builtin(BuiltinComponent::Location), None);
    }

    #[test]
    fn test_from_normalized_covers_unknown() {
        assert_eq!(
            BuiltinComponent::from_normalized("unitdept"),
            Some(BuiltinComponent::UnitDept)
        );
        assert_eq!(BuiltinComponent::from_normalized("workload"), None);
    }

    #[test]
    fn test_instance_has_no_catalog() {
        assert_eq!(BuiltinComponent::Instance.catalog(), None);
        assert_eq!(
            BuiltinComponent::Type.catalog(),
            Some(CatalogKind::ResourceType)
        );
    }

    #[test]
    fn test_custom_values_resolve_case_insensitively_on_short_name() {
        let delimiter = ResourceDelimiter::none();
        let mut snapshot = CatalogSnapshot::new(Vec::new(), delimiter);
        snapshot.insert_custom_values(vec![CustomComponent {
            id: 1,
            parent_component: "workload".to_string(),
            name: "Payments".to_string(),
            short_name: "PAY".to_string(),
            sort_order: 1,
            min_length: 1,
            max_length: 10,
        }]);

        assert!(snapshot.resolve_custom("workload", "pay").is_some());
        assert!(snapshot.resolve_custom("workload", "PAY").is_some());
        assert!(snapshot.resolve_custom("other", "pay").is_none());
    }
}
