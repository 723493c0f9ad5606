//! Enumerated catalog entities.

use serde::{Deserialize, Serialize};

/// One enumerated value of a built-in component catalog.
///
/// The `resource` alias lets the resource-type list double as the enumeration
/// for the `ResourceType` component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    #[serde(alias = "resource")]
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// The built-in enumerated catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Org,
    UnitDept,
    ProjAppSvc,
    Function,
    Location,
    Environment,
    ResourceType,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 7] = [
        CatalogKind::Org,
        CatalogKind::UnitDept,
        CatalogKind::ProjAppSvc,
        CatalogKind::Function,
        CatalogKind::Location,
        CatalogKind::Environment,
        CatalogKind::ResourceType,
    ];
}
