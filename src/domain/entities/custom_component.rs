//! Custom component value entity.

use serde::{Deserialize, Serialize};

/// One enumerated value of an admin-defined component.
///
/// Keyed by `(parent_component, short_name)`; `parent_component` holds the
/// parent's normalized name and `short_name` is lowercased on write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomComponent {
    pub id: i64,
    pub parent_component: String,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

fn default_min_length() -> u32 {
    1
}

fn default_max_length() -> u32 {
    10
}
