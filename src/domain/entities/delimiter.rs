//! Delimiter entity.

use serde::{Deserialize, Serialize};

/// The separator inserted between component values.
///
/// At most one delimiter is enabled at a time; an empty `delimiter` string is
/// the valid "no delimiter" state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDelimiter {
    pub id: i64,
    pub name: String,
    pub delimiter: String,
    pub enabled: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl ResourceDelimiter {
    /// The no-delimiter state, used when no delimiter is enabled.
    pub fn none() -> Self {
        Self {
            id: 0,
            name: "none".to_string(),
            delimiter: String::new(),
            enabled: true,
            sort_order: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.delimiter.is_empty()
    }
}
