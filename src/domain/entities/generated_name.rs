//! Generated name record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One contributing component of a generated name, in composition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameComponent {
    pub name: String,
    pub value: String,
}

/// A persisted, accepted naming request result.
///
/// Created only after successful validation and the duplicate check;
/// immutable thereafter. The id is assigned by the generated-name log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedName {
    pub id: i64,
    pub created_on: DateTime<Utc>,
    pub resource_name: String,
    pub resource_type_name: String,
    pub components: Vec<NameComponent>,
    pub user: String,
}

/// Input data for appending a generated name to the log.
#[derive(Debug, Clone)]
pub struct NewGeneratedName {
    pub resource_name: String,
    pub resource_type_name: String,
    pub components: Vec<NameComponent>,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_round_trips_components() {
        let record = GeneratedName {
            id: 3,
            created_on: Utc::now(),
            resource_name: "app-rg-001".to_string(),
            resource_type_name: "Resource Group".to_string(),
            components: vec![
                NameComponent {
                    name: "ResourceOrg".to_string(),
                    value: "app".to_string(),
                },
                NameComponent {
                    name: "ResourceInstance".to_string(),
                    value: "001".to_string(),
                },
            ],
            user: "General".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: GeneratedName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.components, record.components);
        assert_eq!(back.resource_name, "app-rg-001");
    }
}
