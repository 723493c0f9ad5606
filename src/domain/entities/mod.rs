//! Core domain entities for the naming engine.
//!
//! Entities are plain data structures mirroring the persisted configuration:
//! components, target type rules, delimiters, enumerated catalogs, custom
//! component values, and the generated-name log records.

pub mod catalog_entry;
pub mod component;
pub mod custom_component;
pub mod delimiter;
pub mod generated_name;
pub mod resource_type;

pub use catalog_entry::{CatalogEntry, CatalogKind};
pub use component::{ResourceComponent, normalize_component_name};
pub use custom_component::CustomComponent;
pub use delimiter::ResourceDelimiter;
pub use generated_name::{GeneratedName, NameComponent, NewGeneratedName};
pub use resource_type::ResourceType;
