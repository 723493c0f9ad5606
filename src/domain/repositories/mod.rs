//! Repository trait definitions for the domain layer.
//!
//! Traits define the read/write contracts toward the external catalog and
//! log collaborators; concrete implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service unit tests.

pub mod catalog_repository;
pub mod component_repository;
pub mod custom_component_repository;
pub mod delimiter_repository;
pub mod generated_name_repository;
pub mod resource_type_repository;

pub use catalog_repository::CatalogRepository;
pub use component_repository::ComponentRepository;
pub use custom_component_repository::CustomComponentRepository;
pub use delimiter_repository::DelimiterRepository;
pub use generated_name_repository::GeneratedNameRepository;
pub use resource_type_repository::ResourceTypeRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use component_repository::MockComponentRepository;
#[cfg(test)]
pub use custom_component_repository::MockCustomComponentRepository;
#[cfg(test)]
pub use delimiter_repository::MockDelimiterRepository;
#[cfg(test)]
pub use generated_name_repository::MockGeneratedNameRepository;
#[cfg(test)]
pub use resource_type_repository::MockResourceTypeRepository;
