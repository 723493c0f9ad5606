pub mod file_catalog_repository;
pub mod file_component_repository;
pub mod file_custom_component_repository;
pub mod file_delimiter_repository;
pub mod file_generated_name_repository;
pub mod file_resource_type_repository;
pub mod json_store;
pub mod seed;

pub use file_catalog_repository::FileCatalogRepository;
pub use file_component_repository::FileComponentRepository;
pub use file_custom_component_repository::FileCustomComponentRepository;
pub use file_delimiter_repository::FileDelimiterRepository;
pub use file_generated_name_repository::FileGeneratedNameRepository;
pub use file_resource_type_repository::FileResourceTypeRepository;
pub use json_store::JsonStore;
