pub mod naming_service;

pub use naming_service::{
    GenerationResult, NameRequest, NamingRequestService, ResolvedNameRequest, NAME_NOT_GENERATED,
};
