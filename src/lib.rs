//! # Namegen
//!
//! A resource naming service: composes, validates and logs standardized
//! resource names from configurable components.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and the pure
//!   naming engine (composition and validation)
//! - **Application Layer** ([`application`]) - Request orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON-file settings store
//!   and outbound webhook
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export DATA_DIR="settings"
//! export GENERATION_WEBHOOK="https://hooks.example.com/naming"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        GenerationResult, NameRequest, NamingRequestService, ResolvedNameRequest,
    };
    pub use crate::domain::entities::{GeneratedName, ResourceComponent, ResourceType};
    pub use crate::domain::snapshot::NameRequestValues;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
