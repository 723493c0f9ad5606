//! Domain layer: entities, repository traits and the pure naming engine.

pub mod composer;
pub mod entities;
pub mod repositories;
pub mod snapshot;
pub mod validator;
